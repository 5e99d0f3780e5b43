//! Entity records and their shared common header

use crate::error::{DxfError, Result};
use crate::io::tag::CodePair;
use crate::io::writer::{TagSink, TagSinkExt};
use crate::record::DxfRecord;
use crate::types::{Color, Handle};

pub mod circle;
pub mod face3d;
pub mod line;
pub mod lwpolyline;
pub mod point;
pub mod polyline;
pub mod text;
pub mod vertex;

pub use circle::Circle;
pub use face3d::Face3D;
pub use line::Line;
pub use lwpolyline::LwPolyline;
pub use point::Point;
pub use polyline::{Polyline, PolylineFlags};
pub use text::Text;
pub use vertex::{Vertex, VertexFlags};

/// Common header fields shared by every entity
///
/// Emitted before any subclass-specific tags: handle (5), the `AcDbEntity`
/// subclass marker, layer (8), line type (6), color (62).  Fields left at
/// their defaults are omitted from the stream and come back as defaults.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntityCommon {
    /// Unique handle, omitted while null
    pub handle: Handle,
    /// Layer name
    pub layer: String,
    /// Line type name, empty means by layer
    pub line_type: String,
    /// Entity color
    pub color: Color,
}

impl EntityCommon {
    /// Create a common header with everything defaulted
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit the shared header tags
    pub fn emit(&self, sink: &mut dyn TagSink) -> Result<()> {
        if !self.handle.is_null() {
            sink.write_handle(5, self.handle)?;
        }
        sink.write_subclass("AcDbEntity")?;
        if !self.layer.is_empty() {
            sink.write_string(8, &self.layer)?;
        }
        if !self.line_type.is_empty() {
            sink.write_string(6, &self.line_type)?;
        }
        if self.color != Color::ByLayer {
            sink.write_i16(62, self.color.to_wire_index())?;
        }
        Ok(())
    }

    /// Try to consume a tag belonging to the shared header.
    ///
    /// Returns `true` when the tag was taken; subclass markers (100) carry
    /// no field data and are consumed here as well.
    pub fn apply(&mut self, pair: &CodePair) -> Result<bool> {
        match pair.code {
            5 => self.handle = pair.as_handle()?,
            8 => self.layer = pair.value.clone(),
            6 => self.line_type = pair.value.clone(),
            62 => self.color = Color::from_index(pair.as_i16()?),
            100 => {}
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// The tags belonging to one record: an optional leading code-0 marker is
/// skipped, and the slice ends before the next code-0 tag (which starts a
/// different record, e.g. a polyline's vertices).
pub(crate) fn record_body(tags: &[CodePair]) -> &[CodePair] {
    let body = match tags.first() {
        Some(first) if first.code == 0 => &tags[1..],
        _ => tags,
    };
    let end = body.iter().position(|p| p.code == 0).unwrap_or(body.len());
    &body[..end]
}

/// The closed set of entity kinds
///
/// Adding a kind here forces every dispatch site to handle it.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Line(Line),
    Circle(Circle),
    Point(Point),
    Text(Text),
    Vertex(Vertex),
    Polyline(Polyline),
    LwPolyline(LwPolyline),
    Face3D(Face3D),
}

impl Entity {
    /// The code-0 record-type marker for this kind
    pub fn record_type(&self) -> &'static str {
        match self {
            Entity::Line(e) => e.record_type(),
            Entity::Circle(e) => e.record_type(),
            Entity::Point(e) => e.record_type(),
            Entity::Text(e) => e.record_type(),
            Entity::Vertex(e) => e.record_type(),
            Entity::Polyline(e) => e.record_type(),
            Entity::LwPolyline(e) => e.record_type(),
            Entity::Face3D(e) => e.record_type(),
        }
    }

    /// Emit this entity's full tag sequence
    pub fn emit(&self, sink: &mut dyn TagSink) -> Result<()> {
        match self {
            Entity::Line(e) => e.emit(sink),
            Entity::Circle(e) => e.emit(sink),
            Entity::Point(e) => e.emit(sink),
            Entity::Text(e) => e.emit(sink),
            Entity::Vertex(e) => e.emit(sink),
            Entity::Polyline(e) => e.emit(sink),
            Entity::LwPolyline(e) => e.emit(sink),
            Entity::Face3D(e) => e.emit(sink),
        }
    }

    /// Parse one record given its upper-cased type name and tag list.
    ///
    /// `line` attributes an unknown kind to its source line.
    pub fn parse_record(name: &str, tags: &[CodePair], line: usize) -> Result<Entity> {
        match name {
            "LINE" => Line::parse(tags).map(Entity::Line),
            "CIRCLE" => Circle::parse(tags).map(Entity::Circle),
            "POINT" => Point::parse(tags).map(Entity::Point),
            "TEXT" => Text::parse(tags).map(Entity::Text),
            "VERTEX" => Vertex::parse(tags).map(Entity::Vertex),
            "POLYLINE" => Polyline::parse(tags).map(Entity::Polyline),
            "LWPOLYLINE" => LwPolyline::parse(tags).map(Entity::LwPolyline),
            "3DFACE" => Face3D::parse(tags).map(Entity::Face3D),
            _ => Err(DxfError::UnknownRecordKind {
                line,
                name: name.to_string(),
            }),
        }
    }

    /// Shared common header
    pub fn common(&self) -> &EntityCommon {
        match self {
            Entity::Line(e) => &e.common,
            Entity::Circle(e) => &e.common,
            Entity::Point(e) => &e.common,
            Entity::Text(e) => &e.common,
            Entity::Vertex(e) => &e.common,
            Entity::Polyline(e) => &e.common,
            Entity::LwPolyline(e) => &e.common,
            Entity::Face3D(e) => &e.common,
        }
    }

    /// Shared common header, mutable
    pub fn common_mut(&mut self) -> &mut EntityCommon {
        match self {
            Entity::Line(e) => &mut e.common,
            Entity::Circle(e) => &mut e.common,
            Entity::Point(e) => &mut e.common,
            Entity::Text(e) => &mut e.common,
            Entity::Vertex(e) => &mut e.common,
            Entity::Polyline(e) => &mut e.common,
            Entity::LwPolyline(e) => &mut e.common,
            Entity::Face3D(e) => &mut e.common,
        }
    }
}
