//! Polyline entity and its owned vertices

use super::{record_body, EntityCommon, Vertex};
use crate::error::Result;
use crate::io::tag::CodePair;
use crate::io::writer::{TagSink, TagSinkExt};
use crate::record::DxfRecord;
use crate::types::Vector3;
use bitflags::bitflags;

bitflags! {
    /// Polyline flags (group code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PolylineFlags: u16 {
        const CLOSED = 1;
        const CURVE_FIT = 2;
        const SPLINE_FIT = 4;
        const POLYLINE_3D = 8;
        const POLYGON_MESH = 16;
        const CLOSED_N = 32;
        const POLYFACE_MESH = 64;
        const CONTINUOUS_PATTERN = 128;
    }
}

/// A polyline entity owning its vertex records
///
/// On the wire a polyline is a POLYLINE record followed by one VERTEX
/// record per vertex and a closing SEQEND; `emit` produces the whole run.
/// The section parser reattaches the trailing vertex records after parsing
/// the polyline body itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    /// Common entity data
    pub common: EntityCommon,
    /// Polyline flags (group code 70)
    pub flags: PolylineFlags,
    /// Elevation/base point (group codes 10/20/30, conventionally zero)
    pub base: Vector3,
    /// Owned vertices, in insertion order
    pub vertices: Vec<Vertex>,
}

impl Polyline {
    /// Create an empty 3D polyline
    pub fn new() -> Self {
        Polyline {
            common: EntityCommon::new(),
            flags: PolylineFlags::POLYLINE_3D,
            base: Vector3::ZERO,
            vertices: Vec::new(),
        }
    }

    /// Append a vertex
    pub fn add_vertex(&mut self, x: f64, y: f64, z: f64) {
        self.vertices.push(Vertex::new(x, y, z));
    }

    /// Whether the closed flag is set
    pub fn is_closed(&self) -> bool {
        self.flags.contains(PolylineFlags::CLOSED)
    }

    /// Set or clear the closed flag
    pub fn set_closed(&mut self, closed: bool) {
        self.flags.set(PolylineFlags::CLOSED, closed);
    }
}

impl Default for Polyline {
    fn default() -> Self {
        Polyline::new()
    }
}

impl DxfRecord for Polyline {
    fn record_type(&self) -> &'static str {
        "POLYLINE"
    }

    fn emit(&self, sink: &mut dyn TagSink) -> Result<()> {
        sink.write_string(0, self.record_type())?;
        self.common.emit(sink)?;
        sink.write_subclass("AcDb3dPolyline")?;
        // vertices-follow marker
        sink.write_i16(66, 1)?;
        sink.write_point3d(10, self.base)?;
        sink.write_i16(70, self.flags.bits() as i16)?;
        for vertex in &self.vertices {
            vertex.emit(sink)?;
        }
        sink.write_string(0, "SEQEND")?;
        Ok(())
    }

    /// Parses the POLYLINE record body only; trailing VERTEX records are
    /// separate records and are attached by the section parser.
    fn parse(tags: &[CodePair]) -> Result<Self> {
        let mut polyline = Polyline::new();
        for pair in record_body(tags) {
            if polyline.common.apply(pair)? {
                continue;
            }
            match pair.code {
                70 => polyline.flags = PolylineFlags::from_bits_retain(pair.as_i16()? as u16),
                10 => polyline.base.x = pair.as_double()?,
                20 => polyline.base.y = pair.as_double()?,
                30 => polyline.base.z = pair.as_double()?,
                66 => {}
                _ => {}
            }
        }
        Ok(polyline)
    }
}
