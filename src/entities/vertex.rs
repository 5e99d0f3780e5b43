//! Polyline vertex entity

use super::{record_body, EntityCommon};
use crate::error::Result;
use crate::io::tag::CodePair;
use crate::io::writer::{TagSink, TagSinkExt};
use crate::record::DxfRecord;
use crate::types::Vector3;
use bitflags::bitflags;

bitflags! {
    /// Vertex flags (group code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct VertexFlags: u16 {
        const EXTRA_VERTEX = 1;
        const CURVE_FIT_TANGENT = 2;
        const SPLINE_VERTEX = 8;
        const SPLINE_FRAME_CONTROL = 16;
        const POLYLINE_3D_VERTEX = 32;
        const POLYGON_MESH_VERTEX = 64;
        const POLYFACE_MESH_VERTEX = 128;
    }
}

/// A vertex belonging to a polyline
///
/// Subclass chain: AcDbVertex, then AcDb3DPolylineVertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    /// Common entity data
    pub common: EntityCommon,
    /// Vertex flags (group code 70)
    pub flags: VertexFlags,
    /// Coordinate
    pub coord: Vector3,
}

impl Vertex {
    /// Create a 3D polyline vertex at a coordinate
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vertex {
            common: EntityCommon::new(),
            flags: VertexFlags::POLYLINE_3D_VERTEX,
            coord: Vector3::new(x, y, z),
        }
    }
}

impl Default for Vertex {
    fn default() -> Self {
        Vertex::new(0.0, 0.0, 0.0)
    }
}

impl DxfRecord for Vertex {
    fn record_type(&self) -> &'static str {
        "VERTEX"
    }

    fn emit(&self, sink: &mut dyn TagSink) -> Result<()> {
        sink.write_string(0, self.record_type())?;
        self.common.emit(sink)?;
        sink.write_subclass("AcDbVertex")?;
        sink.write_subclass("AcDb3dPolylineVertex")?;
        sink.write_i16(70, self.flags.bits() as i16)?;
        sink.write_point3d(10, self.coord)?;
        Ok(())
    }

    fn parse(tags: &[CodePair]) -> Result<Self> {
        let mut vertex = Vertex::default();
        for pair in record_body(tags) {
            if vertex.common.apply(pair)? {
                continue;
            }
            match pair.code {
                70 => vertex.flags = VertexFlags::from_bits_retain(pair.as_i16()? as u16),
                10 => vertex.coord.x = pair.as_double()?,
                20 => vertex.coord.y = pair.as_double()?,
                30 => vertex.coord.z = pair.as_double()?,
                _ => {}
            }
        }
        Ok(vertex)
    }
}
