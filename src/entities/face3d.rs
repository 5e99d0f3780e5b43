//! 3DFACE entity

use super::{record_body, EntityCommon};
use crate::error::Result;
use crate::io::tag::CodePair;
use crate::io::writer::{TagSink, TagSinkExt};
use crate::record::DxfRecord;
use crate::types::Vector3;

/// A 3D face with up to four corners
///
/// Corner i is emitted at base code 10+i; a triangle repeats its last
/// corner in slot 3, matching the wire convention.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Face3D {
    /// Common entity data
    pub common: EntityCommon,
    /// Corner points, slot order 10/11/12/13
    pub corners: [Vector3; 4],
    /// Invisible edge flags (group code 70)
    pub invisible_edges: i16,
}

impl Face3D {
    /// Create a face with all corners at the origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a quadrilateral face
    pub fn quad(a: Vector3, b: Vector3, c: Vector3, d: Vector3) -> Self {
        Face3D {
            corners: [a, b, c, d],
            ..Self::new()
        }
    }

    /// Create a triangular face (last corner repeated)
    pub fn triangle(a: Vector3, b: Vector3, c: Vector3) -> Self {
        Self::quad(a, b, c, c)
    }
}

impl DxfRecord for Face3D {
    fn record_type(&self) -> &'static str {
        "3DFACE"
    }

    fn emit(&self, sink: &mut dyn TagSink) -> Result<()> {
        sink.write_string(0, self.record_type())?;
        self.common.emit(sink)?;
        sink.write_subclass("AcDbFace")?;
        for (i, corner) in self.corners.iter().enumerate() {
            sink.write_point3d(10 + i as i32, *corner)?;
        }
        sink.write_i16(70, self.invisible_edges)?;
        Ok(())
    }

    fn parse(tags: &[CodePair]) -> Result<Self> {
        let mut face = Face3D::new();
        for pair in record_body(tags) {
            if face.common.apply(pair)? {
                continue;
            }
            match pair.code {
                // corner slot is code % 10, axis is the tens digit minus one
                c @ 10..=33 if c % 10 < 4 => {
                    let corner = (c % 10) as usize;
                    let axis = (c / 10 - 1) as usize;
                    face.corners[corner].set_component(axis, pair.as_double()?);
                }
                70 => face.invisible_edges = pair.as_i16()?,
                _ => {}
            }
        }
        Ok(face)
    }
}
