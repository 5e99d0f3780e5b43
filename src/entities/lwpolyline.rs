//! Lightweight (2D) polyline entity

use super::{record_body, EntityCommon};
use crate::error::Result;
use crate::io::tag::CodePair;
use crate::io::writer::{TagSink, TagSinkExt};
use crate::record::DxfRecord;
use crate::types::Vector2;

/// A lightweight polyline: 2D vertices stored inline in one record
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LwPolyline {
    /// Common entity data
    pub common: EntityCommon,
    /// Polyline flags (group code 70; bit 1 = closed)
    pub flags: i16,
    /// Vertices, each a 10/20 pair in order
    pub vertices: Vec<Vector2>,
}

impl LwPolyline {
    /// Create an empty open polyline
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex
    pub fn add_vertex(&mut self, x: f64, y: f64) {
        self.vertices.push(Vector2::new(x, y));
    }

    /// Whether the closed flag is set
    pub fn is_closed(&self) -> bool {
        self.flags & 1 != 0
    }

    /// Set or clear the closed flag
    pub fn set_closed(&mut self, closed: bool) {
        if closed {
            self.flags |= 1;
        } else {
            self.flags &= !1;
        }
    }
}

impl DxfRecord for LwPolyline {
    fn record_type(&self) -> &'static str {
        "LWPOLYLINE"
    }

    fn emit(&self, sink: &mut dyn TagSink) -> Result<()> {
        sink.write_string(0, self.record_type())?;
        self.common.emit(sink)?;
        sink.write_subclass("AcDbPolyline")?;
        sink.write_i32(90, self.vertices.len() as i32)?;
        sink.write_i16(70, self.flags)?;
        for vertex in &self.vertices {
            sink.write_point2d(10, *vertex)?;
        }
        Ok(())
    }

    fn parse(tags: &[CodePair]) -> Result<Self> {
        let mut polyline = LwPolyline::new();
        for pair in record_body(tags) {
            if polyline.common.apply(pair)? {
                continue;
            }
            match pair.code {
                70 => polyline.flags = pair.as_i16()?,
                // vertex count is derived from the 10/20 runs
                90 => {}
                10 => polyline.vertices.push(Vector2::new(pair.as_double()?, 0.0)),
                20 => {
                    if let Some(last) = polyline.vertices.last_mut() {
                        last.y = pair.as_double()?;
                    }
                }
                _ => {}
            }
        }
        Ok(polyline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::writer::TagBuffer;

    #[test]
    fn test_lwpolyline_round_trip() {
        let mut polyline = LwPolyline::new();
        polyline.add_vertex(0.0, 0.0);
        polyline.add_vertex(10.0, 0.0);
        polyline.add_vertex(10.0, 5.0);
        polyline.set_closed(true);

        let mut buf = TagBuffer::new();
        polyline.emit(&mut buf).unwrap();
        assert_eq!(LwPolyline::parse(buf.pairs()).unwrap(), polyline);
    }

    #[test]
    fn test_vertex_count_written() {
        let mut polyline = LwPolyline::new();
        polyline.add_vertex(1.0, 2.0);
        polyline.add_vertex(3.0, 4.0);
        let mut buf = TagBuffer::new();
        polyline.emit(&mut buf).unwrap();
        let count = buf.pairs().iter().find(|p| p.code == 90).unwrap();
        assert_eq!(count.value, "2");
    }
}
