//! Point entity

use super::{record_body, EntityCommon};
use crate::error::Result;
use crate::io::tag::CodePair;
use crate::io::writer::{TagSink, TagSinkExt};
use crate::record::DxfRecord;
use crate::types::Vector3;

/// A point entity
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Point {
    /// Common entity data
    pub common: EntityCommon,
    /// Position
    pub position: Vector3,
}

impl Point {
    /// Create a point at the origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a point at a position
    pub fn at(position: Vector3) -> Self {
        Point {
            position,
            ..Self::new()
        }
    }
}

impl DxfRecord for Point {
    fn record_type(&self) -> &'static str {
        "POINT"
    }

    fn emit(&self, sink: &mut dyn TagSink) -> Result<()> {
        sink.write_string(0, self.record_type())?;
        self.common.emit(sink)?;
        sink.write_subclass("AcDbPoint")?;
        sink.write_point3d(10, self.position)?;
        Ok(())
    }

    fn parse(tags: &[CodePair]) -> Result<Self> {
        let mut point = Point::new();
        for pair in record_body(tags) {
            if point.common.apply(pair)? {
                continue;
            }
            match pair.code {
                10 => point.position.x = pair.as_double()?,
                20 => point.position.y = pair.as_double()?,
                30 => point.position.z = pair.as_double()?,
                _ => {}
            }
        }
        Ok(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::writer::TagBuffer;

    #[test]
    fn test_point_round_trip() {
        let point = Point::at(Vector3::new(-1.5, 2.0, 9.75));
        let mut buf = TagBuffer::new();
        point.emit(&mut buf).unwrap();
        assert_eq!(Point::parse(buf.pairs()).unwrap(), point);
    }
}
