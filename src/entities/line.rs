//! Line entity

use super::{record_body, EntityCommon};
use crate::error::Result;
use crate::io::tag::CodePair;
use crate::io::writer::{TagSink, TagSinkExt};
use crate::record::DxfRecord;
use crate::types::Vector3;

/// A line entity defined by two endpoints
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line {
    /// Common entity data
    pub common: EntityCommon,
    /// Start point of the line
    pub start: Vector3,
    /// End point of the line
    pub end: Vector3,
}

impl Line {
    /// Create a new line from origin to origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new line between two points
    pub fn from_points(start: Vector3, end: Vector3) -> Self {
        Line {
            start,
            end,
            ..Self::new()
        }
    }

    /// Get the length of the line
    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }
}

impl DxfRecord for Line {
    fn record_type(&self) -> &'static str {
        "LINE"
    }

    fn emit(&self, sink: &mut dyn TagSink) -> Result<()> {
        sink.write_string(0, self.record_type())?;
        self.common.emit(sink)?;
        sink.write_subclass("AcDbLine")?;
        sink.write_point3d(10, self.start)?;
        sink.write_point3d(11, self.end)?;
        Ok(())
    }

    fn parse(tags: &[CodePair]) -> Result<Self> {
        let mut line = Line::new();
        for pair in record_body(tags) {
            if line.common.apply(pair)? {
                continue;
            }
            match pair.code {
                10 => line.start.x = pair.as_double()?,
                20 => line.start.y = pair.as_double()?,
                30 => line.start.z = pair.as_double()?,
                11 => line.end.x = pair.as_double()?,
                21 => line.end.y = pair.as_double()?,
                31 => line.end.z = pair.as_double()?,
                _ => {}
            }
        }
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::writer::TagBuffer;

    #[test]
    fn test_line_round_trip() {
        let mut line = Line::from_points(Vector3::new(1.0, 2.0, 3.0), Vector3::new(4.0, 5.0, 6.0));
        line.common.layer = "Walls".to_string();

        let mut buf = TagBuffer::new();
        line.emit(&mut buf).unwrap();
        let parsed = Line::parse(buf.pairs()).unwrap();
        assert_eq!(parsed, line);
    }

    #[test]
    fn test_line_emit_is_idempotent() {
        let line = Line::from_points(Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 1.0, 0.0));
        let mut a = TagBuffer::new();
        let mut b = TagBuffer::new();
        line.emit(&mut a).unwrap();
        line.emit(&mut b).unwrap();
        assert_eq!(a.pairs(), b.pairs());
    }

    #[test]
    fn test_line_tag_layout() {
        let line = Line::from_points(Vector3::new(1.0, 0.0, 0.0), Vector3::new(2.0, 0.0, 0.0));
        let mut buf = TagBuffer::new();
        line.emit(&mut buf).unwrap();
        let codes: Vec<i32> = buf.pairs().iter().map(|p| p.code).collect();
        assert_eq!(codes, vec![0, 100, 100, 10, 20, 30, 11, 21, 31]);
    }

    #[test]
    fn test_unknown_codes_skipped() {
        let mut tags = vec![CodePair::new(0, "LINE", 0), CodePair::new(999, "junk", 0)];
        tags.push(CodePair::new(10, "5.0", 0));
        let line = Line::parse(&tags).unwrap();
        assert_eq!(line.start.x, 5.0);
    }

    #[test]
    fn test_line_length() {
        let line = Line::from_points(Vector3::ZERO, Vector3::new(3.0, 4.0, 0.0));
        assert_eq!(line.length(), 5.0);
    }
}
