//! Circle entity

use super::{record_body, EntityCommon};
use crate::error::{DxfError, Result};
use crate::io::tag::CodePair;
use crate::io::writer::{TagSink, TagSinkExt};
use crate::record::DxfRecord;
use crate::types::Vector3;

/// A circle entity defined by center and radius
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Circle {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point
    pub center: Vector3,
    /// Radius
    pub radius: f64,
}

impl Circle {
    /// Create a circle at the origin with zero radius
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a circle from center and radius
    pub fn from_center(center: Vector3, radius: f64) -> Self {
        Circle {
            center,
            radius,
            ..Self::new()
        }
    }
}

impl DxfRecord for Circle {
    fn record_type(&self) -> &'static str {
        "CIRCLE"
    }

    fn emit(&self, sink: &mut dyn TagSink) -> Result<()> {
        sink.write_string(0, self.record_type())?;
        self.common.emit(sink)?;
        sink.write_subclass("AcDbCircle")?;
        sink.write_point3d(10, self.center)?;
        sink.write_double(40, self.radius)?;
        Ok(())
    }

    fn parse(tags: &[CodePair]) -> Result<Self> {
        let mut circle = Circle::new();
        let mut has_radius = false;
        for pair in record_body(tags) {
            if circle.common.apply(pair)? {
                continue;
            }
            match pair.code {
                10 => circle.center.x = pair.as_double()?,
                20 => circle.center.y = pair.as_double()?,
                30 => circle.center.z = pair.as_double()?,
                40 => {
                    circle.radius = pair.as_double()?;
                    has_radius = true;
                }
                _ => {}
            }
        }
        if !has_radius {
            return Err(DxfError::MissingRequiredField {
                record: "CIRCLE",
                code: 40,
            });
        }
        Ok(circle)
    }
}
