//! Viewport configuration table entry

use super::TableEntry;
use crate::entities::record_body;
use crate::error::{DxfError, Result};
use crate::io::tag::CodePair;
use crate::io::writer::{TagSink, TagSinkExt};
use crate::record::DxfRecord;
use crate::types::{Vector2, Vector3};

/// A viewport configuration table entry
#[derive(Debug, Clone, PartialEq)]
pub struct Vport {
    /// Viewport name
    pub name: String,
    /// Lower-left corner (fraction of screen)
    pub lower_left: Vector2,
    /// Upper-right corner (fraction of screen)
    pub upper_right: Vector2,
    /// View center in drawing coordinates
    pub center: Vector2,
    /// View direction from target
    pub direction: Vector3,
    /// View target point
    pub target: Vector3,
    /// View height
    pub height: f64,
    /// Viewport aspect ratio
    pub aspect_ratio: f64,
}

impl Vport {
    /// Create a new viewport configuration
    pub fn new(name: impl Into<String>) -> Self {
        Vport {
            name: name.into(),
            lower_left: Vector2::ZERO,
            upper_right: Vector2::new(1.0, 1.0),
            center: Vector2::ZERO,
            direction: Vector3::UNIT_Z,
            target: Vector3::ZERO,
            height: 1.0,
            aspect_ratio: 1.0,
        }
    }

    /// The *ACTIVE viewport every drawing carries
    pub fn active() -> Self {
        Vport::new("*ACTIVE")
    }
}

impl DxfRecord for Vport {
    fn record_type(&self) -> &'static str {
        "VPORT"
    }

    fn emit(&self, sink: &mut dyn TagSink) -> Result<()> {
        sink.write_string(0, self.record_type())?;
        sink.write_subclass("AcDbSymbolTableRecord")?;
        sink.write_subclass("AcDbViewportTableRecord")?;
        sink.write_string(2, &self.name)?;
        sink.write_i16(70, 0)?;
        sink.write_point2d(10, self.lower_left)?;
        sink.write_point2d(11, self.upper_right)?;
        sink.write_point2d(12, self.center)?;
        sink.write_point3d(16, self.direction)?;
        sink.write_point3d(17, self.target)?;
        sink.write_double(40, self.height)?;
        sink.write_double(41, self.aspect_ratio)?;
        Ok(())
    }

    fn parse(tags: &[CodePair]) -> Result<Self> {
        let mut vport = Vport::new("");
        let mut has_name = false;
        for pair in record_body(tags) {
            match pair.code {
                2 => {
                    vport.name = pair.value.clone();
                    has_name = true;
                }
                10 => vport.lower_left.x = pair.as_double()?,
                20 => vport.lower_left.y = pair.as_double()?,
                11 => vport.upper_right.x = pair.as_double()?,
                21 => vport.upper_right.y = pair.as_double()?,
                12 => vport.center.x = pair.as_double()?,
                22 => vport.center.y = pair.as_double()?,
                16 => vport.direction.x = pair.as_double()?,
                26 => vport.direction.y = pair.as_double()?,
                36 => vport.direction.z = pair.as_double()?,
                17 => vport.target.x = pair.as_double()?,
                27 => vport.target.y = pair.as_double()?,
                37 => vport.target.z = pair.as_double()?,
                40 => vport.height = pair.as_double()?,
                41 => vport.aspect_ratio = pair.as_double()?,
                _ => {}
            }
        }
        if !has_name {
            return Err(DxfError::MissingRequiredField {
                record: "VPORT",
                code: 2,
            });
        }
        Ok(vport)
    }
}

impl TableEntry for Vport {
    const TABLE_NAME: &'static str = "VPORT";

    fn name(&self) -> &str {
        &self.name
    }
}
