//! Text entity

use super::{record_body, EntityCommon};
use crate::error::{DxfError, Result};
use crate::io::tag::CodePair;
use crate::io::writer::{TagSink, TagSinkExt};
use crate::record::DxfRecord;
use crate::types::Vector3;

/// A single-line text entity
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// Common entity data
    pub common: EntityCommon,
    /// Insertion point
    pub insertion: Vector3,
    /// Text height
    pub height: f64,
    /// The text value (group code 1, required)
    pub value: String,
}

impl Text {
    /// Create an empty text at the origin
    pub fn new(value: impl Into<String>) -> Self {
        Text {
            common: EntityCommon::new(),
            insertion: Vector3::ZERO,
            height: 1.0,
            value: value.into(),
        }
    }
}

impl DxfRecord for Text {
    fn record_type(&self) -> &'static str {
        "TEXT"
    }

    fn emit(&self, sink: &mut dyn TagSink) -> Result<()> {
        sink.write_string(0, self.record_type())?;
        self.common.emit(sink)?;
        sink.write_subclass("AcDbText")?;
        sink.write_point3d(10, self.insertion)?;
        sink.write_double(40, self.height)?;
        sink.write_string(1, &self.value)?;
        Ok(())
    }

    fn parse(tags: &[CodePair]) -> Result<Self> {
        let mut text = Text::new("");
        let mut has_value = false;
        for pair in record_body(tags) {
            if text.common.apply(pair)? {
                continue;
            }
            match pair.code {
                10 => text.insertion.x = pair.as_double()?,
                20 => text.insertion.y = pair.as_double()?,
                30 => text.insertion.z = pair.as_double()?,
                40 => text.height = pair.as_double()?,
                1 => {
                    text.value = pair.value.clone();
                    has_value = true;
                }
                _ => {}
            }
        }
        if !has_value {
            return Err(DxfError::MissingRequiredField {
                record: "TEXT",
                code: 1,
            });
        }
        Ok(text)
    }
}
