//! Layer table entry

use super::TableEntry;
use crate::entities::record_body;
use crate::error::{DxfError, Result};
use crate::io::tag::CodePair;
use crate::io::writer::{TagSink, TagSinkExt};
use crate::record::DxfRecord;
use crate::types::Color;

/// A layer table entry
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// Layer name
    pub name: String,
    /// Standard flags (group code 70; bit 1 = frozen, bit 4 = locked)
    pub flags: i16,
    /// Layer color
    pub color: Color,
    /// Line type name
    pub line_type: String,
}

impl Layer {
    /// Create a new layer with default settings
    pub fn new(name: impl Into<String>) -> Self {
        Layer {
            name: name.into(),
            flags: 0,
            color: Color::WHITE,
            line_type: "CONTINUOUS".to_string(),
        }
    }

    /// The standard "0" layer every drawing carries
    pub fn layer_0() -> Self {
        Layer::new("0")
    }

    /// Create a layer with a specific color
    pub fn with_color(name: impl Into<String>, color: Color) -> Self {
        Layer {
            color,
            ..Self::new(name)
        }
    }
}

impl DxfRecord for Layer {
    fn record_type(&self) -> &'static str {
        "LAYER"
    }

    fn emit(&self, sink: &mut dyn TagSink) -> Result<()> {
        sink.write_string(0, self.record_type())?;
        sink.write_subclass("AcDbSymbolTableRecord")?;
        sink.write_subclass("AcDbLayerTableRecord")?;
        sink.write_string(2, &self.name)?;
        sink.write_i16(70, self.flags)?;
        sink.write_i16(62, self.color.to_wire_index())?;
        sink.write_string(6, &self.line_type)?;
        Ok(())
    }

    fn parse(tags: &[CodePair]) -> Result<Self> {
        let mut layer = Layer::new("");
        let mut has_name = false;
        for pair in record_body(tags) {
            match pair.code {
                2 => {
                    layer.name = pair.value.clone();
                    has_name = true;
                }
                70 => layer.flags = pair.as_i16()?,
                62 => layer.color = Color::from_index(pair.as_i16()?),
                6 => layer.line_type = pair.value.clone(),
                _ => {}
            }
        }
        if !has_name {
            return Err(DxfError::MissingRequiredField {
                record: "LAYER",
                code: 2,
            });
        }
        Ok(layer)
    }
}

impl TableEntry for Layer {
    const TABLE_NAME: &'static str = "LAYER";

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::writer::TagBuffer;

    #[test]
    fn test_layer_round_trip() {
        let layer = Layer::with_color("Walls", Color::Index(3));
        let mut buf = TagBuffer::new();
        layer.emit(&mut buf).unwrap();
        assert_eq!(Layer::parse(buf.pairs()).unwrap(), layer);
    }

    #[test]
    fn test_layer_requires_name() {
        let tags = vec![CodePair::new(70, "0", 0)];
        let err = Layer::parse(&tags).unwrap_err();
        assert!(matches!(
            err,
            DxfError::MissingRequiredField { record: "LAYER", code: 2 }
        ));
    }
}
