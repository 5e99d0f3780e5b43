//! Text style table entry

use super::TableEntry;
use crate::entities::record_body;
use crate::error::{DxfError, Result};
use crate::io::tag::CodePair;
use crate::io::writer::{TagSink, TagSinkExt};
use crate::record::DxfRecord;

/// A text style table entry
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Style name
    pub name: String,
    /// Primary font file
    pub font_file: String,
    /// Big font file (CJK), empty when unused
    pub big_font_file: String,
    /// Fixed height, 0 means not fixed
    pub fixed_height: f64,
    /// Width factor
    pub width_factor: f64,
    /// Oblique angle in degrees
    pub oblique_angle: f64,
    /// Last used height
    pub last_height: f64,
}

impl TextStyle {
    /// Create a new style with a font
    pub fn new(name: impl Into<String>, font_file: impl Into<String>) -> Self {
        TextStyle {
            name: name.into(),
            font_file: font_file.into(),
            big_font_file: String::new(),
            fixed_height: 0.0,
            width_factor: 1.0,
            oblique_angle: 0.0,
            last_height: 2.5,
        }
    }

    /// The STANDARD style every drawing carries
    pub fn standard() -> Self {
        TextStyle::new("STANDARD", "txt")
    }
}

impl DxfRecord for TextStyle {
    fn record_type(&self) -> &'static str {
        "STYLE"
    }

    fn emit(&self, sink: &mut dyn TagSink) -> Result<()> {
        sink.write_string(0, self.record_type())?;
        sink.write_subclass("AcDbSymbolTableRecord")?;
        sink.write_subclass("AcDbTextStyleTableRecord")?;
        sink.write_string(2, &self.name)?;
        sink.write_i16(70, 0)?;
        sink.write_double(40, self.fixed_height)?;
        sink.write_double(41, self.width_factor)?;
        sink.write_double(50, self.oblique_angle)?;
        sink.write_i16(71, 0)?;
        sink.write_double(42, self.last_height)?;
        sink.write_string(3, &self.font_file)?;
        sink.write_string(4, &self.big_font_file)?;
        Ok(())
    }

    fn parse(tags: &[CodePair]) -> Result<Self> {
        let mut style = TextStyle::new("", "");
        let mut has_name = false;
        for pair in record_body(tags) {
            match pair.code {
                2 => {
                    style.name = pair.value.clone();
                    has_name = true;
                }
                3 => style.font_file = pair.value.clone(),
                4 => style.big_font_file = pair.value.clone(),
                40 => style.fixed_height = pair.as_double()?,
                41 => style.width_factor = pair.as_double()?,
                50 => style.oblique_angle = pair.as_double()?,
                42 => style.last_height = pair.as_double()?,
                _ => {}
            }
        }
        if !has_name {
            return Err(DxfError::MissingRequiredField {
                record: "STYLE",
                code: 2,
            });
        }
        Ok(style)
    }
}

impl TableEntry for TextStyle {
    const TABLE_NAME: &'static str = "STYLE";

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::writer::TagBuffer;

    #[test]
    fn test_style_round_trip() {
        let mut style = TextStyle::new("Annotations", "simplex.shx");
        style.width_factor = 0.8;
        style.oblique_angle = 15.0;
        let mut buf = TagBuffer::new();
        style.emit(&mut buf).unwrap();
        assert_eq!(TextStyle::parse(buf.pairs()).unwrap(), style);
    }
}
