//! Line type table entry

use super::TableEntry;
use crate::entities::record_body;
use crate::error::{DxfError, Result};
use crate::io::tag::CodePair;
use crate::io::writer::{TagSink, TagSinkExt};
use crate::record::DxfRecord;

/// A line type table entry
///
/// `elements` are the dash/dot/space lengths of the pattern (group code 49
/// per element); positive is a dash, negative a space, zero a dot.  The
/// total pattern length (40) and element count (73) are derived on output.
#[derive(Debug, Clone, PartialEq)]
pub struct LineType {
    /// Line type name
    pub name: String,
    /// Descriptive text
    pub description: String,
    /// Pattern element lengths
    pub elements: Vec<f64>,
}

impl LineType {
    /// Create a new line type with an empty (solid) pattern
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        LineType {
            name: name.into(),
            description: description.into(),
            elements: Vec::new(),
        }
    }

    /// The standard continuous line type
    pub fn continuous() -> Self {
        LineType::new("CONTINUOUS", "Solid line")
    }

    /// Create a line type with a dash pattern
    pub fn with_pattern(
        name: impl Into<String>,
        description: impl Into<String>,
        elements: Vec<f64>,
    ) -> Self {
        LineType {
            elements,
            ..Self::new(name, description)
        }
    }

    /// Total pattern length (sum of element magnitudes)
    pub fn pattern_length(&self) -> f64 {
        self.elements.iter().map(|e| e.abs()).sum()
    }
}

impl DxfRecord for LineType {
    fn record_type(&self) -> &'static str {
        "LTYPE"
    }

    fn emit(&self, sink: &mut dyn TagSink) -> Result<()> {
        sink.write_string(0, self.record_type())?;
        sink.write_subclass("AcDbSymbolTableRecord")?;
        sink.write_subclass("AcDbLinetypeTableRecord")?;
        sink.write_string(2, &self.name)?;
        sink.write_i16(70, 0)?;
        sink.write_string(3, &self.description)?;
        // alignment code, always 'A'
        sink.write_i16(72, 65)?;
        sink.write_i16(73, self.elements.len() as i16)?;
        sink.write_double(40, self.pattern_length())?;
        for element in &self.elements {
            sink.write_double(49, *element)?;
        }
        Ok(())
    }

    fn parse(tags: &[CodePair]) -> Result<Self> {
        let mut line_type = LineType::new("", "");
        let mut has_name = false;
        for pair in record_body(tags) {
            match pair.code {
                2 => {
                    line_type.name = pair.value.clone();
                    has_name = true;
                }
                3 => line_type.description = pair.value.clone(),
                49 => line_type.elements.push(pair.as_double()?),
                // 40 and 73 are derived from the 49 elements
                40 | 72 | 73 | 70 => {}
                _ => {}
            }
        }
        if !has_name {
            return Err(DxfError::MissingRequiredField {
                record: "LTYPE",
                code: 2,
            });
        }
        Ok(line_type)
    }
}

impl TableEntry for LineType {
    const TABLE_NAME: &'static str = "LTYPE";

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::writer::TagBuffer;

    #[test]
    fn test_linetype_round_trip() {
        let lt = LineType::with_pattern("DASHED", "__ __ __", vec![0.5, -0.25]);
        let mut buf = TagBuffer::new();
        lt.emit(&mut buf).unwrap();
        assert_eq!(LineType::parse(buf.pairs()).unwrap(), lt);
    }

    #[test]
    fn test_pattern_length() {
        let lt = LineType::with_pattern("DOTTED", ". . .", vec![0.0, -0.25]);
        assert_eq!(lt.pattern_length(), 0.25);
    }
}
