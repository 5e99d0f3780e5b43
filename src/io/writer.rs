//! Tag emission: records to pairs, pairs to text lines

use crate::drawing::{Drawing, SectionKind};
use crate::error::Result;
use crate::io::tag::CodePair;
use crate::types::{Handle, Vector2, Vector3};
use std::io::Write;

/// Sink for an ordered sequence of (code, value) pairs
///
/// Records emit themselves into a sink; the sink decides whether the pairs
/// accumulate in memory or stream out as text.
pub trait TagSink {
    /// Append a pair with a string value
    fn write_string(&mut self, code: i32, value: &str) -> Result<()>;

    /// Append a pair with an i16 value
    fn write_i16(&mut self, code: i32, value: i16) -> Result<()>;

    /// Append a pair with an i32 value
    fn write_i32(&mut self, code: i32, value: i32) -> Result<()>;

    /// Append a pair with a double value
    fn write_double(&mut self, code: i32, value: f64) -> Result<()>;

    /// Append a pair with a handle value (hexadecimal)
    fn write_handle(&mut self, code: i32, handle: Handle) -> Result<()>;
}

/// Extension trait for composite writing operations
pub trait TagSinkExt: TagSink {
    /// Write a 2D point: component i of the vector goes to code base + 10*i
    fn write_point2d(&mut self, base: i32, point: Vector2) -> Result<()> {
        self.write_double(base, point.x)?;
        self.write_double(base + 10, point.y)?;
        Ok(())
    }

    /// Write a 3D point: component i of the vector goes to code base + 10*i
    fn write_point3d(&mut self, base: i32, point: Vector3) -> Result<()> {
        self.write_double(base, point.x)?;
        self.write_double(base + 10, point.y)?;
        self.write_double(base + 20, point.z)?;
        Ok(())
    }

    /// Write a subclass marker (code 100)
    fn write_subclass(&mut self, marker: &str) -> Result<()> {
        self.write_string(100, marker)
    }
}

impl<T: TagSink + ?Sized> TagSinkExt for T {}

/// Format a double the way the wire expects: trailing zeros trimmed, but
/// always at least one decimal place.
pub(crate) fn fmt_double(value: f64) -> String {
    if value == value.trunc() {
        format!("{:.1}", value)
    } else {
        let formatted = format!("{:.15}", value);
        let trimmed = formatted.trim_end_matches('0');
        if trimmed.ends_with('.') {
            format!("{}0", trimmed)
        } else {
            trimmed.to_string()
        }
    }
}

/// In-memory sink accumulating pairs
///
/// Both halves of the write path use it: the serialization protocol emits
/// into a buffer, and the buffer is flattened into text lines at the end.
#[derive(Debug, Default)]
pub struct TagBuffer {
    pairs: Vec<CodePair>,
}

impl TagBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated pairs, in emission order
    pub fn pairs(&self) -> &[CodePair] {
        &self.pairs
    }

    /// Consume the buffer, returning its pairs
    pub fn into_pairs(self) -> Vec<CodePair> {
        self.pairs
    }
}

impl TagSink for TagBuffer {
    fn write_string(&mut self, code: i32, value: &str) -> Result<()> {
        self.pairs.push(CodePair::new(code, value, 0));
        Ok(())
    }

    fn write_i16(&mut self, code: i32, value: i16) -> Result<()> {
        self.pairs.push(CodePair::new(code, value.to_string(), 0));
        Ok(())
    }

    fn write_i32(&mut self, code: i32, value: i32) -> Result<()> {
        self.pairs.push(CodePair::new(code, value.to_string(), 0));
        Ok(())
    }

    fn write_double(&mut self, code: i32, value: f64) -> Result<()> {
        self.pairs.push(CodePair::new(code, fmt_double(value), 0));
        Ok(())
    }

    fn write_handle(&mut self, code: i32, handle: Handle) -> Result<()> {
        self.pairs.push(CodePair::new(code, handle.to_string(), 0));
        Ok(())
    }
}

/// Flatten accumulated pairs into physical lines.
///
/// Codes are right-aligned in a 3-character field; values go out verbatim.
pub fn flatten_pairs<W: Write>(pairs: &[CodePair], writer: &mut W) -> Result<()> {
    for pair in pairs {
        if pair.code < 10 && pair.code >= 0 {
            writeln!(writer, "  {}", pair.code)?;
        } else if pair.code < 100 && pair.code > -10 {
            writeln!(writer, " {}", pair.code)?;
        } else {
            writeln!(writer, "{}", pair.code)?;
        }
        writeln!(writer, "{}", pair.value)?;
    }
    Ok(())
}

/// DXF drawing writer
///
/// Walks the drawing's section slots in registry order, frames each with
/// SECTION/ENDSEC, and terminates the stream with EOF.
pub struct DxfWriter<W: Write> {
    writer: W,
}

impl<W: Write> DxfWriter<W> {
    /// Create a new writer over any output stream
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write a drawing as an ASCII tag stream
    pub fn write(mut self, drawing: &Drawing) -> Result<()> {
        let mut buffer = TagBuffer::new();
        for kind in SectionKind::ALL {
            let section = drawing.section(kind);
            if section.is_empty() && !kind.is_required() {
                continue;
            }
            buffer.write_string(0, "SECTION")?;
            buffer.write_string(2, kind.name())?;
            section.write(&mut buffer)?;
            buffer.write_string(0, "ENDSEC")?;
        }
        buffer.write_string(0, "EOF")?;

        flatten_pairs(buffer.pairs(), &mut self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
