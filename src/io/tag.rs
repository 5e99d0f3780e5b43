//! Tag stream reading: raw lines to code/value pairs

use crate::error::{DxfError, Result};
use crate::types::Handle;
use encoding_rs::Encoding;
use std::io::{BufReader, Read};

/// One (group code, value) pair, the atomic unit of the wire format
///
/// `line` is the 1-based number of the value line in the source stream, or
/// 0 for pairs produced by serialization rather than read from input.
#[derive(Debug, Clone, PartialEq)]
pub struct CodePair {
    /// The group code
    pub code: i32,
    /// The raw value, exactly as it appeared on the value line
    pub value: String,
    /// 1-based source line number of the value line (0 when synthesized)
    pub line: usize,
}

impl CodePair {
    /// Create a new code/value pair
    pub fn new(code: i32, value: impl Into<String>, line: usize) -> Self {
        Self {
            code,
            value: value.into(),
            line,
        }
    }

    /// Does this pair's code-0 value match a structural keyword?
    ///
    /// Structural matching is case-insensitive; all other values are
    /// compared exactly.
    pub fn is_marker(&self, keyword: &str) -> bool {
        self.code == 0 && self.value.eq_ignore_ascii_case(keyword)
    }

    fn malformed(&self, expected: &'static str) -> DxfError {
        DxfError::MalformedValue {
            line: self.line,
            code: self.code,
            value: self.value.clone(),
            expected,
        }
    }

    /// Value as an i16
    pub fn as_i16(&self) -> Result<i16> {
        self.value
            .trim()
            .parse::<i16>()
            .map_err(|_| self.malformed("integer"))
    }

    /// Value as an i32
    pub fn as_i32(&self) -> Result<i32> {
        self.value
            .trim()
            .parse::<i32>()
            .map_err(|_| self.malformed("integer"))
    }

    /// Value as a double
    pub fn as_double(&self) -> Result<f64> {
        self.value
            .trim()
            .parse::<f64>()
            .map_err(|_| self.malformed("float"))
    }

    /// Value as a handle (hexadecimal)
    pub fn as_handle(&self) -> Result<Handle> {
        Handle::from_hex(&self.value).ok_or_else(|| self.malformed("hex handle"))
    }
}

/// Reads raw text lines as a sequence of code/value pairs.
///
/// Odd (1-indexed) lines hold the group code, trimmed and parsed as an
/// integer; the following even line holds the value, untouched except for
/// the line terminator.  An input with an odd number of physical lines
/// always fails: the dangling code line has no value line.
pub struct TagReader<R: Read> {
    reader: BufReader<R>,
    line_number: usize,
    /// Non-UTF8 fallback encoding.  `None` means Latin-1 (byte-to-char).
    encoding: Option<&'static Encoding>,
}

impl<R: Read> TagReader<R> {
    /// Create a new tag reader over a raw byte stream
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
            encoding: None,
        }
    }

    /// Set the fallback encoding for non-UTF8 value bytes
    pub fn set_encoding(&mut self, encoding: &'static Encoding) {
        self.encoding = Some(encoding);
    }

    /// Read a single line, handling non-UTF8 bytes gracefully.
    ///
    /// Strips the terminating `\n` and a trailing `\r`; nothing else.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();
        loop {
            let mut byte = [0u8; 1];
            match self.reader.read(&mut byte) {
                Ok(0) => {
                    if bytes.is_empty() {
                        return Ok(None);
                    }
                    break;
                }
                Ok(_) => {
                    if byte[0] == b'\n' {
                        break;
                    }
                    bytes.push(byte[0]);
                }
                Err(e) => return Err(e.into()),
            }
        }
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }

        self.line_number += 1;

        let line = match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => {
                let bytes = e.into_bytes();
                if let Some(enc) = self.encoding {
                    let (decoded, _, _) = enc.decode(&bytes);
                    decoded.into_owned()
                } else {
                    // Latin-1 maps bytes 0-255 directly to code points
                    bytes.iter().map(|&b| b as char).collect()
                }
            }
        };
        Ok(Some(line))
    }

    /// Read the next code/value pair, or `None` at end of input
    pub fn read_pair(&mut self) -> Result<Option<CodePair>> {
        let code_line = match self.read_line()? {
            Some(line) => line,
            None => return Ok(None),
        };
        let code_line_number = self.line_number;

        let code = code_line.trim().parse::<i32>().map_err(|_| DxfError::Format {
            line: code_line_number,
            message: format!("invalid group code token: '{}'", code_line.trim()),
        })?;

        let value = match self.read_line()? {
            Some(line) => line,
            None => {
                return Err(DxfError::Format {
                    line: code_line_number,
                    message: format!("missing value line after group code {}", code),
                })
            }
        };

        Ok(Some(CodePair::new(code, value, self.line_number)))
    }
}
