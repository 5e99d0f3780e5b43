//! Error types for dxfstream library

use std::io;
use thiserror::Error;

/// Main error type for dxfstream operations
///
/// Every variant produced while a source line number is known carries that
/// 1-based line number in its payload.
#[derive(Debug, Error)]
pub enum DxfError {
    /// IO error occurred during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Stream is structurally malformed (dangling code line, bad code token)
    #[error("line {line}: {message}")]
    Format { line: usize, message: String },

    /// Unexpected group code where the dispatcher required a specific one
    #[error("line {line}: invalid group code: {code}")]
    InvalidGroupCode { line: usize, code: i32 },

    /// Section name does not resolve against the fixed section registry
    #[error("line {line}: unknown section name: {name}")]
    UnknownSection { line: usize, name: String },

    /// Value could not be converted to the type its group code requires
    #[error("line {line}: malformed value for code {code}: expected {expected}, got '{value}'")]
    MalformedValue {
        line: usize,
        code: i32,
        value: String,
        expected: &'static str,
    },

    /// A record is missing a group code its layout requires
    #[error("{record}: missing required group code {code}")]
    MissingRequiredField { record: &'static str, code: i32 },

    /// Record-type marker does not match any registered kind
    #[error("line {line}: unknown record kind: {name}")]
    UnknownRecordKind { line: usize, name: String },

    /// Palette lookup with an index outside the table
    #[error("palette index {index} out of range (0..{len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result type alias for dxfstream operations
pub type Result<T> = std::result::Result<T, DxfError>;
