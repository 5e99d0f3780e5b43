//! Reading and writing the ASCII tag stream

pub mod reader;
pub mod tag;
pub mod writer;

pub use reader::{from_str, DxfReader};
pub use tag::{CodePair, TagReader};
pub use writer::{DxfWriter, TagBuffer, TagSink, TagSinkExt};
