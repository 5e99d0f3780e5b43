//! Section containers and their buffered-tag parsers
//!
//! The dispatcher hands each section its buffered tags together with the
//! source line the buffer started on; the section parses them into typed
//! records and can emit them back.

use crate::drawing::SectionKind;
use crate::error::Result;
use crate::io::tag::CodePair;
use crate::io::writer::TagSink;

pub mod blocks;
pub mod entities;
pub mod header;
pub mod raw;
pub mod tables;

pub use blocks::{Block, BlocksSection};
pub use entities::EntitiesSection;
pub use header::HeaderSection;
pub use raw::RawSection;
pub use tables::TablesSection;

/// A named top-level container of records
pub trait Section {
    /// Which registry slot this section fills
    fn kind(&self) -> SectionKind;

    /// Parse the buffered tags of one SECTION..ENDSEC run.
    ///
    /// `start_line` is the 1-based source line the buffer began on, for
    /// error attribution when individual tags carry no line of their own.
    fn parse(&mut self, start_line: usize, tags: &[CodePair]) -> Result<()>;

    /// Emit this section's body (without the SECTION/ENDSEC framing)
    fn write(&self, sink: &mut dyn TagSink) -> Result<()>;

    /// Whether the section holds no content
    fn is_empty(&self) -> bool;
}

/// Split buffered section tags into records at code-0 markers.
///
/// Each returned slice starts with its marker tag.  Tags before the first
/// marker belong to no record and are dropped.
pub(crate) fn split_records(tags: &[CodePair]) -> Vec<&[CodePair]> {
    let mut records = Vec::new();
    let mut start = None;
    for (i, pair) in tags.iter().enumerate() {
        if pair.code == 0 {
            if let Some(s) = start {
                records.push(&tags[s..i]);
            }
            start = Some(i);
        }
    }
    if let Some(s) = start {
        records.push(&tags[s..]);
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_records() {
        let tags = vec![
            CodePair::new(9, "stray", 1),
            CodePair::new(0, "LINE", 2),
            CodePair::new(10, "1.0", 3),
            CodePair::new(0, "POINT", 4),
        ];
        let records = split_records(&tags);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0][0].value, "LINE");
        assert_eq!(records[0].len(), 2);
        assert_eq!(records[1][0].value, "POINT");
    }

    #[test]
    fn test_split_records_empty() {
        assert!(split_records(&[]).is_empty());
        // only stray tags, no marker
        let tags = vec![CodePair::new(9, "$ACADVER", 1)];
        assert!(split_records(&tags).is_empty());
    }
}
