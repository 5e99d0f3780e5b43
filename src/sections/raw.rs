//! Pass-through sections that keep their tags verbatim
//!
//! CLASSES, OBJECTS and THUMBNAILIMAGE carry content this crate does not
//! interpret; their tags are retained as read and re-emitted unchanged so
//! a document survives a read/write cycle intact.

use super::Section;
use crate::drawing::SectionKind;
use crate::error::Result;
use crate::io::tag::CodePair;
use crate::io::writer::TagSink;

/// A section holding uninterpreted tags
#[derive(Debug, Clone)]
pub struct RawSection {
    kind: SectionKind,
    tags: Vec<CodePair>,
}

impl RawSection {
    /// Create an empty raw section for a registry slot
    pub fn new(kind: SectionKind) -> Self {
        Self {
            kind,
            tags: Vec::new(),
        }
    }

    /// The retained tags
    pub fn tags(&self) -> &[CodePair] {
        &self.tags
    }

    /// Drop all retained tags
    pub fn clear(&mut self) {
        self.tags.clear();
    }
}

impl Section for RawSection {
    fn kind(&self) -> SectionKind {
        self.kind
    }

    fn parse(&mut self, _start_line: usize, tags: &[CodePair]) -> Result<()> {
        self.tags.extend_from_slice(tags);
        Ok(())
    }

    fn write(&self, sink: &mut dyn TagSink) -> Result<()> {
        for pair in &self.tags {
            sink.write_string(pair.code, &pair.value)?;
        }
        Ok(())
    }

    fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
