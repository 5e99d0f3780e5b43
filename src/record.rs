//! The record serialization protocol
//!
//! Every drawable or definitional unit (entities, table entries, blocks)
//! knows how to emit itself as an ordered tag sequence and how to rebuild
//! itself from one.

use crate::error::Result;
use crate::io::tag::CodePair;
use crate::io::writer::TagSink;

/// A typed record with a fixed tag layout
///
/// `emit` writes the leading code-0 type marker followed by the record's
/// tags in their fixed order.  `parse` is the inverse over the same layout;
/// it accepts the marker tag as well, so `parse(emit(v))` reconstructs `v`.
/// Group codes a record does not know are skipped for forward
/// compatibility; only a missing required code or an unconvertible value is
/// an error.
pub trait DxfRecord: Sized {
    /// The code-0 record-type marker
    fn record_type(&self) -> &'static str;

    /// Append this record's tags, marker first, to the sink
    fn emit(&self, sink: &mut dyn TagSink) -> Result<()>;

    /// Rebuild a record from its ordered tag list
    fn parse(tags: &[CodePair]) -> Result<Self>;
}
