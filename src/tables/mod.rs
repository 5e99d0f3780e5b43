//! Definition tables and their entries

use crate::error::Result;
use crate::io::writer::TagSink;
use crate::record::DxfRecord;
use indexmap::IndexMap;

pub mod layer;
pub mod linetype;
pub mod textstyle;
pub mod vport;

pub use layer::Layer;
pub use linetype::LineType;
pub use textstyle::TextStyle;
pub use vport::Vport;

/// A record stored in a named definition table
pub trait TableEntry: DxfRecord {
    /// The table's name on the wire (TABLE group code 2, and the entry's
    /// own code-0 marker)
    const TABLE_NAME: &'static str;

    /// The entry's name (group code 2)
    fn name(&self) -> &str;
}

/// Ordered named storage for one kind of table entry
///
/// Lookup is case-insensitive; insertion order is preserved on output.
#[derive(Debug, Clone)]
pub struct Table<T: TableEntry> {
    entries: IndexMap<String, T>,
}

impl<T: TableEntry> Default for Table<T> {
    fn default() -> Self {
        Table::new()
    }
}

impl<T: TableEntry> Table<T> {
    /// Create a new empty table
    pub fn new() -> Self {
        Table {
            entries: IndexMap::new(),
        }
    }

    /// Add or replace an entry, keyed by its name
    pub fn add(&mut self, entry: T) {
        self.entries
            .insert(entry.name().to_ascii_uppercase(), entry);
    }

    /// Look up an entry by name
    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(&name.to_ascii_uppercase())
    }

    /// Whether an entry with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_ascii_uppercase())
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Emit the whole table with its TABLE/ENDTAB framing
    pub fn write(&self, sink: &mut dyn TagSink) -> Result<()> {
        sink.write_string(0, "TABLE")?;
        sink.write_string(2, T::TABLE_NAME)?;
        sink.write_i16(70, self.entries.len() as i16)?;
        for entry in self.entries.values() {
            entry.emit(sink)?;
        }
        sink.write_string(0, "ENDTAB")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_case_insensitive_lookup() {
        let mut table: Table<Layer> = Table::new();
        table.add(Layer::new("Walls"));
        assert!(table.contains("WALLS"));
        assert!(table.contains("walls"));
        assert_eq!(table.get("wAlLs").unwrap().name(), "Walls");
    }

    #[test]
    fn test_table_preserves_insertion_order() {
        let mut table: Table<Layer> = Table::new();
        table.add(Layer::new("b"));
        table.add(Layer::new("a"));
        table.add(Layer::new("c"));
        let names: Vec<&str> = table.iter().map(|l| l.name()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_add_replaces_same_name() {
        let mut table: Table<Layer> = Table::new();
        table.add(Layer::new("0"));
        table.add(Layer::new("0"));
        assert_eq!(table.len(), 1);
    }
}
