//! TABLES section: the drawing's definition tables

use super::{split_records, Section};
use crate::drawing::SectionKind;
use crate::error::{DxfError, Result};
use crate::io::tag::CodePair;
use crate::io::writer::TagSink;
use crate::record::DxfRecord;
use crate::tables::{Layer, LineType, Table, TextStyle, Vport};

/// The TABLES section
///
/// The four tables this library models are parsed into typed entries.
/// Tables of any other kind are carried through verbatim so that a
/// read/write cycle does not drop them.
#[derive(Debug, Default)]
pub struct TablesSection {
    /// LTYPE table
    pub line_types: Table<LineType>,
    /// LAYER table
    pub layers: Table<Layer>,
    /// STYLE table
    pub styles: Table<TextStyle>,
    /// VPORT table
    pub vports: Table<Vport>,
    /// Unmodeled tables, each group a full TABLE..ENDTAB tag run
    raw_groups: Vec<Vec<CodePair>>,
}

enum ActiveTable {
    LineTypes,
    Layers,
    Styles,
    Vports,
    Raw(Vec<CodePair>),
}

impl TablesSection {
    /// Create an empty section
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock tables every new drawing gets: CONTINUOUS, layer 0,
    /// the STANDARD text style, and the *ACTIVE viewport.
    pub fn standard() -> Self {
        let mut section = Self::new();
        section.line_types.add(LineType::continuous());
        section.layers.add(Layer::layer_0());
        section.styles.add(TextStyle::standard());
        section.vports.add(Vport::active());
        section
    }

    fn parse_entry(&mut self, active: &mut ActiveTable, record: &[CodePair]) -> Result<()> {
        match active {
            ActiveTable::LineTypes => self.line_types.add(LineType::parse(record)?),
            ActiveTable::Layers => self.layers.add(Layer::parse(record)?),
            ActiveTable::Styles => self.styles.add(TextStyle::parse(record)?),
            ActiveTable::Vports => self.vports.add(Vport::parse(record)?),
            ActiveTable::Raw(group) => group.extend(record.iter().cloned()),
        }
        Ok(())
    }
}

impl Section for TablesSection {
    fn kind(&self) -> SectionKind {
        SectionKind::Tables
    }

    fn parse(&mut self, _start_line: usize, tags: &[CodePair]) -> Result<()> {
        let mut active: Option<ActiveTable> = None;
        for record in split_records(tags) {
            let marker = &record[0];
            let name = marker.value.to_ascii_uppercase();
            match name.as_str() {
                "TABLE" => {
                    let table_name = record
                        .iter()
                        .skip(1)
                        .find(|pair| pair.code == 2)
                        .map(|pair| pair.value.to_ascii_uppercase())
                        .ok_or(DxfError::MissingRequiredField {
                            record: "TABLE",
                            code: 2,
                        })?;
                    active = Some(match table_name.as_str() {
                        "LTYPE" => ActiveTable::LineTypes,
                        "LAYER" => ActiveTable::Layers,
                        "STYLE" => ActiveTable::Styles,
                        "VPORT" => ActiveTable::Vports,
                        _ => ActiveTable::Raw(record.to_vec()),
                    });
                }
                "ENDTAB" => {
                    if let Some(ActiveTable::Raw(mut group)) = active.take() {
                        group.extend(record.iter().cloned());
                        self.raw_groups.push(group);
                    }
                }
                _ => match &mut active {
                    Some(table) => self.parse_entry(table, record)?,
                    None => {
                        return Err(DxfError::UnknownRecordKind {
                            line: marker.line,
                            name: marker.value.clone(),
                        })
                    }
                },
            }
        }
        Ok(())
    }

    fn write(&self, sink: &mut dyn TagSink) -> Result<()> {
        if !self.vports.is_empty() {
            self.vports.write(sink)?;
        }
        if !self.line_types.is_empty() {
            self.line_types.write(sink)?;
        }
        if !self.layers.is_empty() {
            self.layers.write(sink)?;
        }
        if !self.styles.is_empty() {
            self.styles.write(sink)?;
        }
        for group in &self.raw_groups {
            for pair in group {
                sink.write_string(pair.code, &pair.value)?;
            }
        }
        Ok(())
    }

    fn is_empty(&self) -> bool {
        self.line_types.is_empty()
            && self.layers.is_empty()
            && self.styles.is_empty()
            && self.vports.is_empty()
            && self.raw_groups.is_empty()
    }
}
