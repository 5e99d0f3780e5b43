//! BLOCKS section: named reusable entity groups

use super::entities::EntityAccumulator;
use super::{split_records, Section};
use crate::drawing::SectionKind;
use crate::entities::{record_body, Entity};
use crate::error::{DxfError, Result};
use crate::io::tag::CodePair;
use crate::io::writer::{TagSink, TagSinkExt};
use crate::types::Vector3;

/// A block definition: a named group of entities with a base point
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    /// Block name (group code 2)
    pub name: String,
    /// Layer the definition lives on
    pub layer: String,
    /// Block-type flags (group code 70)
    pub flags: i16,
    /// Base point for insertions
    pub base: Vector3,
    /// Entities making up the block
    pub entities: Vec<Entity>,
}

impl Block {
    /// Create a named block at the origin
    pub fn new(name: impl Into<String>) -> Self {
        Block {
            name: name.into(),
            layer: "0".to_string(),
            ..Default::default()
        }
    }

    /// Append an entity to the block body
    pub fn push(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    fn emit_header(&self, sink: &mut dyn TagSink) -> Result<()> {
        sink.write_string(0, "BLOCK")?;
        sink.write_subclass("AcDbEntity")?;
        sink.write_string(8, &self.layer)?;
        sink.write_subclass("AcDbBlockBegin")?;
        sink.write_string(2, &self.name)?;
        sink.write_i16(70, self.flags)?;
        sink.write_point3d(10, self.base)?;
        sink.write_string(3, &self.name)?;
        Ok(())
    }

    fn emit_trailer(&self, sink: &mut dyn TagSink) -> Result<()> {
        sink.write_string(0, "ENDBLK")?;
        sink.write_subclass("AcDbEntity")?;
        sink.write_string(8, &self.layer)?;
        sink.write_subclass("AcDbBlockEnd")?;
        Ok(())
    }

    /// Parse the BLOCK header record.  Entities between the header and
    /// ENDBLK are attached by the section parser.
    fn parse_header(tags: &[CodePair]) -> Result<Self> {
        let mut block = Block::default();
        let mut saw_name = false;
        for pair in record_body(tags) {
            match pair.code {
                2 => {
                    block.name = pair.value.clone();
                    saw_name = true;
                }
                3 => {}
                8 => block.layer = pair.value.clone(),
                70 => block.flags = pair.as_i16()?,
                10 => block.base.x = pair.as_double()?,
                20 => block.base.y = pair.as_double()?,
                30 => block.base.z = pair.as_double()?,
                _ => {}
            }
        }
        if !saw_name {
            return Err(DxfError::MissingRequiredField {
                record: "BLOCK",
                code: 2,
            });
        }
        Ok(block)
    }
}

/// The BLOCKS section
#[derive(Debug, Default)]
pub struct BlocksSection {
    /// Block definitions in insertion order
    pub blocks: Vec<Block>,
}

impl BlocksSection {
    /// Create an empty section
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a block by name, case-insensitively
    pub fn get(&self, name: &str) -> Option<&Block> {
        self.blocks
            .iter()
            .find(|block| block.name.eq_ignore_ascii_case(name))
    }

    /// Add a block definition
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }
}

impl Section for BlocksSection {
    fn kind(&self) -> SectionKind {
        SectionKind::Blocks
    }

    fn parse(&mut self, _start_line: usize, tags: &[CodePair]) -> Result<()> {
        let mut open: Option<(Block, EntityAccumulator)> = None;
        for record in split_records(tags) {
            let marker = &record[0];
            let name = marker.value.to_ascii_uppercase();
            match name.as_str() {
                "BLOCK" => {
                    if let Some((mut block, accumulator)) = open.take() {
                        block.entities = accumulator.finish();
                        self.blocks.push(block);
                    }
                    open = Some((Block::parse_header(record)?, EntityAccumulator::new()));
                }
                "ENDBLK" => {
                    if let Some((mut block, accumulator)) = open.take() {
                        block.entities = accumulator.finish();
                        self.blocks.push(block);
                    }
                }
                _ => match &mut open {
                    Some((_, accumulator)) => accumulator.push_record(record)?,
                    // records before the first BLOCK header have no home
                    None => {}
                },
            }
        }
        if let Some((mut block, accumulator)) = open.take() {
            block.entities = accumulator.finish();
            self.blocks.push(block);
        }
        Ok(())
    }

    fn write(&self, sink: &mut dyn TagSink) -> Result<()> {
        for block in &self.blocks {
            block.emit_header(sink)?;
            for entity in &block.entities {
                entity.emit(sink)?;
            }
            block.emit_trailer(sink)?;
        }
        Ok(())
    }

    fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
