//! The in-memory drawing and its section registry

use crate::entities::Entity;
use crate::error::{DxfError, Result};
use crate::io::writer::DxfWriter;
use crate::sections::{
    BlocksSection, EntitiesSection, HeaderSection, RawSection, Section, TablesSection,
};
use crate::types::Color;

/// The section registry
///
/// Every section a drawing may carry, in the order they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Header,
    Classes,
    Tables,
    Blocks,
    Entities,
    Objects,
    ThumbnailImage,
}

impl SectionKind {
    /// All kinds, in output order
    pub const ALL: [SectionKind; 7] = [
        SectionKind::Header,
        SectionKind::Classes,
        SectionKind::Tables,
        SectionKind::Blocks,
        SectionKind::Entities,
        SectionKind::Objects,
        SectionKind::ThumbnailImage,
    ];

    /// The section's name on the wire
    pub fn name(self) -> &'static str {
        match self {
            SectionKind::Header => "HEADER",
            SectionKind::Classes => "CLASSES",
            SectionKind::Tables => "TABLES",
            SectionKind::Blocks => "BLOCKS",
            SectionKind::Entities => "ENTITIES",
            SectionKind::Objects => "OBJECTS",
            SectionKind::ThumbnailImage => "THUMBNAILIMAGE",
        }
    }

    /// Resolve a section name, case-insensitively
    pub fn from_name(name: &str) -> Option<SectionKind> {
        SectionKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    /// Whether the section is written even when empty
    pub fn is_required(self) -> bool {
        !matches!(self, SectionKind::ThumbnailImage)
    }
}

/// Fallback entity attributes applied when an entity is added with its
/// common fields unset
#[derive(Debug, Clone, PartialEq)]
pub struct Defaults {
    /// Color for entities added with ByLayer color
    pub color: Color,
    /// Line type name for entities added with an empty line type
    pub line_type: String,
    /// Layer name for entities added with an empty layer
    pub layer: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            color: Color::Index(7),
            line_type: "CONTINUOUS".to_string(),
            layer: "0".to_string(),
        }
    }
}

/// A complete drawing: one slot per section
#[derive(Debug)]
pub struct Drawing {
    /// HEADER section
    pub header: HeaderSection,
    /// CLASSES section, carried verbatim
    pub classes: RawSection,
    /// TABLES section
    pub tables: TablesSection,
    /// BLOCKS section
    pub blocks: BlocksSection,
    /// ENTITIES section
    pub entities: EntitiesSection,
    /// OBJECTS section, carried verbatim
    pub objects: RawSection,
    /// THUMBNAILIMAGE section, carried verbatim
    pub thumbnail: RawSection,
    /// Attributes stamped onto entities added through [`Drawing::add_entity`]
    pub defaults: Defaults,
}

impl Default for Drawing {
    fn default() -> Self {
        Drawing::new()
    }
}

impl Drawing {
    /// Create an empty drawing with no header variables or table entries
    pub fn new() -> Self {
        Drawing {
            header: HeaderSection::new(),
            classes: RawSection::new(SectionKind::Classes),
            tables: TablesSection::new(),
            blocks: BlocksSection::new(),
            entities: EntitiesSection::new(),
            objects: RawSection::new(SectionKind::Objects),
            thumbnail: RawSection::new(SectionKind::ThumbnailImage),
            defaults: Defaults::default(),
        }
    }

    /// Create a drawing seeded with the standard header variables and
    /// table entries
    pub fn with_defaults() -> Self {
        Drawing {
            header: HeaderSection::standard(),
            tables: TablesSection::standard(),
            ..Drawing::new()
        }
    }

    /// Borrow the section slot for a kind
    pub fn section(&self, kind: SectionKind) -> &dyn Section {
        match kind {
            SectionKind::Header => &self.header,
            SectionKind::Classes => &self.classes,
            SectionKind::Tables => &self.tables,
            SectionKind::Blocks => &self.blocks,
            SectionKind::Entities => &self.entities,
            SectionKind::Objects => &self.objects,
            SectionKind::ThumbnailImage => &self.thumbnail,
        }
    }

    /// Mutably borrow the section slot for a kind
    pub fn section_mut(&mut self, kind: SectionKind) -> &mut dyn Section {
        match kind {
            SectionKind::Header => &mut self.header,
            SectionKind::Classes => &mut self.classes,
            SectionKind::Tables => &mut self.tables,
            SectionKind::Blocks => &mut self.blocks,
            SectionKind::Entities => &mut self.entities,
            SectionKind::Objects => &mut self.objects,
            SectionKind::ThumbnailImage => &mut self.thumbnail,
        }
    }

    /// Add an entity to the ENTITIES section, stamping unset common
    /// fields from the drawing's defaults
    pub fn add_entity(&mut self, mut entity: Entity) {
        let common = entity.common_mut();
        if common.layer.is_empty() {
            common.layer = self.defaults.layer.clone();
        }
        if common.line_type.is_empty() {
            common.line_type = self.defaults.line_type.clone();
        }
        if common.color == Color::ByLayer {
            common.color = self.defaults.color;
        }
        self.entities.push(entity);
    }

    /// Render the drawing as an ASCII tag stream
    pub fn to_dxf_string(&self) -> Result<String> {
        let mut out = Vec::new();
        DxfWriter::new(&mut out).write(self)?;
        String::from_utf8(out).map_err(|e| DxfError::Format {
            line: 0,
            message: format!("non-utf8 output: {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Line;
    use crate::types::Vector3;

    #[test]
    fn test_section_name_lookup_is_case_insensitive() {
        assert_eq!(SectionKind::from_name("header"), Some(SectionKind::Header));
        assert_eq!(
            SectionKind::from_name("Entities"),
            Some(SectionKind::Entities)
        );
        assert_eq!(SectionKind::from_name("FOOBAR"), None);
    }

    #[test]
    fn test_registry_order() {
        let names: Vec<&str> = SectionKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(
            names,
            vec![
                "HEADER",
                "CLASSES",
                "TABLES",
                "BLOCKS",
                "ENTITIES",
                "OBJECTS",
                "THUMBNAILIMAGE"
            ]
        );
    }

    #[test]
    fn test_add_entity_stamps_defaults() {
        let mut drawing = Drawing::with_defaults();
        drawing.add_entity(Entity::Line(Line::from_points(
            Vector3::ZERO,
            Vector3::new(1.0, 0.0, 0.0),
        )));
        let common = drawing.entities.entities[0].common();
        assert_eq!(common.layer, "0");
        assert_eq!(common.line_type, "CONTINUOUS");
        assert_eq!(common.color, Color::Index(7));
    }

    #[test]
    fn test_add_entity_keeps_explicit_fields() {
        let mut drawing = Drawing::with_defaults();
        let mut line = Line::from_points(Vector3::ZERO, Vector3::new(1.0, 0.0, 0.0));
        line.common.layer = "Walls".to_string();
        line.common.color = Color::Index(1);
        drawing.add_entity(Entity::Line(line));
        let common = drawing.entities.entities[0].common();
        assert_eq!(common.layer, "Walls");
        assert_eq!(common.color, Color::Index(1));
    }

    #[test]
    fn test_empty_thumbnail_not_written() {
        let drawing = Drawing::with_defaults();
        let text = drawing.to_dxf_string().unwrap();
        assert!(!text.contains("THUMBNAILIMAGE"));
        assert!(text.contains("ENTITIES"));
        assert!(text.ends_with("  0\nEOF\n"));
    }
}
