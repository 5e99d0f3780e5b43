//! ENTITIES section: the drawing's top-level entity records

use super::{split_records, Section};
use crate::drawing::SectionKind;
use crate::entities::{Entity, Polyline, Vertex};
use crate::error::Result;
use crate::io::tag::CodePair;
use crate::io::writer::TagSink;
use crate::record::DxfRecord;

/// Accumulates a record stream into entities, attaching VERTEX records to
/// the open POLYLINE until its SEQEND.  Shared with the BLOCKS section,
/// whose block bodies hold the same record stream.
#[derive(Debug, Default)]
pub(crate) struct EntityAccumulator {
    entities: Vec<Entity>,
    pending_polyline: Option<Polyline>,
}

impl EntityAccumulator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_record(&mut self, record: &[CodePair]) -> Result<()> {
        let marker = &record[0];
        let name = marker.value.to_ascii_uppercase();
        match name.as_str() {
            "POLYLINE" => {
                self.flush_polyline();
                self.pending_polyline = Some(Polyline::parse(record)?);
            }
            "VERTEX" => {
                let vertex = Vertex::parse(record)?;
                match &mut self.pending_polyline {
                    Some(polyline) => polyline.vertices.push(vertex),
                    // a vertex outside any polyline stands alone
                    None => self.entities.push(Entity::Vertex(vertex)),
                }
            }
            "SEQEND" => self.flush_polyline(),
            _ => {
                self.entities
                    .push(Entity::parse_record(&name, record, marker.line)?);
            }
        }
        Ok(())
    }

    fn flush_polyline(&mut self) {
        if let Some(polyline) = self.pending_polyline.take() {
            self.entities.push(Entity::Polyline(polyline));
        }
    }

    pub(crate) fn finish(mut self) -> Vec<Entity> {
        self.flush_polyline();
        self.entities
    }
}

/// The ENTITIES section
#[derive(Debug, Default)]
pub struct EntitiesSection {
    /// Entities in insertion order
    pub entities: Vec<Entity>,
}

impl EntitiesSection {
    /// Create an empty section
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entity
    pub fn push(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Number of entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }
}

impl Section for EntitiesSection {
    fn kind(&self) -> SectionKind {
        SectionKind::Entities
    }

    fn parse(&mut self, _start_line: usize, tags: &[CodePair]) -> Result<()> {
        let mut accumulator = EntityAccumulator::new();
        for record in split_records(tags) {
            accumulator.push_record(record)?;
        }
        self.entities.extend(accumulator.finish());
        Ok(())
    }

    fn write(&self, sink: &mut dyn TagSink) -> Result<()> {
        for entity in &self.entities {
            entity.emit(sink)?;
        }
        Ok(())
    }

    fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Line;
    use crate::io::writer::TagBuffer;
    use crate::types::Vector3;

    fn tags(items: &[(i32, &str)]) -> Vec<CodePair> {
        items.iter()
            .enumerate()
            .map(|(i, (code, value))| CodePair::new(*code, *value, 2 * i + 1))
            .collect()
    }

    #[test]
    fn test_parse_single_line_entity() {
        let tags = tags(&[
            (0, "LINE"),
            (8, "0"),
            (10, "0.0"),
            (20, "0.0"),
            (30, "0.0"),
            (11, "2.0"),
            (21, "0.0"),
            (31, "0.0"),
        ]);
        let mut section = EntitiesSection::new();
        section.parse(1, &tags).unwrap();
        assert_eq!(section.len(), 1);
        match &section.entities[0] {
            Entity::Line(line) => assert_eq!(line.end.x, 2.0),
            other => panic!("expected a line, got {:?}", other),
        }
    }

    #[test]
    fn test_polyline_collects_vertices() {
        let tags = tags(&[
            (0, "POLYLINE"),
            (70, "8"),
            (0, "VERTEX"),
            (10, "0.0"),
            (20, "0.0"),
            (30, "0.0"),
            (0, "VERTEX"),
            (10, "1.0"),
            (20, "1.0"),
            (30, "0.0"),
            (0, "SEQEND"),
        ]);
        let mut section = EntitiesSection::new();
        section.parse(1, &tags).unwrap();
        assert_eq!(section.len(), 1);
        match &section.entities[0] {
            Entity::Polyline(polyline) => {
                assert_eq!(polyline.vertices.len(), 2);
                assert_eq!(polyline.vertices[1].coord, Vector3::new(1.0, 1.0, 0.0));
            }
            other => panic!("expected a polyline, got {:?}", other),
        }
    }

    #[test]
    fn test_polyline_round_trip_through_section() {
        let mut original = Polyline::new();
        original.add_vertex(0.0, 0.0, 0.0);
        original.add_vertex(3.0, 4.0, 5.0);
        original.set_closed(true);

        let mut section = EntitiesSection::new();
        section.push(Entity::Polyline(original.clone()));

        let mut buf = TagBuffer::new();
        section.write(&mut buf).unwrap();

        let mut reparsed = EntitiesSection::new();
        reparsed.parse(1, buf.pairs()).unwrap();
        assert_eq!(reparsed.entities, vec![Entity::Polyline(original)]);
    }

    #[test]
    fn test_unknown_entity_kind_fails() {
        let tags = tags(&[(0, "WIDGET"), (10, "0.0")]);
        let mut section = EntitiesSection::new();
        let err = section.parse(1, &tags).unwrap_err();
        assert!(matches!(
            err,
            crate::error::DxfError::UnknownRecordKind { line: 1, .. }
        ));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut section = EntitiesSection::new();
        section.push(Entity::Line(Line::from_points(
            Vector3::ZERO,
            Vector3::new(1.0, 0.0, 0.0),
        )));
        section.push(Entity::Line(Line::from_points(
            Vector3::ZERO,
            Vector3::new(2.0, 0.0, 0.0),
        )));

        let mut buf = TagBuffer::new();
        section.write(&mut buf).unwrap();
        let mut reparsed = EntitiesSection::new();
        reparsed.parse(1, buf.pairs()).unwrap();
        assert_eq!(reparsed.entities, section.entities);
    }
}
