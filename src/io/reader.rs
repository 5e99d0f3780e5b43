//! Drawing reader: tag stream to sections

use crate::drawing::{Drawing, SectionKind};
use crate::error::{DxfError, Result};
use crate::io::tag::{CodePair, TagReader};
use encoding_rs::Encoding;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Dispatcher state
///
/// Structural keywords are only structural in the state that expects them.
/// A 0/SECTION or 0/EOF pair seen while a section is open is content and
/// goes into the pending buffer like any other tag.
#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    /// Between sections, watching for SECTION or EOF
    Idle,
    /// Saw 0/SECTION, expecting the 2/name pair
    AwaitingSectionName,
    /// Inside a section, buffering content until ENDSEC
    InSection,
    /// Saw 0/EOF, nothing more is read
    Done,
}

/// DXF drawing reader
///
/// Drives a [`TagReader`] through the section structure and hands each
/// section's buffered tags to its slot in the drawing.
pub struct DxfReader<R: Read> {
    tags: TagReader<R>,
}

impl DxfReader<File> {
    /// Open a file for reading
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(File::open(path)?))
    }
}

impl<R: Read> DxfReader<R> {
    /// Create a reader over any input stream
    pub fn new(reader: R) -> Self {
        Self {
            tags: TagReader::new(reader),
        }
    }

    /// Set the fallback encoding for non-UTF8 value bytes
    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.tags.set_encoding(encoding);
        self
    }

    /// Read the whole stream into a drawing
    pub fn read(mut self) -> Result<Drawing> {
        let mut drawing = Drawing::new();
        let mut state = State::Idle;
        let mut buffer: Vec<CodePair> = Vec::new();
        let mut start_line = 1;
        // current section while InSection, most recent one otherwise
        let mut active: Option<SectionKind> = None;

        while state != State::Done {
            let pair = match self.tags.read_pair()? {
                Some(pair) => pair,
                None => break,
            };

            state = match state {
                State::Idle => {
                    if pair.is_marker("SECTION") {
                        State::AwaitingSectionName
                    } else if pair.is_marker("EOF") {
                        buffer.clear();
                        State::Done
                    } else {
                        // stray content between sections is tolerated
                        buffer.push(pair);
                        State::Idle
                    }
                }
                State::AwaitingSectionName => {
                    if pair.code != 2 {
                        return Err(DxfError::InvalidGroupCode {
                            line: pair.line,
                            code: pair.code,
                        });
                    }
                    let kind = SectionKind::from_name(&pair.value).ok_or_else(|| {
                        DxfError::UnknownSection {
                            line: pair.line,
                            name: pair.value.clone(),
                        }
                    })?;
                    active = Some(kind);
                    start_line = pair.line + 1;
                    State::InSection
                }
                State::InSection => {
                    if pair.is_marker("ENDSEC") {
                        if let Some(kind) = active {
                            drawing.section_mut(kind).parse(start_line, &buffer)?;
                        }
                        buffer.clear();
                        start_line = pair.line + 1;
                        State::Idle
                    } else {
                        buffer.push(pair);
                        State::InSection
                    }
                }
                State::Done => State::Done,
            };
        }

        // Truncated input: whatever the last active section collected is
        // kept; content that never had a section is dropped.
        if !buffer.is_empty() {
            if let Some(kind) = active {
                drawing.section_mut(kind).parse(start_line, &buffer)?;
            }
        }

        Ok(drawing)
    }
}

/// Parse a drawing from an in-memory string
pub fn from_str(text: &str) -> Result<Drawing> {
    DxfReader::new(text.as_bytes()).read()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Entity;
    use crate::sections::Section;

    fn stream(items: &[(i32, &str)]) -> String {
        items
            .iter()
            .map(|(code, value)| format!("{}\n{}\n", code, value))
            .collect()
    }

    #[test]
    fn test_empty_drawing() {
        let drawing = from_str("0\nEOF\n").unwrap();
        assert!(drawing.entities.entities.is_empty());
    }

    #[test]
    fn test_single_entity_dispatch() {
        let text = stream(&[
            (0, "SECTION"),
            (2, "ENTITIES"),
            (0, "VERTEX"),
            (10, "1.0"),
            (20, "2.0"),
            (30, "3.0"),
            (0, "ENDSEC"),
            (0, "EOF"),
        ]);
        let drawing = from_str(&text).unwrap();
        assert_eq!(drawing.entities.entities.len(), 1);
        match &drawing.entities.entities[0] {
            Entity::Vertex(vertex) => assert_eq!(vertex.coord.x, 1.0),
            other => panic!("expected a vertex, got {:?}", other),
        }
    }

    #[test]
    fn test_section_name_case_insensitive() {
        let text = stream(&[
            (0, "section"),
            (2, "entities"),
            (0, "endsec"),
            (0, "eof"),
        ]);
        let drawing = from_str(&text).unwrap();
        assert!(drawing.entities.entities.is_empty());
    }

    #[test]
    fn test_unknown_section_fails_with_line() {
        let text = stream(&[(0, "SECTION"), (2, "FOOBAR"), (0, "ENDSEC"), (0, "EOF")]);
        let err = from_str(&text).unwrap_err();
        match err {
            DxfError::UnknownSection { line, name } => {
                assert_eq!(line, 4);
                assert_eq!(name, "FOOBAR");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_stray_tags_before_any_section_dropped() {
        let text = stream(&[(8, "0"), (0, "ENDSEC"), (0, "EOF")]);
        let drawing = from_str(&text).unwrap();
        for kind in SectionKind::ALL {
            assert!(drawing.section(kind).is_empty());
        }
    }

    #[test]
    fn test_nested_section_marker_is_content() {
        // a 0/SECTION pair inside an open section is not structural
        let text = stream(&[
            (0, "SECTION"),
            (2, "OBJECTS"),
            (0, "SECTION"),
            (0, "ENDSEC"),
            (0, "EOF"),
        ]);
        let drawing = from_str(&text).unwrap();
        assert!(!drawing.objects.is_empty());
    }

    #[test]
    fn test_truncated_section_keeps_content() {
        let text = stream(&[
            (0, "SECTION"),
            (2, "ENTITIES"),
            (0, "POINT"),
            (10, "1.0"),
            (20, "2.0"),
            (30, "0.0"),
        ]);
        let drawing = from_str(&text).unwrap();
        assert_eq!(drawing.entities.entities.len(), 1);
    }

    #[test]
    fn test_trailing_strays_flush_to_last_section() {
        // no EOF tag: content after ENDSEC goes to the section that closed
        let text = stream(&[
            (0, "SECTION"),
            (2, "ENTITIES"),
            (0, "ENDSEC"),
            (0, "POINT"),
            (10, "4.0"),
            (20, "0.0"),
            (30, "0.0"),
        ]);
        let drawing = from_str(&text).unwrap();
        assert_eq!(drawing.entities.entities.len(), 1);
    }

    #[test]
    fn test_strays_with_no_section_ever_dropped() {
        let text = stream(&[(0, "POINT"), (10, "4.0")]);
        let drawing = from_str(&text).unwrap();
        assert!(drawing.entities.entities.is_empty());
    }

    #[test]
    fn test_content_after_eof_ignored() {
        let text = stream(&[(0, "EOF"), (0, "SECTION"), (2, "FOOBAR")]);
        let drawing = from_str(&text).unwrap();
        assert!(drawing.entities.entities.is_empty());
    }

    #[test]
    fn test_missing_section_name_code_fails() {
        let text = stream(&[(0, "SECTION"), (8, "ENTITIES")]);
        let err = from_str(&text).unwrap_err();
        assert!(matches!(err, DxfError::InvalidGroupCode { line: 4, code: 8 }));
    }

    #[test]
    fn test_round_trip_through_writer() {
        let mut drawing = Drawing::with_defaults();
        let mut polyline = crate::entities::Polyline::new();
        polyline.add_vertex(0.0, 0.0, 0.0);
        polyline.add_vertex(1.0, 2.0, 3.0);
        drawing.add_entity(Entity::Polyline(polyline));

        let text = drawing.to_dxf_string().unwrap();
        let reparsed = from_str(&text).unwrap();
        assert_eq!(reparsed.entities.entities, drawing.entities.entities);
        assert!(reparsed.tables.layers.contains("0"));
        assert_eq!(reparsed.header.version(), drawing.header.version());
    }
}
