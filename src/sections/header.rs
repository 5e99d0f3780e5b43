//! HEADER section: named drawing variables

use super::Section;
use crate::drawing::SectionKind;
use crate::error::Result;
use crate::io::tag::CodePair;
use crate::io::writer::{fmt_double, TagSink};
use crate::types::Vector3;
use indexmap::IndexMap;

/// The HEADER section
///
/// Each `$VARIABLE` (group code 9) owns the value tags that follow it.
/// Insertion order is preserved on output, so an unmodified header
/// round-trips verbatim.
#[derive(Debug, Clone, Default)]
pub struct HeaderSection {
    variables: IndexMap<String, Vec<CodePair>>,
}

impl HeaderSection {
    /// Create an empty header
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a header with the standard variables of a fresh drawing
    pub fn standard() -> Self {
        let mut header = Self::new();
        header.set_version("AC1015");
        header.set_point("$INSBASE", Vector3::ZERO);
        header.set_point("$EXTMIN", Vector3::ZERO);
        header.set_point("$EXTMAX", Vector3::ZERO);
        header
    }

    /// Raw value tags of a variable
    pub fn get(&self, name: &str) -> Option<&[CodePair]> {
        self.variables.get(name).map(Vec::as_slice)
    }

    /// Set a variable's value tags, keeping its position if it exists
    pub fn set(&mut self, name: impl Into<String>, pairs: Vec<CodePair>) {
        self.variables.insert(name.into(), pairs);
    }

    /// Number of variables
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether the header holds no variables
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// The `$ACADVER` version string
    pub fn version(&self) -> Option<&str> {
        self.get("$ACADVER")?
            .iter()
            .find(|p| p.code == 1)
            .map(|p| p.value.as_str())
    }

    /// Set the `$ACADVER` version string
    pub fn set_version(&mut self, version: &str) {
        self.set("$ACADVER", vec![CodePair::new(1, version, 0)]);
    }

    /// Read a point-valued variable (codes 10/20/30)
    pub fn point(&self, name: &str) -> Option<Vector3> {
        let pairs = self.get(name)?;
        let mut point = Vector3::ZERO;
        for pair in pairs {
            let axis = match pair.code {
                10 => 0,
                20 => 1,
                30 => 2,
                _ => continue,
            };
            point.set_component(axis, pair.as_double().ok()?);
        }
        Some(point)
    }

    /// Set a point-valued variable (codes 10/20/30)
    pub fn set_point(&mut self, name: impl Into<String>, point: Vector3) {
        let pairs = vec![
            CodePair::new(10, fmt_double(point.x), 0),
            CodePair::new(20, fmt_double(point.y), 0),
            CodePair::new(30, fmt_double(point.z), 0),
        ];
        self.set(name, pairs);
    }

    /// Drawing extents minimum (`$EXTMIN`)
    pub fn ext_min(&self) -> Option<Vector3> {
        self.point("$EXTMIN")
    }

    /// Drawing extents maximum (`$EXTMAX`)
    pub fn ext_max(&self) -> Option<Vector3> {
        self.point("$EXTMAX")
    }

    /// Set the drawing extents
    pub fn set_extents(&mut self, min: Vector3, max: Vector3) {
        self.set_point("$EXTMIN", min);
        self.set_point("$EXTMAX", max);
    }
}

impl Section for HeaderSection {
    fn kind(&self) -> SectionKind {
        SectionKind::Header
    }

    fn parse(&mut self, _start_line: usize, tags: &[CodePair]) -> Result<()> {
        let mut current: Option<String> = None;
        for pair in tags {
            if pair.code == 9 {
                current = Some(pair.value.clone());
                self.variables.entry(pair.value.clone()).or_default().clear();
            } else if let Some(name) = &current {
                self.variables
                    .entry(name.clone())
                    .or_default()
                    .push(pair.clone());
            }
            // tags before the first variable name are ignored
        }
        Ok(())
    }

    fn write(&self, sink: &mut dyn TagSink) -> Result<()> {
        for (name, pairs) in &self.variables {
            sink.write_string(9, name)?;
            for pair in pairs {
                sink.write_string(pair.code, &pair.value)?;
            }
        }
        Ok(())
    }

    fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
