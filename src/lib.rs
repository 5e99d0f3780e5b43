//! # dxfstream
//!
//! A pure Rust library for reading and writing the DXF ASCII tag-stream
//! format.
//!
//! The wire format is a flat sequence of (group code, value) pairs, two
//! physical lines per pair.  A drawing is a run of SECTION/ENDSEC frames
//! terminated by EOF; this library parses that structure into typed
//! sections and writes it back out.
//!
//! ## Features
//!
//! - Line-accurate errors: every parse failure carries the 1-based source
//!   line it happened on
//! - Typed sections for HEADER, TABLES, BLOCKS, and ENTITIES; the rest
//!   round-trip verbatim
//! - Entity serialization through the [`DxfRecord`](record::DxfRecord)
//!   trait, with unknown group codes skipped for forward compatibility
//! - The 256-entry indexed color palette with nearest-color quantization
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dxfstream::{Drawing, DxfReader, DxfWriter, Entity, Line, Vector3};
//!
//! // Read a DXF file
//! let drawing = DxfReader::from_path("sample.dxf")?.read()?;
//!
//! // Access entities
//! for entity in &drawing.entities.entities {
//!     println!("{:?}", entity);
//! }
//!
//! // Build and write a drawing
//! let mut drawing = Drawing::with_defaults();
//! drawing.add_entity(Entity::Line(Line::from_points(
//!     Vector3::ZERO,
//!     Vector3::new(10.0, 0.0, 0.0),
//! )));
//! let text = drawing.to_dxf_string()?;
//! # Ok::<(), dxfstream::DxfError>(())
//! ```

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod drawing;
pub mod entities;
pub mod error;
pub mod io;
pub mod record;
pub mod sections;
pub mod tables;
pub mod types;

// Re-export commonly used types
pub use error::{DxfError, Result};
pub use types::{Color, Handle, Vector2, Vector3};

// Re-export entity types
pub use entities::{
    Circle, Entity, Face3D, Line, LwPolyline, Point, Polyline, Text, Vertex,
};

// Re-export table types
pub use tables::{Layer, LineType, Table, TableEntry, TextStyle, Vport};

// Re-export the drawing and its registry
pub use drawing::{Drawing, SectionKind};

// Re-export section types
pub use sections::{Block, BlocksSection, EntitiesSection, HeaderSection, Section, TablesSection};

// Re-export I/O types
pub use io::{DxfReader, DxfWriter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
