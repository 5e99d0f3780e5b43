//! Core value types shared across the crate

pub mod color;
pub mod handle;
pub mod vector;

pub use color::{color_of, nearest_index, Color, PALETTE, PALETTE_LEN};
pub use handle::Handle;
pub use vector::{Vector2, Vector3};
