//! Color representation and the indexed ACI palette
//!
//! Drawings carry colors as small palette indices (group code 62).  A color
//! given as an RGB triple must be approximated by the nearest palette entry
//! before it can be written, and a palette index maps back to a fixed RGB
//! triple when read.

use crate::error::{DxfError, Result};
use once_cell::sync::Lazy;
use std::fmt;

/// Number of entries in the indexed palette
pub const PALETTE_LEN: usize = 256;

/// The fixed ACI palette, indexed 0..=255.
///
/// Indices 0-9 and 250-255 are the classic fixed entries; 10-249 form the
/// hue wheel: 24 hues of 15 degrees, each with five brightness levels in a
/// full- and a half-saturated variant.  All arithmetic is integral so the
/// table is identical on every platform.
pub static PALETTE: Lazy<[[u8; 3]; PALETTE_LEN]> = Lazy::new(build_palette);

fn build_palette() -> [[u8; 3]; PALETTE_LEN] {
    let mut table = [[0u8; 3]; PALETTE_LEN];

    let fixed: [[u8; 3]; 10] = [
        [0, 0, 0],       // 0: by block marker slot
        [255, 0, 0],     // 1: red
        [255, 255, 0],   // 2: yellow
        [0, 255, 0],     // 3: green
        [0, 255, 255],   // 4: cyan
        [0, 0, 255],     // 5: blue
        [255, 0, 255],   // 6: magenta
        [255, 255, 255], // 7: white
        [128, 128, 128], // 8: dark gray
        [192, 192, 192], // 9: light gray
    ];
    table[..10].copy_from_slice(&fixed);

    const LEVELS: [i32; 5] = [255, 204, 153, 127, 76];
    for idx in 10..250usize {
        let t = (idx - 10) as i32;
        let hue = (t / 10) * 15;
        let v = LEVELS[((t % 10) / 2) as usize];
        // odd offsets are the washed-out variant of the same hue
        let m = if t % 2 == 1 { v / 2 } else { 0 };
        let c = v - m;
        let sector = hue / 60;
        let ramp = c * (hue % 60) / 60;
        let (r, g, b) = match sector {
            0 => (v, m + ramp, m),
            1 => (v - ramp, v, m),
            2 => (m, v, m + ramp),
            3 => (m, v - ramp, v),
            4 => (m + ramp, m, v),
            _ => (v, m, v - ramp),
        };
        table[idx] = [r as u8, g as u8, b as u8];
    }

    const GRAYS: [u8; 6] = [51, 91, 132, 173, 214, 255];
    for (i, &g) in GRAYS.iter().enumerate() {
        table[250 + i] = [g, g, g];
    }

    table
}

/// Find the palette index closest to an RGB triple.
///
/// Linear scan minimizing squared Euclidean distance in RGB space.  Only a
/// strict improvement replaces the current best, so ties resolve to the
/// lowest index; an exact match ends the scan early with the same result a
/// full scan would give.
pub fn nearest_index(rgb: [u8; 3]) -> u8 {
    let mut best = 0usize;
    let mut best_dist = i32::MAX;
    for (i, entry) in PALETTE.iter().enumerate() {
        let mut dist = 0i32;
        for axis in 0..3 {
            let d = rgb[axis] as i32 - entry[axis] as i32;
            dist += d * d;
        }
        if dist < best_dist {
            best = i;
            best_dist = dist;
            if dist == 0 {
                break;
            }
        }
    }
    best as u8
}

/// Look up the RGB triple for a palette index.
pub fn color_of(index: usize) -> Result<[u8; 3]> {
    PALETTE
        .get(index)
        .copied()
        .ok_or(DxfError::IndexOutOfRange {
            index,
            len: PALETTE_LEN,
        })
}

/// Represents a color carried by a record
///
/// Colors can be given by palette index (1-255), by RGB triple, or deferred
/// to the containing layer or block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Color by layer (wire index 256)
    #[default]
    ByLayer,
    /// Color by block (wire index 0)
    ByBlock,
    /// Palette index (1-255)
    Index(u8),
    /// True color with RGB values
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    /// Create a color from a wire color index (group code 62)
    pub fn from_index(index: i16) -> Self {
        match index {
            0 => Color::ByBlock,
            256 => Color::ByLayer,
            1..=255 => Color::Index(index as u8),
            // negative means the layer is off; the magnitude is the index
            _ if index < 0 => Color::Index((-index).min(255) as u8),
            _ => Color::Index(7),
        }
    }

    /// Create a true color from RGB values
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// The wire color index for group code 62.
    ///
    /// True colors are quantized to the nearest palette entry.
    pub fn to_wire_index(&self) -> i16 {
        match self {
            Color::ByBlock => 0,
            Color::ByLayer => 256,
            Color::Index(i) => *i as i16,
            Color::Rgb { r, g, b } => nearest_index([*r, *g, *b]) as i16,
        }
    }

    /// Get RGB values (if applicable)
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        match self {
            Color::Rgb { r, g, b } => Some((*r, *g, *b)),
            _ => None,
        }
    }

    /// Common color constants
    pub const RED: Color = Color::Index(1);
    pub const YELLOW: Color = Color::Index(2);
    pub const GREEN: Color = Color::Index(3);
    pub const CYAN: Color = Color::Index(4);
    pub const BLUE: Color = Color::Index(5);
    pub const MAGENTA: Color = Color::Index(6);
    pub const WHITE: Color = Color::Index(7);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::ByLayer => write!(f, "ByLayer"),
            Color::ByBlock => write!(f, "ByBlock"),
            Color::Index(i) => write!(f, "Index({})", i),
            Color::Rgb { r, g, b } => write!(f, "RGB({}, {}, {})", r, g, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_exact_white_is_index_7() {
        assert_eq!(nearest_index([255, 255, 255]), 7);
    }

    #[test]
    fn test_exact_primaries() {
        assert_eq!(nearest_index([255, 0, 0]), 1);
        assert_eq!(nearest_index([0, 255, 0]), 3);
        assert_eq!(nearest_index([0, 0, 255]), 5);
        assert_eq!(nearest_index([0, 0, 0]), 0);
    }

    #[test]
    fn test_color_of_out_of_range() {
        assert!(matches!(
            color_of(256),
            Err(DxfError::IndexOutOfRange { index: 256, .. })
        ));
        assert_eq!(color_of(255).unwrap(), [255, 255, 255]);
    }

    #[test]
    fn test_palette_round_trip() {
        // The hue wheel duplicates the primary entries (e.g. 10 repeats 1)
        // and 255 repeats 7; the scan resolves those to the lowest index.
        // Everywhere the triple is unique the index round-trips exactly.
        let duplicates = [10usize, 50, 90, 130, 170, 210, 255];
        for i in 0..PALETTE_LEN {
            let found = nearest_index(color_of(i).unwrap()) as usize;
            assert_eq!(PALETTE[found], PALETTE[i], "triple mismatch at {}", i);
            if !duplicates.contains(&i) {
                assert_eq!(found, i, "index mismatch at {}", i);
            }
        }
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Color::from_index(0), Color::ByBlock);
        assert_eq!(Color::from_index(256), Color::ByLayer);
        assert_eq!(Color::from_index(3), Color::Index(3));
        assert_eq!(Color::from_index(-7), Color::Index(7));
    }

    #[test]
    fn test_wire_index_quantizes_true_color() {
        assert_eq!(Color::from_rgb(255, 255, 255).to_wire_index(), 7);
        assert_eq!(Color::from_rgb(250, 5, 5).to_wire_index(), 1);
        assert_eq!(Color::ByLayer.to_wire_index(), 256);
    }

    fn brute_force_nearest(rgb: [u8; 3]) -> u8 {
        let mut best = 0usize;
        let mut best_dist = i64::MAX;
        for (i, entry) in PALETTE.iter().enumerate() {
            let dist: i64 = (0..3)
                .map(|a| {
                    let d = rgb[a] as i64 - entry[a] as i64;
                    d * d
                })
                .sum();
            if dist < best_dist {
                best = i;
                best_dist = dist;
            }
        }
        best as u8
    }

    proptest! {
        #[test]
        fn prop_nearest_matches_full_scan(r: u8, g: u8, b: u8) {
            // The early-out on distance zero must never change the result.
            prop_assert_eq!(nearest_index([r, g, b]), brute_force_nearest([r, g, b]));
        }
    }
}
