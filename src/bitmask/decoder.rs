//! Per-corner classification of neighbour adjacency codes
//!
//! Bit `i` of an adjacency code flags the neighbour in compass direction `i`,
//! ordered N, NE, E, SE, S, SW, W, NW. Each corner of a cell looks at three
//! of those neighbours: its two straight edges and the diagonal between them.

use crate::bitmask::swap::swap_bits;
use std::fmt;

/// Neighbour flags of a single grid cell, bit 0 = north, clockwise
pub type AdjacencyCode = u8;

/// One quadrant of a cell
///
/// Discriminants match the ordering used by layout tooling and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Upper right quadrant
    NorthEast = 0,
    /// Lower right quadrant
    SouthEast = 1,
    /// Lower left quadrant
    SouthWest = 2,
    /// Upper left quadrant
    NorthWest = 3,
}

impl Corner {
    /// Every corner, in discriminant order
    pub const ALL: [Self; 4] = [
        Self::NorthEast,
        Self::SouthEast,
        Self::SouthWest,
        Self::NorthWest,
    ];

    /// Order in which the compositor pastes the quadrants of a cell
    pub const DRAW_ORDER: [Self; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthEast,
        Self::SouthWest,
    ];

    /// Pixel offset of this quadrant inside a cell with the given half size
    ///
    /// The same offset addresses the quadrant in the template cell and in
    /// the destination cell.
    pub const fn offset(self, half_cell: u32) -> (u32, u32) {
        match self {
            Self::NorthEast => (half_cell, 0),
            Self::SouthEast => (half_cell, half_cell),
            Self::SouthWest => (0, half_cell),
            Self::NorthWest => (0, 0),
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NorthEast => "NE",
            Self::SouthEast => "SE",
            Self::SouthWest => "SW",
            Self::NorthWest => "NW",
        };
        f.write_str(name)
    }
}

/// Canonical quadrant shape drawn from the template strip
///
/// The ordinal is the column of the pattern inside the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TilePattern {
    /// No neighbours on this corner
    Empty = 0,
    /// Only the north or south neighbour is present
    Vertical = 1,
    /// Only the east or west neighbour is present
    Horizontal = 2,
    /// Both straight neighbours present, diagonal missing
    Cross = 3,
    /// Diagonal neighbour present
    Full = 4,
}

impl TilePattern {
    /// Every pattern, in template column order
    pub const ALL: [Self; 5] = [
        Self::Empty,
        Self::Vertical,
        Self::Horizontal,
        Self::Cross,
        Self::Full,
    ];

    /// Template column holding this pattern
    pub const fn ordinal(self) -> u32 {
        self as u32
    }

    // Only the low two bits are consulted; bit 2 is handled by the caller
    const fn from_edge_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Self::Empty,
            1 => Self::Vertical,
            2 => Self::Horizontal,
            _ => Self::Cross,
        }
    }
}

/// Extract the three-bit mask a corner is classified by
///
/// After extraction bit 0 flags the vertical neighbour, bit 1 the horizontal
/// neighbour and bit 2 the diagonal neighbour of the corner.
pub fn corner_mask(code: AdjacencyCode, corner: Corner) -> u8 {
    let raw = match corner {
        Corner::NorthEast => code & 0b111,
        Corner::SouthEast => swap_bits((code >> 2) & 0b111, 0, 2),
        Corner::SouthWest => (code >> 4) & 0b111,
        Corner::NorthWest => swap_bits(((code >> 6) & 0b11) | ((code & 1) << 2), 0, 2),
    };

    swap_bits(raw, 1, 2)
}

/// Classify one corner of a cell
///
/// A present diagonal neighbour always yields [`TilePattern::Full`], even when
/// the straight edges are missing. Otherwise the straight edges select between
/// the remaining four patterns.
pub fn classify(code: AdjacencyCode, corner: Corner) -> TilePattern {
    let mask = corner_mask(code, corner);

    if mask & 0b100 == 0 {
        TilePattern::from_edge_bits(mask)
    } else {
        TilePattern::Full
    }
}
