//! Adjacency bitmask decoding
//!
//! Pure integer algebra turning a cell's 8-bit neighbour code into one
//! quadrant pattern per corner. No I/O and no state.

/// Corner and pattern enumerations plus the per-corner classification
pub mod decoder;
/// Bit exchange primitive shared by the corner masks
pub mod swap;

pub use decoder::{AdjacencyCode, Corner, TilePattern, classify, corner_mask};
pub use swap::swap_bits;
