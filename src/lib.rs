//! Autotile tileset generation from a five-pattern template strip
//!
//! Each cell of a layout carries an 8-bit neighbour adjacency code. Every
//! corner of the cell is classified independently into one of five quadrant
//! patterns, and the matching quadrant of the template is pasted into the
//! output canvas.

#![forbid(unsafe_code)]

/// Adjacency code decoding into per-corner quadrant patterns
pub mod bitmask;
/// Layout and template handling plus canvas composition
pub mod compose;
/// Input/output operations, configuration and error handling
pub mod io;

pub use io::error::{AutotileError, Result};
