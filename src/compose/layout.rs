//! Grid of adjacency codes driving the compositor
//!
//! Layout files are JSON objects with `width`, `height` and a flat row-major
//! `array` of codes. Shape checks run here so that no image work starts for
//! an inconsistent layout.

use crate::bitmask::AdjacencyCode;
use crate::io::error::{AutotileError, Result, layout_shape};
use ndarray::Array2;
use serde::Deserialize;
use std::path::Path;

// Fields are optional so that a missing one is reported as a shape problem
#[derive(Debug, Deserialize)]
struct LayoutFile {
    width: Option<usize>,
    height: Option<usize>,
    array: Option<Vec<AdjacencyCode>>,
}

/// Validated grid of adjacency codes, indexed `[row, column]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    cells: Array2<AdjacencyCode>,
}

impl Layout {
    /// Build a layout from row-major codes
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or if `codes` does not
    /// hold exactly `width * height` entries
    pub fn new(width: usize, height: usize, codes: Vec<AdjacencyCode>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(layout_shape(&format!(
                "dimensions must be positive, got {width}x{height}"
            )));
        }

        let expected = width
            .checked_mul(height)
            .ok_or_else(|| layout_shape(&format!("{width}x{height} cells overflow")))?;
        if codes.len() != expected {
            return Err(layout_shape(&format!(
                "array holds {} codes but {width}x{height} requires {expected}",
                codes.len()
            )));
        }

        let cells = Array2::from_shape_vec((height, width), codes)
            .map_err(|e| layout_shape(&e))?;

        Ok(Self { cells })
    }

    /// Parse and validate a layout from JSON text
    ///
    /// `path` is only used to label errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a JSON object with integer fields,
    /// if a required field is missing, or if the shape is inconsistent
    pub fn from_json(text: &str, path: &Path) -> Result<Self> {
        let file: LayoutFile =
            serde_json::from_str(text).map_err(|source| AutotileError::LayoutParse {
                path: path.to_path_buf(),
                source,
            })?;

        let width = file.width.ok_or_else(|| layout_shape(&"missing field `width`"))?;
        let height = file
            .height
            .ok_or_else(|| layout_shape(&"missing field `height`"))?;
        let array = file.array.ok_or_else(|| layout_shape(&"missing field `array`"))?;

        Self::new(width, height, array)
    }

    /// Read and validate a layout file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails [`Layout::from_json`]
    pub fn open(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| AutotileError::LayoutRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&text, path)
    }

    /// Width in cells
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Height in cells
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Underlying grid, shape `(height, width)`
    pub const fn cells(&self) -> &Array2<AdjacencyCode> {
        &self.cells
    }
}
