//! Template strip addressing
//!
//! A template is a horizontal strip of five square cells, one per
//! [`TilePattern`], each split into a 2x2 grid of quadrants.

use crate::bitmask::{Corner, TilePattern};
use crate::io::configuration::PATTERN_COUNT;
use crate::io::error::{Result, template_shape};
use image::{DynamicImage, GenericImageView, RgbaImage};

// Quadrants cut out of the strip, indexed [pattern][corner]
type QuadrantTable = [[RgbaImage; 4]; 5];

/// Validated template strip, kept as its twenty RGBA quadrants
#[derive(Debug, Clone)]
pub struct Template {
    cell_size: u32,
    quadrants: QuadrantTable,
}

impl Template {
    /// Validate a decoded image as a template strip
    ///
    /// # Errors
    ///
    /// Returns an error if the height is zero or odd, or if the width is not
    /// exactly five times the height
    pub fn from_image(image: DynamicImage) -> Result<Self> {
        let (width, height) = image.dimensions();

        if height == 0 {
            return Err(template_shape(width, height, &"height must be positive"));
        }
        if !height.is_multiple_of(2) {
            return Err(template_shape(
                width,
                height,
                &"cell size must be even to split into quadrants",
            ));
        }
        if height.checked_mul(PATTERN_COUNT) != Some(width) {
            return Err(template_shape(
                width,
                height,
                &format!("width must be {PATTERN_COUNT} times the height"),
            ));
        }

        let strip = image.into_rgba8();
        let half = height / 2;
        let quadrants = TilePattern::ALL.map(|pattern| {
            Corner::ALL.map(|corner| {
                let (x, y) = Self::origin_in(height, pattern, corner);
                strip.view(x, y, half, half).to_image()
            })
        });

        Ok(Self {
            cell_size: height,
            quadrants,
        })
    }

    const fn origin_in(cell_size: u32, pattern: TilePattern, corner: Corner) -> (u32, u32) {
        let (dx, dy) = corner.offset(cell_size / 2);
        (pattern.ordinal() * cell_size + dx, dy)
    }

    /// Edge length of one pattern cell in pixels
    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Edge length of one quadrant in pixels
    pub const fn half_cell(&self) -> u32 {
        self.cell_size / 2
    }

    /// Top-left pixel of the quadrant for `pattern` at `corner`
    pub const fn source_origin(&self, pattern: TilePattern, corner: Corner) -> (u32, u32) {
        Self::origin_in(self.cell_size, pattern, corner)
    }

    /// Pixels of the quadrant for `pattern` at `corner`, `half_cell` square
    pub fn quadrant(&self, pattern: TilePattern, corner: Corner) -> Option<&RgbaImage> {
        self.quadrants
            .get(pattern.ordinal() as usize)
            .and_then(|row| row.get(corner as usize))
    }
}
