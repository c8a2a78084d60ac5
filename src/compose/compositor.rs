//! Quadrant-by-quadrant tileset composition
//!
//! The canvas is filled one band at a time, a band being one row of layout
//! cells and `cell_size` pixel rows tall. Bands are disjoint slices of the
//! pixel buffer, so they can be filled in any order or on any thread and the
//! resulting bytes are the same.

use crate::bitmask::{Corner, classify};
use crate::compose::layout::Layout;
use crate::compose::template::Template;
use crate::io::error::{AutotileError, Result};
use image::{ImageBuffer, Pixel, Rgba, RgbaImage, imageops};
use ndarray::ArrayView1;
use rayon::prelude::*;

/// How bands are distributed while composing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Fill bands top to bottom on the calling thread
    #[default]
    Sequential,
    /// Fill bands on the rayon thread pool
    Parallel,
}

/// Composes tilesets from a single template
#[derive(Debug, Clone, Copy)]
pub struct Compositor<'a> {
    template: &'a Template,
    strategy: Strategy,
}

impl<'a> Compositor<'a> {
    /// Create a sequential compositor for `template`
    pub const fn new(template: &'a Template) -> Self {
        Self {
            template,
            strategy: Strategy::Sequential,
        }
    }

    /// Use a different band distribution
    #[must_use]
    pub const fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Compose the tileset for `layout`
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas size overflows or a band cannot be
    /// addressed in the pixel buffer
    pub fn compose(&self, layout: &Layout) -> Result<RgbaImage> {
        self.compose_observed(layout, |_| {})
    }

    /// Compose the tileset, calling `on_band` with the row index of every
    /// finished band
    ///
    /// With [`Strategy::Parallel`] the callback runs on worker threads and
    /// rows may finish out of order.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas size overflows or a band cannot be
    /// addressed in the pixel buffer
    pub fn compose_observed<F>(&self, layout: &Layout, on_band: F) -> Result<RgbaImage>
    where
        F: Fn(usize) + Sync,
    {
        let (width, height) = canvas_size(self.template, layout)?;
        let cell_size = self.template.cell_size();

        tracing::debug!(
            columns = layout.width(),
            rows = layout.height(),
            cell_size,
            strategy = ?self.strategy,
            "Composing tileset"
        );

        let mut canvas = RgbaImage::new(width, height);
        let band_len =
            width as usize * cell_size as usize * usize::from(Rgba::<u8>::CHANNEL_COUNT);
        let rows: Vec<ArrayView1<'_, u8>> = layout.cells().outer_iter().collect();

        match self.strategy {
            Strategy::Sequential => canvas
                .chunks_mut(band_len)
                .zip(&rows)
                .enumerate()
                .try_for_each(|(y, (band, codes))| {
                    self.fill_band(codes, band, width)?;
                    on_band(y);
                    Ok::<(), AutotileError>(())
                })?,
            Strategy::Parallel => canvas
                .par_chunks_mut(band_len)
                .zip(&rows)
                .enumerate()
                .try_for_each(|(y, (band, codes))| {
                    self.fill_band(codes, band, width)?;
                    on_band(y);
                    Ok::<(), AutotileError>(())
                })?,
        }

        Ok(canvas)
    }

    // Pastes the four quadrants of every cell in one row of the layout
    fn fill_band(&self, codes: &ArrayView1<'_, u8>, band: &mut [u8], width: u32) -> Result<()> {
        let cell_size = self.template.cell_size();
        let half_cell = self.template.half_cell();

        let mut strip = ImageBuffer::<Rgba<u8>, &mut [u8]>::from_raw(width, cell_size, band)
            .ok_or_else(|| AutotileError::Composition {
                reason: format!("band buffer does not hold {width}x{cell_size} pixels"),
            })?;

        for (x, &code) in codes.iter().enumerate() {
            let left = x as u32 * cell_size;

            for corner in Corner::DRAW_ORDER {
                let pattern = classify(code, corner);
                let quadrant = self.template.quadrant(pattern, corner).ok_or_else(|| {
                    AutotileError::Composition {
                        reason: format!("no {pattern:?} quadrant for corner {corner}"),
                    }
                })?;
                let (dx, dy) = corner.offset(half_cell);
                tracing::trace!(
                    x,
                    %corner,
                    ?pattern,
                    source = ?self.template.source_origin(pattern, corner),
                    "Pasting quadrant"
                );

                imageops::replace(
                    &mut strip,
                    quadrant,
                    i64::from(left + dx),
                    i64::from(dy),
                );
            }
        }

        Ok(())
    }
}

/// Pixel size of the canvas composed for `layout`
///
/// # Errors
///
/// Returns an error if the canvas cannot be allocated, see [`canvas_extent`]
pub fn canvas_size(template: &Template, layout: &Layout) -> Result<(u32, u32)> {
    canvas_extent(layout.width(), layout.height(), template.cell_size())
}

/// Pixel size of a canvas of `columns` by `rows` cells of `cell_size` pixels
///
/// # Errors
///
/// Returns an error if either side does not fit in `u32` or the RGBA buffer
/// would exceed `isize::MAX` bytes
pub fn canvas_extent(columns: usize, rows: usize, cell_size: u32) -> Result<(u32, u32)> {
    let too_large = || AutotileError::CanvasTooLarge {
        width: columns,
        height: rows,
        cell_size,
    };

    let width = u32::try_from(columns)
        .ok()
        .and_then(|w| w.checked_mul(cell_size))
        .ok_or_else(too_large)?;
    let height = u32::try_from(rows)
        .ok()
        .and_then(|h| h.checked_mul(cell_size))
        .ok_or_else(too_large)?;

    // Pixel buffer length must be addressable before RgbaImage::new is called
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(usize::from(Rgba::<u8>::CHANNEL_COUNT)))
        .filter(|&bytes| isize::try_from(bytes).is_ok())
        .ok_or_else(too_large)?;

    Ok((width, height))
}

/// Compose the tileset for `layout` sequentially
///
/// # Errors
///
/// Returns an error if the canvas size overflows
pub fn compose(template: &Template, layout: &Layout) -> Result<RgbaImage> {
    Compositor::new(template).compose(layout)
}
