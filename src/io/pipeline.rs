//! End-to-end tileset generation
//!
//! Stages run cheapest first: the layout is shape-checked before the
//! template is decoded, and the template is shape-checked before the canvas
//! is allocated.

use crate::compose::compositor::Compositor;
use crate::compose::layout::Layout;
use crate::io::configuration::GeneratorConfig;
use crate::io::error::Result;
use crate::io::image::{load_template, save_canvas};
use crate::io::progress::ProgressManager;
use std::path::PathBuf;
use std::time::Instant;

/// Generate the tileset described by `config` and return where it was written
///
/// # Errors
///
/// Returns an error if:
/// - The layout cannot be read, parsed or has an inconsistent shape
/// - The template cannot be decoded or is not a five-cell strip
/// - The canvas would exceed the maximum image size
/// - The output cannot be encoded or written
pub fn generate(config: &GeneratorConfig) -> Result<PathBuf> {
    let start_time = Instant::now();

    let layout = Layout::open(&config.layout)?;
    tracing::info!(
        path = %config.layout.display(),
        width = layout.width(),
        height = layout.height(),
        "Loaded layout"
    );

    let template = load_template(&config.template)?;
    tracing::info!(
        path = %config.template.display(),
        cell_size = template.cell_size(),
        "Loaded template"
    );

    let progress = config.show_progress.then(ProgressManager::new);
    if let Some(ref pm) = progress {
        pm.start(&config.output, layout.height());
    }

    let canvas = Compositor::new(&template)
        .with_strategy(config.strategy)
        .compose_observed(&layout, |_| {
            if let Some(ref pm) = progress {
                pm.advance();
            }
        })?;

    if let Some(ref pm) = progress {
        let bands = pm.finish();
        tracing::debug!(bands, "Composition finished");
    }

    save_canvas(&canvas, &config.output)?;
    tracing::info!(
        path = %config.output.display(),
        width = canvas.width(),
        height = canvas.height(),
        elapsed_ms = start_time.elapsed().as_millis(),
        "Tileset written"
    );

    Ok(config.output.clone())
}
