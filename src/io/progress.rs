//! Terminal progress display for band composition

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BAND_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} rows"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar advanced once per composed band
///
/// Safe to advance from rayon workers.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with an empty bar
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(BAND_STYLE.clone());
        Self { bar }
    }

    /// Reset the bar for a tileset with `rows` bands written to `output`
    pub fn start(&self, output: &Path, rows: usize) {
        let display_name = output
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_prefix(display_name);
        self.bar.set_length(rows as u64);
        self.bar.set_position(0);
    }

    /// Record one finished band
    pub fn advance(&self) {
        self.bar.inc(1);
    }

    /// Remove the bar from the terminal and return the number of bands recorded
    ///
    /// Clearing moves the bar to its full length, so the count is read first.
    pub fn finish(&self) -> u64 {
        let recorded = self.bar.position();
        self.bar.finish_and_clear();
        recorded
    }
}
