//! Generation constants and runtime configuration

use crate::compose::compositor::Strategy;
use std::path::PathBuf;

/// Number of pattern columns in a template strip
pub const PATTERN_COUNT: u32 = 5;

// Default paths for the command surface
/// Template strip read when no path is given
pub const DEFAULT_TEMPLATE: &str = "template.png";
/// Tileset written when no path is given
pub const DEFAULT_OUTPUT: &str = "autotile.png";
/// Layout read when no path is given
pub const DEFAULT_LAYOUT: &str = "layout7x7.json";

// Progress bar display settings
/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Log filters applied when RUST_LOG is unset; a plain run only reports problems
/// Filter used with `--quiet`
pub const QUIET_LOG_FILTER: &str = "error";
/// Filter used by default
pub const DEFAULT_LOG_FILTER: &str = "warn";
/// Filter used with a single `--verbose`
pub const VERBOSE_LOG_FILTER: &str = "debug";
/// Filter used with two or more `--verbose`
pub const TRACE_LOG_FILTER: &str = "trace";

/// Everything a single generation run needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Template strip to read quadrants from
    pub template: PathBuf,
    /// Destination of the composed tileset
    pub output: PathBuf,
    /// JSON layout of adjacency codes
    pub layout: PathBuf,
    /// How cell rows are distributed over threads
    pub strategy: Strategy,
    /// Draw a progress bar while composing
    pub show_progress: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            template: PathBuf::from(DEFAULT_TEMPLATE),
            output: PathBuf::from(DEFAULT_OUTPUT),
            layout: PathBuf::from(DEFAULT_LAYOUT),
            strategy: Strategy::Sequential,
            show_progress: false,
        }
    }
}
