//! Error types for template, layout and output handling

use std::fmt;
use std::path::PathBuf;

/// Main error type for every stage of tileset generation
#[derive(Debug)]
pub enum AutotileError {
    /// Failed to open or decode the template image
    TemplateLoad {
        /// Path to the template file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Template dimensions do not form a strip of five square cells
    TemplateShape {
        /// Template width in pixels
        width: u32,
        /// Template height in pixels
        height: u32,
        /// Which requirement was violated
        reason: String,
    },

    /// Failed to read the layout file from disk
    LayoutRead {
        /// Path to the layout file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Layout file is not a JSON object of the expected form
    LayoutParse {
        /// Path to the layout file
        path: PathBuf,
        /// Underlying parse error
        source: serde_json::Error,
    },

    /// Layout fields are missing or inconsistent with each other
    LayoutShape {
        /// Description of what's wrong with the layout
        reason: String,
    },

    /// Output canvas dimensions do not fit in the image size type
    CanvasTooLarge {
        /// Layout width in cells
        width: usize,
        /// Layout height in cells
        height: usize,
        /// Template cell edge in pixels
        cell_size: u32,
    },

    /// Canvas buffer could not be addressed during composition
    Composition {
        /// Description of the failure
        reason: String,
    },

    /// Failed to encode or write the generated tileset
    OutputSave {
        /// Destination path
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },
}

impl AutotileError {
    /// Whether the layout file could not be loaded at all
    pub const fn is_layout_load(&self) -> bool {
        matches!(self, Self::LayoutRead { .. } | Self::LayoutParse { .. })
    }
}

impl fmt::Display for AutotileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TemplateLoad { path, source } => {
                write!(f, "Unable to load template '{}': {source}", path.display())
            }
            Self::TemplateShape {
                width,
                height,
                reason,
            } => {
                write!(f, "Invalid template size {width}x{height}: {reason}")
            }
            Self::LayoutRead { path, source } => {
                write!(
                    f,
                    "Unable to read layout file '{}': {source}",
                    path.display()
                )
            }
            Self::LayoutParse { path, source } => {
                write!(
                    f,
                    "Unable to parse layout file '{}': {source}",
                    path.display()
                )
            }
            Self::LayoutShape { reason } => {
                write!(f, "Invalid layout: {reason}")
            }
            Self::CanvasTooLarge {
                width,
                height,
                cell_size,
            } => {
                write!(
                    f,
                    "Output canvas for {width}x{height} cells of {cell_size}px exceeds the maximum image size"
                )
            }
            Self::Composition { reason } => {
                write!(f, "Composition failed: {reason}")
            }
            Self::OutputSave { path, source } => {
                write!(f, "Unable to save image '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for AutotileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TemplateLoad { source, .. } | Self::OutputSave { source, .. } => Some(source),
            Self::LayoutRead { source, .. } => Some(source),
            Self::LayoutParse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for tileset generation results
pub type Result<T> = std::result::Result<T, AutotileError>;

/// Create a layout shape error
pub fn layout_shape(reason: &impl ToString) -> AutotileError {
    AutotileError::LayoutShape {
        reason: reason.to_string(),
    }
}

/// Create a template shape error
pub fn template_shape(width: u32, height: u32, reason: &impl ToString) -> AutotileError {
    AutotileError::TemplateShape {
        width,
        height,
        reason: reason.to_string(),
    }
}

/// Create an output save error from a plain I/O failure
pub fn output_io(path: impl Into<PathBuf>, source: std::io::Error) -> AutotileError {
    AutotileError::OutputSave {
        path: path.into(),
        source: image::ImageError::IoError(source),
    }
}
