/// Command-line argument parsing
pub mod cli;
/// Constants, defaults and run configuration
pub mod configuration;
/// Error types for every generation stage
pub mod error;
/// Template decoding and atomic image export
pub mod image;
/// Tracing subscriber initialisation
pub mod logging;
/// Layout to saved tileset, end to end
pub mod pipeline;
/// Progress display while composing
pub mod progress;
