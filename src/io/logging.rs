//! Structured logging set-up

use crate::io::configuration::{
    DEFAULT_LOG_FILTER, QUIET_LOG_FILTER, TRACE_LOG_FILTER, VERBOSE_LOG_FILTER,
};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Log filter for the given command-line verbosity
///
/// `quiet` wins over any number of `--verbose` flags.
pub const fn default_filter(quiet: bool, verbosity: u8) -> &'static str {
    if quiet {
        return QUIET_LOG_FILTER;
    }
    match verbosity {
        0 => DEFAULT_LOG_FILTER,
        1 => VERBOSE_LOG_FILTER,
        _ => TRACE_LOG_FILTER,
    }
}

/// Install the global stderr subscriber
///
/// `RUST_LOG` takes precedence over `fallback`. Colours are only emitted
/// when stderr is a terminal. Returns `false` when a
/// subscriber was already installed, which leaves the existing one in place.
pub fn init(fallback: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init()
        .is_ok()
}
