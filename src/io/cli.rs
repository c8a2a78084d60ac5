//! Command-line interface for tileset generation

use crate::compose::compositor::Strategy;
use crate::io::configuration::{
    DEFAULT_LAYOUT, DEFAULT_OUTPUT, DEFAULT_TEMPLATE, GeneratorConfig,
};
use crate::io::error::Result;
use crate::io::logging;
use crate::io::pipeline::generate;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "autotiler")]
#[command(
    author,
    version,
    about = "Generate an autotile tileset from a template strip and a layout"
)]
/// Command-line arguments for the tileset generator
pub struct Cli {
    /// Template strip of five square pattern cells
    #[arg(short = 's', long = "template", value_name = "template.png", default_value = DEFAULT_TEMPLATE)]
    pub template: PathBuf,

    /// Destination of the generated tileset
    #[arg(short, long, value_name = "autotile.png", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// JSON layout with width, height and adjacency codes
    #[arg(short, long, value_name = "layout7x7.json", default_value = DEFAULT_LAYOUT)]
    pub layout: PathBuf,

    /// Compose rows of cells in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress progress output and informational logs
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log detail (repeat for trace output)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Composition strategy selected by the flags
    pub const fn strategy(&self) -> Strategy {
        if self.parallel {
            Strategy::Parallel
        } else {
            Strategy::Sequential
        }
    }

    /// Build the run configuration from the parsed arguments
    pub fn to_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            template: self.template.clone(),
            output: self.output.clone(),
            layout: self.layout.clone(),
            strategy: self.strategy(),
            show_progress: self.should_show_progress(),
        }
    }

    /// Install logging and generate the tileset
    ///
    /// # Errors
    ///
    /// Returns an error if any generation stage fails
    pub fn run(&self) -> Result<PathBuf> {
        logging::init(logging::default_filter(self.quiet, self.verbose));
        generate(&self.to_config())
    }
}
