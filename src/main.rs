//! CLI entry point for the autotile tileset generator

use autotiler::io::cli::Cli;
use clap::Parser;
use std::process::ExitCode;

// The status line is the tool's only user-facing output
#[allow(clippy::print_stdout, clippy::print_stderr)]
fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.run() {
        Ok(path) => {
            println!("Tileset generated at '{}'!", path.display());
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}
