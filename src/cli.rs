//! CLI argument parsing for pylaunch.
//!
//! Uses clap derive macros. The launcher deliberately has no flags or
//! subcommands; clap still provides `--help`/`--version` and rejects
//! stray arguments with a usage error instead of silently ignoring them.

use clap::Parser;

/// Console launcher for the bundled Python application.
///
/// Prepares a UTF-8 console, runs `source/main.py` next to the launcher
/// executable, and keeps the window open when the application fails so
/// the error message stays visible.
#[derive(Parser, Debug)]
#[command(name = "pylaunch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
