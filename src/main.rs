//! Pylaunch: console launcher for the bundled Python application.
//!
//! This is the main entry point for the `pylaunch` binary. It parses
//! arguments (none are accepted beyond `--help`/`--version`), runs the
//! launch flow, and maps the outcome to a process exit code.

mod cli;
pub mod console;
pub mod error;
pub mod exit_codes;
pub mod launcher;
#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let _cli = Cli::parse_args();

    let mut input = std::io::stdin().lock();
    let mut output = std::io::stdout();
    ExitCode::from(launcher::run(&mut input, &mut output))
}
