//! Child process launch and wait for the bundled application.
//!
//! Resolves the application entry point relative to the launcher
//! executable, runs it under the Python interpreter with a UTF-8
//! environment, and drives the announce / run / pause-on-failure flow.

use crate::console;
use crate::error::{LaunchError, Result};
use crate::exit_codes;
use std::io::{BufRead, Write};
use std::process::Command;

/// Path from the launcher executable's directory to the application
/// entry point.
pub const APP_ENTRY: &str = "source/main.py";

/// Environment variable that overrides the interpreter command.
///
/// The value is split with shell quoting rules, so multi-word overrides
/// like `py -3` work.
pub const INTERPRETER_ENV_VAR: &str = "PYLAUNCH_PYTHON";

/// Interpreter used when no override is set.
pub const DEFAULT_INTERPRETER: &str = if cfg!(windows) { "python" } else { "python3" };

/// Notice printed before the child is started.
const STARTING_NOTICE: &str = "Starting the application...";

/// Fully resolved description of the child process to run.
#[derive(Debug, Clone)]
pub struct LaunchSpec {
    /// Program to execute (the Python interpreter).
    pub program: String,
    /// Arguments passed to the program. The last one is the script
    /// path; the application itself receives no arguments.
    pub args: Vec<String>,
    /// Environment variables set for the child only.
    pub env: Vec<(String, String)>,
}

impl LaunchSpec {
    /// Build the default spec: interpreter plus the bundled script next
    /// to the launcher executable, with the UTF-8 environment pair.
    pub fn resolve() -> Result<Self> {
        let exe = std::env::current_exe().map_err(|e| {
            LaunchError::Resolve(format!("failed to locate the launcher executable: {}", e))
        })?;
        let base = exe.parent().ok_or_else(|| {
            LaunchError::Resolve("the launcher executable has no parent directory".to_string())
        })?;
        let script = base.join(APP_ENTRY);

        let mut command = interpreter_command()?;
        let program = command.remove(0);
        let mut args = command;
        args.push(script.display().to_string());

        Ok(Self {
            program,
            args,
            env: console::utf8_child_env(),
        })
    }
}

/// Interpreter command used to run the application.
///
/// Honors the `PYLAUNCH_PYTHON` override; an empty override falls back
/// to the platform default.
fn interpreter_command() -> Result<Vec<String>> {
    if let Ok(raw) = std::env::var(INTERPRETER_ENV_VAR) {
        if let Some(words) = parse_interpreter(&raw)? {
            return Ok(words);
        }
    }
    Ok(vec![DEFAULT_INTERPRETER.to_string()])
}

/// Split an interpreter override with shell quoting rules.
///
/// Returns `None` for an empty or whitespace-only value.
fn parse_interpreter(raw: &str) -> Result<Option<Vec<String>>> {
    let words = shell_words::split(raw).map_err(|e| {
        LaunchError::Config(format!(
            "failed to parse {} '{}': {}\n\
             Fix: check for unmatched quotes or invalid escape sequences.",
            INTERPRETER_ENV_VAR, raw, e
        ))
    })?;

    if words.is_empty() {
        Ok(None)
    } else {
        Ok(Some(words))
    }
}

/// Run the child process described by `spec` and block until it exits.
///
/// The child inherits the launcher's working directory and standard
/// streams; only the entries in `spec.env` are added to its environment.
///
/// # Returns
///
/// * `Ok(code)` - The child's exit code (`NO_EXIT_CODE` if it was
///   terminated by a signal)
/// * `Err(LaunchError::Spawn)` - If the process could not be started
pub fn launch(spec: &LaunchSpec) -> Result<i32> {
    let mut command = Command::new(&spec.program);
    command.args(&spec.args);
    for (key, value) in &spec.env {
        command.env(key, value);
    }

    let status = command.status().map_err(|e| {
        LaunchError::Spawn(format!(
            "failed to start '{}': {}\n\
             Fix: ensure the Python interpreter is installed and in PATH.",
            spec.program, e
        ))
    })?;

    Ok(status.code().unwrap_or(exit_codes::NO_EXIT_CODE))
}

/// Top-level launch flow: announce, run, and on any failure keep the
/// console open until the user presses Enter.
///
/// Returns the launcher's own exit code. The child's exit code is
/// propagated where it fits in 1..=255.
pub fn run(input: &mut impl BufRead, output: &mut impl Write) -> u8 {
    console::enable_utf8_output();
    run_with(LaunchSpec::resolve(), input, output)
}

fn run_with(
    spec: Result<LaunchSpec>,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> u8 {
    // Notices are best effort: a closed stdout must not abort the launch.
    let _ = writeln!(output, "{}", STARTING_NOTICE);

    match spec.and_then(|spec| launch(&spec)) {
        Ok(0) => exit_codes::SUCCESS,
        Ok(code) => {
            let _ = writeln!(
                output,
                "The application exited with an error (exit code {}).",
                code
            );
            console::wait_for_enter(input, output);
            clamp_exit_code(code)
        }
        Err(err) => {
            let _ = writeln!(output, "Error: {}", err);
            console::wait_for_enter(input, output);
            err.exit_code()
        }
    }
}

/// Map a non-zero child exit code to the launcher's exit code.
///
/// Codes outside 1..=255 (signal death, out of range) collapse to the
/// generic child failure code.
fn clamp_exit_code(code: i32) -> u8 {
    if (1..=255).contains(&code) {
        code as u8
    } else {
        exit_codes::CHILD_FAILURE
    }
}
