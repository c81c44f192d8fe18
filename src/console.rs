//! Console environment preparation for pylaunch.
//!
//! Provides the UTF-8 environment pair applied to the child interpreter,
//! the best-effort console code page switch, and the Enter-to-exit pause
//! that keeps error output visible before the window closes.

use std::io::{BufRead, Write};

/// Enables the Python interpreter's UTF-8 mode in the child.
pub const PYTHON_UTF8_MODE: (&str, &str) = ("PYTHONUTF8", "1");

/// Forces UTF-8 for the child's standard streams.
pub const PYTHON_IO_ENCODING: (&str, &str) = ("PYTHONIOENCODING", "utf-8");

/// Environment entries applied to the child process only.
///
/// The parent process environment is never mutated; callers pass these
/// to the process builder so the change stays scoped to the child.
pub fn utf8_child_env() -> Vec<(String, String)> {
    [PYTHON_UTF8_MODE, PYTHON_IO_ENCODING]
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// Switch the active console's output code page to UTF-8.
///
/// Best effort: a console that rejects the change is left as-is and the
/// launch continues. No-op outside Windows, where terminals already
/// speak UTF-8.
pub fn enable_utf8_output() {
    #[cfg(windows)]
    {
        use std::process::{Command, Stdio};

        // chcp changes a property of the console itself, so running it
        // as a child affects the window the launcher lives in.
        let _ = Command::new("cmd")
            .args(["/C", "chcp", "65001"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
    }
}

/// Block until the user presses Enter so the last message stays visible.
///
/// Read and write failures are ignored: a closed or non-interactive
/// stream must not turn the pause into a crash.
pub fn wait_for_enter(input: &mut impl BufRead, output: &mut impl Write) {
    let _ = write!(output, "Press Enter to exit...");
    let _ = output.flush();

    let mut line = String::new();
    let _ = input.read_line(&mut line);
}
