//! Shared test helpers: platform-appropriate fake child specs.

use crate::console;
use crate::launcher::LaunchSpec;

/// Spec running `script` under the platform shell, with the UTF-8
/// environment pair applied like a real launch.
pub(crate) fn shell_spec(script: &str) -> LaunchSpec {
    #[cfg(windows)]
    {
        LaunchSpec {
            program: "cmd".to_string(),
            args: vec!["/C".to_string(), script.to_string()],
            env: console::utf8_child_env(),
        }
    }
    #[cfg(not(windows))]
    {
        LaunchSpec {
            program: "sh".to_string(),
            args: vec!["-c".to_string(), script.to_string()],
            env: console::utf8_child_env(),
        }
    }
}

/// Spec for a child that exits with the given code.
pub(crate) fn spec_exiting_with(code: i32) -> LaunchSpec {
    shell_spec(&format!("exit {}", code))
}

/// Spec for a child that exits 0 only when both UTF-8 environment
/// entries are present with their expected values.
pub(crate) fn spec_checking_utf8_env() -> LaunchSpec {
    #[cfg(windows)]
    {
        shell_spec(
            "if not \"%PYTHONUTF8%\"==\"1\" exit 9 & \
             if not \"%PYTHONIOENCODING%\"==\"utf-8\" exit 9 & exit 0",
        )
    }
    #[cfg(not(windows))]
    {
        shell_spec("test \"$PYTHONUTF8\" = 1 && test \"$PYTHONIOENCODING\" = utf-8")
    }
}

/// Spec whose program does not exist, to exercise spawn failure.
pub(crate) fn spec_missing_program() -> LaunchSpec {
    LaunchSpec {
        program: "pylaunch-no-such-program-xyz".to_string(),
        args: Vec::new(),
        env: Vec::new(),
    }
}
