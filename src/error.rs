//! Error types for the pylaunch binary.
//!
//! Uses thiserror for derive macros and provides user-actionable error
//! messages. Every variant maps to a distinct launcher exit code.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for launcher operations.
#[derive(Error, Debug)]
pub enum LaunchError {
    /// The launcher's own location (and therefore the application entry
    /// point) could not be resolved.
    #[error("{0}")]
    Resolve(String),

    /// The interpreter override was set but could not be parsed.
    #[error("{0}")]
    Config(String),

    /// The child process could not be started.
    #[error("{0}")]
    Spawn(String),
}

impl LaunchError {
    /// Returns the appropriate launcher exit code for this error type.
    pub fn exit_code(&self) -> u8 {
        match self {
            LaunchError::Resolve(_) => exit_codes::CONFIG_ERROR,
            LaunchError::Config(_) => exit_codes::CONFIG_ERROR,
            LaunchError::Spawn(_) => exit_codes::SPAWN_FAILURE,
        }
    }
}

/// Result type alias for launcher operations.
pub type Result<T> = std::result::Result<T, LaunchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_error_has_config_exit_code() {
        let err = LaunchError::Resolve("cannot locate launcher".to_string());
        assert_eq!(err.exit_code(), exit_codes::CONFIG_ERROR);
    }

    #[test]
    fn config_error_has_config_exit_code() {
        let err = LaunchError::Config("bad override".to_string());
        assert_eq!(err.exit_code(), exit_codes::CONFIG_ERROR);
    }

    #[test]
    fn spawn_error_has_spawn_exit_code() {
        let err = LaunchError::Spawn("python not found".to_string());
        assert_eq!(err.exit_code(), exit_codes::SPAWN_FAILURE);
    }

    #[test]
    fn error_messages_pass_through() {
        let err = LaunchError::Spawn("failed to start 'python'".to_string());
        assert_eq!(err.to_string(), "failed to start 'python'");
    }
}
