//! Exit code constants for the pylaunch binary.
//!
//! The child's own exit code is propagated when it fits in 1..=255;
//! these constants cover the launcher's remaining outcomes:
//! - 0: Success (child exited 0)
//! - 1: Child failed with a code that cannot be represented
//! - 2: Child process could not be started
//! - 3: Launcher configuration error

/// Successful execution: the child exited with code 0.
pub const SUCCESS: u8 = 0;

/// The child failed but its code cannot be represented as a u8
/// (killed by a signal, or a code outside 1..=255).
pub const CHILD_FAILURE: u8 = 1;

/// The child process could not be started (interpreter missing,
/// target not executable).
pub const SPAWN_FAILURE: u8 = 2;

/// Launcher configuration error: unresolvable launcher location or a
/// malformed interpreter override.
pub const CONFIG_ERROR: u8 = 3;

/// Sentinel for a child that exited without a code (signal death).
pub const NO_EXIT_CODE: i32 = -1;
