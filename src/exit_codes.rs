//! Exit code constants for the mcmod dispatcher.
//!
//! The dispatcher owns only a handful of codes; every other exit status is
//! the subcommand's own code, propagated unchanged:
//! - 0: Success
//! - 1: User error (unknown subcommand, missing argument, bad configuration)
//! - 2: The subcommand process could not be started

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: unknown subcommand, missing argument, or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// Launch failure: the interpreter could not be spawned.
pub const LAUNCH_FAILURE: i32 = 2;

/// Base added to a signal number when a child is killed by a signal.
pub const SIGNAL_BASE: i32 = 128;
