//! Compile-time capacity configuration.
//!
//! Buffer sizes are const generic parameters on [`Shell`](crate::Shell) and
//! [`Session`](crate::shell::Session). The constants here are their defaults,
//! plus a reduced profile for memory-limited devices.

use crate::shell::Shell;

/// Default maximum line length, including two reserved bytes (default: 128).
///
/// A line holds at most `DEFAULT_MAX_LINE_LEN - 2` typed bytes.
pub const DEFAULT_MAX_LINE_LEN: usize = 128;

/// Default maximum number of tokens per line, command name included (default: 10).
pub const DEFAULT_MAX_ARGS: usize = 10;

/// Default history ring slots (default: 10; one fewer lines are recallable).
pub const DEFAULT_HISTORY_SIZE: usize = 10;

/// Maximum line length for the minimal profile.
pub const MINIMAL_MAX_LINE_LEN: usize = 64;

/// Maximum tokens per line for the minimal profile.
pub const MINIMAL_MAX_ARGS: usize = 8;

/// History size for the minimal profile.
pub const MINIMAL_HISTORY_SIZE: usize = 5;

/// Shell with the default capacities:
/// - line: 128 bytes (126 usable)
/// - arguments: 10
/// - history: 10 slots (9 recallable lines)
pub type DefaultShell<'t, IO, P> =
    Shell<'t, IO, P, DEFAULT_MAX_LINE_LEN, DEFAULT_HISTORY_SIZE, DEFAULT_MAX_ARGS>;

/// Shell for resource-constrained systems:
/// - line: 64 bytes (62 usable)
/// - arguments: 8
/// - history: 5 slots (4 recallable lines)
pub type MinimalShell<'t, IO, P> =
    Shell<'t, IO, P, MINIMAL_MAX_LINE_LEN, MINIMAL_HISTORY_SIZE, MINIMAL_MAX_ARGS>;
