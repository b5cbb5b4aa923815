//! # serial-cmd
//!
//! Byte-at-a-time line editor and command dispatcher for serial consoles.
//!
//! **Key features:**
//! - **Static allocation** - Fixed-capacity buffers sized by const generics, zero heap usage
//! - **Const initialization** - Command tables defined at compile time
//! - **Line editing** - Echo, backspace, bounded line with silent overflow
//! - **History** - Ring of submitted lines recalled with up/down arrows
//! - **Machine-readable status** - Every command ends in `+OK` or `-ERROR #<code>`
//! - **Flexible I/O** - Platform-agnostic byte I/O trait
//!
//! ```rust,ignore
//! use serial_cmd::{Command, DefaultShell, ExitCode, Invocation, Shell};
//! use core::fmt::Write;
//!
//! fn hello(inv: &mut Invocation<'_>) -> ExitCode {
//!     let _ = writeln!(inv, "hello");
//!     ExitCode::Success
//! }
//!
//! const COMMANDS: &[Command] = &[Command::new("hello", "hello - greet", hello)];
//!
//! let mut shell: DefaultShell<_, _> = Shell::new(COMMANDS, "> ", uart);
//! shell.activate()?;
//! loop {
//!     shell.poll()?;
//! }
//! ```
//!
//! ## Optional Features
//!
//! - `completion` (default) - Tab completion of command names
//! - `tracing` - Debug/trace events through the `tracing` facade
//!
//! This library is `no_std` compatible.

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

extern crate heapless;

// ============================================================================
// Module Declarations
// ============================================================================

// I/O & configuration
pub mod config;
pub mod io;

// Exit codes
pub mod error;

// Status line rendering
pub mod response;

// Command table
pub mod command;

// Line editor, history and dispatch
pub mod shell;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Core I/O
pub use io::{ByteIo, FmtWriter};

// Configuration
pub use config::{DefaultShell, MinimalShell};

// Exit codes
pub use error::ExitCode;

// Command types
pub use command::{Command, Handler, Invocation};

// Response types
pub use response::Status;

// Shell types
pub use shell::{HistoryDirection, Prompt, Session, Shell};

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
