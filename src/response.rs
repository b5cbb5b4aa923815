//! Status line rendering.
//!
//! Every dispatch ends with exactly one status line: `+OK` on success,
//! `-ERROR #<code>` otherwise, with a message suffix for the codes that have
//! one. Host tooling parses these lines, so the text is fixed.

use crate::error::ExitCode;
use core::fmt;

/// Header line of the built-in command listing.
pub const HELP_HEADER: &str = "Available commands:\n";

/// Erase the whole current line and return the cursor to column 0.
pub const CLEAR_LINE: &str = "\x1b[2K\r";

/// Terminal bell, emitted when completion has nothing to offer.
pub const BELL: u8 = 0x07;

/// Status line for one dispatch result.
///
/// `Display` renders the complete line including the trailing `\n`:
/// - `+OK`
/// - `-ERROR #-1: invalid argument`
/// - `-ERROR #-2: command <name> not found`
/// - `-ERROR #-3: feature not implemented`
/// - `-ERROR #<code>` for everything else
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Status<'a> {
    /// Dispatch result
    pub code: ExitCode,

    /// First token of the submitted line (used by the not-found message)
    pub command: &'a str,
}

impl<'a> Status<'a> {
    /// Create status for a dispatch of `command` that ended with `code`.
    pub fn new(code: ExitCode, command: &'a str) -> Self {
        Self { code, command }
    }
}

impl fmt::Display for Status<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = self.code.code();
        match ExitCode::from_code(raw) {
            ExitCode::Success => f.write_str("+OK\n"),
            ExitCode::InvalidArguments => writeln!(f, "-ERROR #{}: invalid argument", raw),
            ExitCode::CommandNotFound => {
                writeln!(f, "-ERROR #{}: command {} not found", raw, self.command)
            }
            ExitCode::NotImplemented => writeln!(f, "-ERROR #{}: feature not implemented", raw),
            _ => writeln!(f, "-ERROR #{}", raw),
        }
    }
}
