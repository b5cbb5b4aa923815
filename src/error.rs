//! Command exit codes.
//!
//! `ExitCode` is the result-code taxonomy shared by handlers and the
//! dispatcher. Codes are plain signed integers on the wire, so any value a
//! handler returns survives to the status line unchanged.

use core::fmt;

/// Result of a command dispatch.
///
/// Every code is non-fatal: the shell reports it and keeps accepting input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed (code 0)
    Success,

    /// Generic failure (code 1)
    Failure,

    /// Malformed input to a handler, or too many arguments (code -1)
    InvalidArguments,

    /// No table entry matches the first token (code -2)
    CommandNotFound,

    /// Recognized but unsupported feature (code -3)
    NotImplemented,

    /// Storage error reported by a handler (code -4)
    FilesystemError,

    /// Any other handler-defined code
    Other(i32),
}

impl ExitCode {
    /// Raw signed value as printed in status lines.
    pub const fn code(self) -> i32 {
        match self {
            ExitCode::Success => 0,
            ExitCode::Failure => 1,
            ExitCode::InvalidArguments => -1,
            ExitCode::CommandNotFound => -2,
            ExitCode::NotImplemented => -3,
            ExitCode::FilesystemError => -4,
            ExitCode::Other(code) => code,
        }
    }

    /// Map a raw value back to its named variant where one exists.
    pub const fn from_code(code: i32) -> Self {
        match code {
            0 => ExitCode::Success,
            1 => ExitCode::Failure,
            -1 => ExitCode::InvalidArguments,
            -2 => ExitCode::CommandNotFound,
            -3 => ExitCode::NotImplemented,
            -4 => ExitCode::FilesystemError,
            other => ExitCode::Other(other),
        }
    }

    /// True only for [`ExitCode::Success`] (or `Other(0)`).
    pub const fn is_success(self) -> bool {
        self.code() == 0
    }
}

impl From<i32> for ExitCode {
    fn from(code: i32) -> Self {
        ExitCode::from_code(code)
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.code()
    }
}

/// Human-readable description (not the wire status line, see `response`).
impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "success"),
            ExitCode::Failure => write!(f, "failure"),
            ExitCode::InvalidArguments => write!(f, "invalid argument"),
            ExitCode::CommandNotFound => write!(f, "command not found"),
            ExitCode::NotImplemented => write!(f, "feature not implemented"),
            ExitCode::FilesystemError => write!(f, "filesystem error"),
            ExitCode::Other(code) => write!(f, "exit code {}", code),
        }
    }
}
