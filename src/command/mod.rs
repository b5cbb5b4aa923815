//! Command descriptors and handler invocation.
//!
//! A command table is a plain slice of [`Command`] descriptors, each pairing a
//! name and help text with a handler function. Tables are const-initializable
//! and live in ROM:
//!
//! ```rust,ignore
//! fn led(inv: &mut Invocation<'_>) -> ExitCode {
//!     match inv.arg(1) {
//!         Some("on") | Some("off") => ExitCode::Success,
//!         _ => ExitCode::InvalidArguments,
//!     }
//! }
//!
//! const COMMANDS: &[Command] = &[
//!     Command::new("led", "led <on|off> - switch the status LED", led),
//! ];
//! ```

use crate::error::ExitCode;
use core::fmt;

#[cfg(feature = "completion")]
pub mod completion;

/// First tokens that always run the built-in command listing.
///
/// Checked before the command table, so table entries with these names are
/// unreachable.
pub const BUILTIN_HELP: [&str; 2] = ["help", "?"];

/// Tokens that, anywhere on the line, print the command's help text instead
/// of running it.
pub const HELP_FLAGS: [&str; 3] = ["-h", "--help", "help"];

/// Command handler function.
///
/// Receives the invocation (arguments and output) and returns the exit code
/// that becomes the status line.
pub type Handler = fn(&mut Invocation<'_>) -> ExitCode;

/// Command descriptor (const-initializable).
#[derive(Clone, Copy)]
pub struct Command {
    /// Name as typed on the command line
    pub name: &'static str,

    /// Help text printed for `<name> -h`
    pub help: &'static str,

    /// Function run when the command is invoked
    pub handler: Handler,
}

impl Command {
    /// Create a command descriptor.
    pub const fn new(name: &'static str, help: &'static str, handler: Handler) -> Self {
        Self {
            name,
            help,
            handler,
        }
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("help", &self.help)
            .finish_non_exhaustive()
    }
}

/// Find the first table entry named `name` (exact, case-sensitive).
pub fn find<'t>(table: &'t [Command], name: &str) -> Option<&'t Command> {
    table.iter().find(|cmd| cmd.name == name)
}

/// Check whether any token in `argv` equals `arg`.
pub fn has_arg(argv: &[&str], arg: &str) -> bool {
    argv.iter().any(|a| *a == arg)
}

/// Value following the first occurrence of `arg` in `argv`.
///
/// A trailing `arg` with nothing after it has no value.
pub fn arg_value<'a>(argv: &[&'a str], arg: &str) -> Option<&'a str> {
    argv.windows(2).find(|pair| pair[0] == arg).map(|pair| pair[1])
}

/// Context handed to a command handler.
///
/// Gives access to the tokenized line (`argv[0]` is the command name), the
/// resolved descriptor, and the shell output. Implements `core::fmt::Write`,
/// so handlers print with `write!`/`writeln!`.
pub struct Invocation<'a> {
    command: &'a Command,
    argv: &'a [&'a str],
    out: &'a mut dyn fmt::Write,
}

impl<'a> Invocation<'a> {
    /// Create an invocation of `command` with tokens `argv`.
    pub fn new(command: &'a Command, argv: &'a [&'a str], out: &'a mut dyn fmt::Write) -> Self {
        Self { command, argv, out }
    }

    /// Descriptor of the running command.
    pub fn command(&self) -> &'a Command {
        self.command
    }

    /// All tokens, command name first.
    pub fn argv(&self) -> &'a [&'a str] {
        self.argv
    }

    /// Number of tokens, command name included.
    pub fn argc(&self) -> usize {
        self.argv.len()
    }

    /// Tokens after the command name.
    pub fn args(&self) -> &'a [&'a str] {
        self.argv.get(1..).unwrap_or(&[])
    }

    /// Token at `index` (0 is the command name).
    pub fn arg(&self, index: usize) -> Option<&'a str> {
        self.argv.get(index).copied()
    }

    /// Check whether any token equals `arg`.
    pub fn has_arg(&self, arg: &str) -> bool {
        has_arg(self.argv, arg)
    }

    /// Token following the first occurrence of `arg`, e.g. `-n 5` → `"5"`.
    pub fn arg_value(&self, arg: &str) -> Option<&'a str> {
        arg_value(self.argv, arg)
    }
}

impl fmt::Write for Invocation<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.out.write_str(s)
    }
}

impl fmt::Debug for Invocation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invocation")
            .field("command", &self.command.name)
            .field("argv", &self.argv)
            .finish_non_exhaustive()
    }
}
