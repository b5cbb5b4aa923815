//! Command dispatch.
//!
//! Resolves the first token of a tokenized line against the built-in help and
//! the command table, runs the handler, and writes the status line.

use crate::command::{self, BUILTIN_HELP, Command, HELP_FLAGS, Invocation};
use crate::error::ExitCode;
use crate::response::{HELP_HEADER, Status};
use core::fmt::{self, Write};

/// Dispatch one tokenized line and write its status line.
///
/// Resolution order:
/// 1. `help` / `?` as the first token → built-in command listing
/// 2. first table entry with an exactly matching name, else `CommandNotFound`
/// 3. `-h`, `--help` or `help` anywhere on the line → the entry's help text
/// 4. otherwise the entry's handler, whose code is the result
///
/// An empty `argv` (a line of only spaces) resolves to `CommandNotFound`.
/// Output errors are ignored here; the caller's writer keeps track of them.
pub fn dispatch(commands: &[Command], argv: &[&str], out: &mut dyn fmt::Write) -> ExitCode {
    let name = argv.first().copied().unwrap_or("");
    let code = execute(commands, argv, out);

    #[cfg(feature = "tracing")]
    tracing::debug!(command = name, code = code.code(), "dispatched");

    let _ = write!(out, "{}", Status::new(code, name));
    code
}

fn execute(commands: &[Command], argv: &[&str], out: &mut dyn fmt::Write) -> ExitCode {
    let Some(&name) = argv.first() else {
        return ExitCode::CommandNotFound;
    };

    if BUILTIN_HELP.contains(&name) {
        let _ = list_commands(commands, out);
        return ExitCode::Success;
    }

    let Some(cmd) = command::find(commands, name) else {
        return ExitCode::CommandNotFound;
    };

    if HELP_FLAGS.iter().any(|flag| command::has_arg(argv, flag)) {
        let _ = writeln!(out, "{}", cmd.help);
        return ExitCode::Success;
    }

    let mut invocation = Invocation::new(cmd, argv, out);
    (cmd.handler)(&mut invocation)
}

/// Built-in listing: header, then one table name per line.
fn list_commands(commands: &[Command], out: &mut dyn fmt::Write) -> fmt::Result {
    out.write_str(HELP_HEADER)?;
    for cmd in commands {
        writeln!(out, "{}", cmd.name)?;
    }
    Ok(())
}
