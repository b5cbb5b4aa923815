//! Shell orchestration and command processing.
//!
//! The `Shell` struct brings the line editor, history ring, escape decoder and
//! dispatcher together. Input arrives one byte at a time through
//! [`Shell::process_byte`] (or [`Shell::poll`]); all output goes through the
//! [`ByteIo`] the shell owns.

use crate::command::Command;
use crate::config::{DEFAULT_HISTORY_SIZE, DEFAULT_MAX_ARGS, DEFAULT_MAX_LINE_LEN};
use crate::error::ExitCode;
use crate::io::{ByteIo, FmtWriter};
use crate::response::{CLEAR_LINE, Status};
use core::fmt::{self, Write};

// Sub-modules
pub mod decoder;
pub mod dispatch;
pub mod history;
pub mod line;
pub mod tokenizer;

// Re-export key types
pub use decoder::{InputDecoder, InputEvent, InputMode};
pub use dispatch::dispatch;
pub use history::{HistoryRing, Recall};
pub use line::LineBuffer;
pub use tokenizer::{TokenizeError, tokenize};

/// Maximum completion candidates listed on a double match.
#[cfg(feature = "completion")]
const MAX_COMPLETIONS: usize = 16;

/// History navigation direction.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HistoryDirection {
    /// Up arrow key (navigate to older command)
    Previous = 0,

    /// Down arrow key (navigate to newer command or the live line)
    Next = 1,
}

/// Prompt renderer.
///
/// Called whenever the shell needs a fresh prompt: on activation, after every
/// submitted line and when a recalled line is redrawn. The session is passed
/// in so prompts can show state such as the history counter.
pub trait Prompt {
    /// Write the prompt text.
    fn write_prompt<const LINE: usize, const HIST: usize>(
        &self,
        session: &Session<LINE, HIST>,
        out: &mut dyn fmt::Write,
    ) -> fmt::Result;
}

impl Prompt for &str {
    fn write_prompt<const LINE: usize, const HIST: usize>(
        &self,
        _session: &Session<LINE, HIST>,
        out: &mut dyn fmt::Write,
    ) -> fmt::Result {
        out.write_str(self)
    }
}

/// Per-console editing state: the line being typed, history and decoder.
///
/// Owned by exactly one [`Shell`]; two shells never share a session.
#[derive(Debug, Clone, Default)]
pub struct Session<const LINE: usize, const HIST: usize> {
    line: LineBuffer<LINE>,
    history: HistoryRing<LINE, HIST>,
    decoder: InputDecoder,
}

impl<const LINE: usize, const HIST: usize> Session<LINE, HIST> {
    /// Fresh session: empty line, empty history, decoder in Normal mode.
    pub const fn new() -> Self {
        Self {
            line: LineBuffer::new(),
            history: HistoryRing::new(),
            decoder: InputDecoder::new(),
        }
    }

    /// The line being edited.
    pub fn line(&self) -> &LineBuffer<LINE> {
        &self.line
    }

    /// Submitted lines.
    pub fn history(&self) -> &HistoryRing<LINE, HIST> {
        &self.history
    }

    /// Escape decoder state.
    pub fn mode(&self) -> InputMode {
        self.decoder.mode()
    }
}

/// Interactive command shell over a byte stream.
///
/// Generic over:
/// - `'t`: Lifetime of the command table (typically `'static`)
/// - `IO`: [`ByteIo`] implementation
/// - `P`: [`Prompt`] implementation
/// - `LINE`: line buffer capacity (holds `LINE - 2` bytes)
/// - `HIST`: history ring slots (`HIST - 1` lines recallable)
/// - `ARGS`: maximum tokens per line
///
/// See [`DefaultShell`](crate::config::DefaultShell) and
/// [`MinimalShell`](crate::config::MinimalShell) for ready-made sizes.
///
/// A shell is an unsynchronized, single-owner structure: it does no locking,
/// and all calls into one shell (including from interrupt handlers) must be
/// serialized by the host.
pub struct Shell<
    't,
    IO,
    P,
    const LINE: usize = DEFAULT_MAX_LINE_LEN,
    const HIST: usize = DEFAULT_HISTORY_SIZE,
    const ARGS: usize = DEFAULT_MAX_ARGS,
> where
    IO: ByteIo,
    P: Prompt,
{
    /// Command table, searched in order
    commands: &'t [Command],

    /// Line, history and decoder state
    session: Session<LINE, HIST>,

    /// Prompt renderer
    prompt: P,

    /// I/O interface
    io: IO,
}

// ============================================================================
// Debug implementation
// ============================================================================

impl<IO, P, const LINE: usize, const HIST: usize, const ARGS: usize> fmt::Debug
    for Shell<'_, IO, P, LINE, HIST, ARGS>
where
    IO: ByteIo,
    P: Prompt,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shell")
            .field("commands", &self.commands.len())
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl<'t, IO, P, const LINE: usize, const HIST: usize, const ARGS: usize>
    Shell<'t, IO, P, LINE, HIST, ARGS>
where
    IO: ByteIo,
    P: Prompt,
{
    /// Create new Shell.
    ///
    /// Nothing is written until [`activate()`](Self::activate) is called.
    pub fn new(commands: &'t [Command], prompt: P, io: IO) -> Self {
        Self {
            commands,
            session: Session::new(),
            prompt,
            io,
        }
    }

    /// Write the initial prompt.
    pub fn activate(&mut self) -> Result<(), IO::Error> {
        #[cfg(feature = "tracing")]
        tracing::debug!(commands = self.commands.len(), "shell activated");

        self.write_prompt()
    }

    /// Process a single byte of input.
    ///
    /// Main entry point for byte-by-byte processing. Returns `Err` only on
    /// I/O error; every input byte is otherwise accepted.
    pub fn process_byte(&mut self, byte: u8) -> Result<(), IO::Error> {
        match self.session.decoder.decode(byte) {
            InputEvent::None => Ok(()),

            InputEvent::Byte(b) => self.handle_byte(b),

            InputEvent::Backspace(b) => self.handle_backspace(b),

            InputEvent::Enter => self.handle_enter(),

            InputEvent::Tab => self.handle_tab(),

            InputEvent::UpArrow => self.handle_history(HistoryDirection::Previous),

            InputEvent::DownArrow => self.handle_history(HistoryDirection::Next),
        }
    }

    /// Poll for one incoming byte and process it.
    ///
    /// Convenience for simple polling loops. Interrupt, DMA or RTOS driven
    /// systems should read bytes themselves and call
    /// [`process_byte()`](Self::process_byte).
    pub fn poll(&mut self) -> Result<(), IO::Error> {
        if let Some(byte) = self.io.get_byte()? {
            self.process_byte(byte)?;
        }
        Ok(())
    }

    /// Editing state.
    pub fn session(&self) -> &Session<LINE, HIST> {
        &self.session
    }

    /// Reference to the I/O interface.
    pub fn io(&self) -> &IO {
        &self.io
    }

    /// Mutable reference to the I/O interface.
    pub fn io_mut(&mut self) -> &mut IO {
        &mut self.io
    }

    /// Consume the shell, returning its I/O.
    pub fn into_io(self) -> IO {
        self.io
    }

    // ========================================
    // Event handlers
    // ========================================

    fn handle_byte(&mut self, byte: u8) -> Result<(), IO::Error> {
        if self.session.line.push(byte) {
            self.io.put_byte(byte)
        } else {
            // Line full: byte dropped, nothing echoed
            #[cfg(feature = "tracing")]
            tracing::trace!(byte, "line full, byte dropped");
            Ok(())
        }
    }

    fn handle_backspace(&mut self, byte: u8) -> Result<(), IO::Error> {
        if self.session.line.pop().is_some() {
            self.io.put_byte(byte)?;
        }
        Ok(())
    }

    fn handle_enter(&mut self) -> Result<(), IO::Error> {
        self.io.write_str("\n")?;

        // Every Enter returns to the live end; empty lines are not stored
        self.session.history.reset_position();
        let submitted = !self.session.line.is_empty();
        if self.session.history.push(self.session.line.as_bytes()) {
            #[cfg(feature = "tracing")]
            tracing::debug!(end = self.session.history.end(), "line stored");
        }

        let result = if submitted {
            self.dispatch_line().map(|_| ())
        } else {
            Ok(())
        };

        self.session.line.clear();
        result?;
        self.write_prompt()
    }

    /// Tokenize and dispatch the current line.
    ///
    /// Bytes that are not valid UTF-8 reach handlers as `?`; the stored
    /// history line keeps the raw bytes.
    fn dispatch_line(&mut self) -> Result<ExitCode, IO::Error> {
        let mut out = FmtWriter::new(&mut self.io);

        let code = match tokenize::<ARGS>(self.session.line.to_str_lossy()) {
            Ok(argv) => dispatch(self.commands, &argv, &mut out),
            Err(_too_many) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %_too_many, "line rejected");
                reject(&mut out)
            }
        };

        out.finish()?;
        Ok(code)
    }

    fn handle_history(&mut self, direction: HistoryDirection) -> Result<(), IO::Error> {
        let session = &mut self.session;

        let recalled = match direction {
            HistoryDirection::Previous => session.history.previous().map(Recall::Entry),
            HistoryDirection::Next => session.history.next(),
        };

        match recalled {
            Some(Recall::Entry(entry)) => session.line.set(entry),
            Some(Recall::Live) => session.line.clear(),
            // Nothing to move to: no output at all
            None => return Ok(()),
        }

        self.redraw_line()
    }

    #[cfg(not(feature = "completion"))]
    fn handle_tab(&mut self) -> Result<(), IO::Error> {
        Ok(())
    }

    /// Complete the command name being typed.
    ///
    /// Only the first token is completed; with a space already on the line
    /// Tab does nothing. One match completes the name plus a space, several
    /// matches extend to their common prefix or, if that adds nothing, are
    /// listed below the line. No match rings the bell.
    #[cfg(feature = "completion")]
    fn handle_tab(&mut self) -> Result<(), IO::Error> {
        use crate::command::completion;
        use crate::response::BELL;

        let line = &self.session.line;
        if line.as_bytes().contains(&b' ') {
            return Ok(());
        }
        let Ok(prefix) = line.as_str() else {
            return self.io.put_byte(BELL);
        };

        let typed = prefix.len();
        let completion = completion::suggest::<MAX_COMPLETIONS>(self.commands, prefix);

        if completion.is_empty() {
            return self.io.put_byte(BELL);
        }

        let tail = completion.common.get(typed..).unwrap_or("");

        if completion.is_unique() {
            if self.insert_bytes(tail.as_bytes())? {
                self.insert_bytes(b" ")?;
            }
        } else if !tail.is_empty() {
            self.insert_bytes(tail.as_bytes())?;
        } else {
            self.io.write_str("\n")?;
            for name in completion.matches.iter() {
                self.io.write_str(name)?;
                self.io.write_str("  ")?;
            }
            self.io.write_str("\n")?;
            self.write_prompt()?;
            self.io.write_bytes(self.session.line.as_bytes())?;
        }

        Ok(())
    }

    /// Append and echo bytes; rings the bell and stops at a full line.
    #[cfg(feature = "completion")]
    fn insert_bytes(&mut self, bytes: &[u8]) -> Result<bool, IO::Error> {
        for &byte in bytes {
            if !self.session.line.push(byte) {
                self.io.put_byte(crate::response::BELL)?;
                return Ok(false);
            }
            self.io.put_byte(byte)?;
        }
        Ok(true)
    }

    // ========================================
    // Output helpers
    // ========================================

    fn write_prompt(&mut self) -> Result<(), IO::Error> {
        let mut out = FmtWriter::new(&mut self.io);
        // A prompt that fails on its own (not via I/O) just stays short
        let _ = self.prompt.write_prompt(&self.session, &mut out);
        out.finish()
    }

    /// Clear the terminal line and redraw prompt plus buffer.
    fn redraw_line(&mut self) -> Result<(), IO::Error> {
        self.io.write_str(CLEAR_LINE)?;
        self.write_prompt()?;
        self.io.write_bytes(self.session.line.as_bytes())
    }
}

/// Status line for a line that could not be tokenized.
fn reject(out: &mut dyn fmt::Write) -> ExitCode {
    let code = ExitCode::InvalidArguments;
    let _ = write!(out, "{}", Status::new(code, ""));
    code
}

// ============================================================================
// Tests
// ============================================================================
