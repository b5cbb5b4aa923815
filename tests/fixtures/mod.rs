//! Test fixtures and utilities for serial-cmd testing.
//!
//! Provides:
//! - `MockIo`: Test implementation of the ByteIo trait
//! - `TEST_COMMANDS`: Small command table covering every exit code
//! - `CountingPrompt`: Prompt that shows the history counter

#![allow(dead_code)]

use serial_cmd::shell::Session;
use serial_cmd::{ByteIo, Command, ExitCode, Invocation, Prompt};
use std::collections::VecDeque;
use std::fmt::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};

// ============================================================================
// MockIo - Test I/O Implementation
// ============================================================================

/// Mock I/O for testing.
///
/// Provides in-memory byte I/O with input queue and output capture.
/// Uses `std` types (VecDeque, Vec) since tests run with std support.
#[derive(Debug, Default)]
pub struct MockIo {
    /// Input queue (simulates user typing)
    input: VecDeque<u8>,

    /// Output capture (collects all output)
    output: Vec<u8>,
}

impl MockIo {
    /// Create new MockIo with empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create MockIo with pre-loaded input bytes.
    pub fn with_input(input: &[u8]) -> Self {
        Self {
            input: input.iter().copied().collect(),
            output: Vec::new(),
        }
    }

    /// Add input to queue (simulates user typing).
    pub fn push_input(&mut self, bytes: &[u8]) {
        self.input.extend(bytes.iter().copied());
    }

    /// Get captured output as string (lossy for non-UTF-8 echo).
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    /// Get captured output as bytes (useful for checking control bytes).
    pub fn output_bytes(&self) -> &[u8] {
        &self.output
    }

    /// Clear output buffer.
    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    /// Check if input queue is empty.
    pub fn input_empty(&self) -> bool {
        self.input.is_empty()
    }
}

impl ByteIo for MockIo {
    type Error = ();

    fn get_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        Ok(self.input.pop_front())
    }

    fn put_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.output.push(byte);
        Ok(())
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.output.extend_from_slice(bytes);
        Ok(())
    }
}

/// I/O whose output fails after a fixed number of bytes.
#[derive(Debug)]
pub struct FailingIo {
    /// Bytes accepted before failing
    pub budget: usize,

    /// Bytes written so far
    pub written: Vec<u8>,
}

impl FailingIo {
    /// I/O that accepts `budget` bytes.
    pub fn new(budget: usize) -> Self {
        Self {
            budget,
            written: Vec::new(),
        }
    }
}

impl ByteIo for FailingIo {
    type Error = &'static str;

    fn get_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        Ok(None)
    }

    fn put_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        if self.written.len() >= self.budget {
            return Err("link down");
        }
        self.written.push(byte);
        Ok(())
    }
}

// ============================================================================
// Prompts
// ============================================================================

/// Prompt showing how many lines have been submitted: `[3]> `.
#[derive(Debug, Clone, Copy)]
pub struct CountingPrompt;

impl Prompt for CountingPrompt {
    fn write_prompt<const LINE: usize, const HIST: usize>(
        &self,
        session: &Session<LINE, HIST>,
        out: &mut dyn fmt::Write,
    ) -> fmt::Result {
        write!(out, "[{}]> ", session.history().end())
    }
}

// ============================================================================
// TEST_COMMANDS - Command Table for Testing
// ============================================================================

/// Number of times any table handler named `help` ran (must stay 0).
pub static SHADOWED_HELP_CALLS: AtomicUsize = AtomicUsize::new(0);

/// echo: prints its arguments separated by spaces.
fn echo(inv: &mut Invocation<'_>) -> ExitCode {
    let args = inv.args();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            let _ = inv.write_char(' ');
        }
        let _ = inv.write_str(arg);
    }
    let _ = inv.write_char('\n');
    ExitCode::Success
}

/// args: prints argc and each argv entry in brackets.
fn args(inv: &mut Invocation<'_>) -> ExitCode {
    let argv = inv.argv();
    let _ = write!(inv, "argc={}", argv.len());
    for arg in argv {
        let _ = write!(inv, " [{}]", arg);
    }
    let _ = inv.write_char('\n');
    ExitCode::Success
}

/// get: prints the value following `-k`, if any.
fn get(inv: &mut Invocation<'_>) -> ExitCode {
    match inv.arg_value("-k") {
        Some(value) => {
            let _ = writeln!(inv, "k={}", value);
            ExitCode::Success
        }
        None => ExitCode::InvalidArguments,
    }
}

fn fail(_inv: &mut Invocation<'_>) -> ExitCode {
    ExitCode::Failure
}

fn notimpl(_inv: &mut Invocation<'_>) -> ExitCode {
    ExitCode::NotImplemented
}

fn fs(_inv: &mut Invocation<'_>) -> ExitCode {
    ExitCode::FilesystemError
}

fn raw(_inv: &mut Invocation<'_>) -> ExitCode {
    ExitCode::Other(42)
}

fn shadowed_help(_inv: &mut Invocation<'_>) -> ExitCode {
    SHADOWED_HELP_CALLS.fetch_add(1, Ordering::SeqCst);
    ExitCode::Failure
}

fn first_dup(inv: &mut Invocation<'_>) -> ExitCode {
    let _ = writeln!(inv, "first");
    ExitCode::Success
}

fn second_dup(inv: &mut Invocation<'_>) -> ExitCode {
    let _ = writeln!(inv, "second");
    ExitCode::Success
}

/// Help text for echo (exact text checked by tests).
pub const ECHO_HELP: &str = "echo [ARGS...] - print arguments";

/// Test command table.
///
/// Contains a `help` entry that the built-in listing shadows, and a duplicate
/// `dup` name where only the first entry is reachable.
pub const TEST_COMMANDS: &[Command] = &[
    Command::new("echo", ECHO_HELP, echo),
    Command::new("args", "args [ARGS...] - show argument vector", args),
    Command::new("get", "get -k <VALUE> - print the value of -k", get),
    Command::new("fail", "fail - always fails", fail),
    Command::new("notimpl", "notimpl - not implemented", notimpl),
    Command::new("fs", "fs - filesystem error", fs),
    Command::new("raw", "raw - returns code 42", raw),
    Command::new("help", "help - shadowed table entry", shadowed_help),
    Command::new("dup", "dup - first", first_dup),
    Command::new("dup", "dup - second", second_dup),
];
