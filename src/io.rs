//! Byte I/O abstraction for platform-agnostic input/output.
//!
//! The `ByteIo` trait provides non-blocking byte-level I/O that can be
//! implemented for any transport (UART, USB CDC, stdio in raw mode, etc.).
//! `FmtWriter` layers `core::fmt::Write` on top of it so the shell and command
//! handlers can use `write!` for formatted output.

use core::fmt;

/// Platform-agnostic byte I/O trait.
///
/// Implementations may buffer output internally and flush after
/// `process_byte()` returns, or write through immediately on bare metal.
/// `put_byte()` and `write_bytes()` MUST NOT block indefinitely.
pub trait ByteIo {
    /// Platform-specific error type
    type Error;

    /// Non-blocking byte read.
    ///
    /// Returns:
    /// - `Ok(Some(byte))` if a byte is available
    /// - `Ok(None)` if no byte is available
    /// - `Err(Self::Error)` on I/O error
    fn get_byte(&mut self) -> Result<Option<u8>, Self::Error>;

    /// Write a single byte to the output.
    fn put_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Write a byte slice to the output.
    ///
    /// Default implementation uses `put_byte()` repeatedly.
    /// Override for more efficient bulk writes if needed.
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        for &byte in bytes {
            self.put_byte(byte)?;
        }
        Ok(())
    }

    /// Write a string to the output.
    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.write_bytes(s.as_bytes())
    }
}

/// `core::fmt::Write` adapter over a [`ByteIo`].
///
/// `fmt::Write` can only report `fmt::Error`, so the first I/O error is kept
/// and handed back by [`finish`](Self::finish). Once an error is recorded all
/// further writes fail without touching the I/O.
pub struct FmtWriter<'a, IO: ByteIo> {
    io: &'a mut IO,
    error: Option<IO::Error>,
}

impl<'a, IO: ByteIo> FmtWriter<'a, IO> {
    /// Wrap an I/O for formatted writing.
    pub fn new(io: &'a mut IO) -> Self {
        Self { io, error: None }
    }

    /// Consume the writer, returning the first I/O error seen (if any).
    pub fn finish(self) -> Result<(), IO::Error> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl<IO: ByteIo> fmt::Write for FmtWriter<'_, IO> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.error.is_some() {
            return Err(fmt::Error);
        }
        self.io.write_str(s).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}

impl<IO: ByteIo> fmt::Debug for FmtWriter<'_, IO> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FmtWriter")
            .field("failed", &self.error.is_some())
            .finish_non_exhaustive()
    }
}
