//! Native demo: serial-cmd on a terminal instead of a UART.
//!
//! Puts the terminal in raw mode so every key press reaches the shell as a
//! byte, exactly as a serial line with echo disabled would deliver it.
//!
//! ```bash
//! cargo run                          # from demos/native
//! RUST_LOG=debug cargo run           # dispatch events go to serial-cmd-demo.log
//! ```
//!
//! Type `help` for the command list, `quit` or Ctrl+D to exit.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use serial_cmd::shell::Session;
use serial_cmd::{ByteIo, Command, DefaultShell, ExitCode, Invocation, Prompt, Shell};
use std::cell::Cell;
use std::fmt::{self, Write as _};
use std::io::{self, Read, Write};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

// =============================================================================
// Terminal Raw Mode Guard
// =============================================================================

/// RAII guard that enables raw terminal mode on creation and restores on drop.
///
/// Raw mode provides:
/// - No local echo (the shell echoes)
/// - No line buffering (bytes arrive immediately)
/// - No special key processing (Tab, arrows, backspace reach the shell)
struct RawModeGuard;

impl RawModeGuard {
    fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

// =============================================================================
// I/O Implementation
// =============================================================================

/// Blocking stdin/stdout byte I/O.
///
/// Raw mode leaves output post-processing off, so `\n` is expanded to `\r\n`
/// here the way a serial terminal set to "implicit CR" would.
struct StdioByteIo {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl StdioByteIo {
    fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl ByteIo for StdioByteIo {
    type Error = io::Error;

    fn get_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        let mut buf = [0u8; 1];
        match self.stdin.lock().read(&mut buf) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(buf[0])),
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn put_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.write_bytes(&[byte])
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        let mut out = self.stdout.lock();
        for chunk in bytes.split_inclusive(|&b| b == b'\n') {
            match chunk.split_last() {
                Some((b'\n', body)) => {
                    out.write_all(body)?;
                    out.write_all(b"\r\n")?;
                }
                _ => out.write_all(chunk)?,
            }
        }
        out.flush()
    }
}

// =============================================================================
// Prompt
// =============================================================================

/// `serial-cmd[<n>]> ` where `<n>` counts submitted lines.
struct CounterPrompt;

impl Prompt for CounterPrompt {
    fn write_prompt<const LINE: usize, const HIST: usize>(
        &self,
        session: &Session<LINE, HIST>,
        out: &mut dyn fmt::Write,
    ) -> fmt::Result {
        write!(out, "serial-cmd[{}]> ", session.history().end())
    }
}

// =============================================================================
// Commands
// =============================================================================

thread_local! {
    static STARTED: Cell<Option<Instant>> = const { Cell::new(None) };
    static QUIT: Cell<bool> = const { Cell::new(false) };
    static LED: Cell<bool> = const { Cell::new(false) };
}

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

fn uptime(inv: &mut Invocation<'_>) -> ExitCode {
    let secs = STARTED.with(|s| s.get().map(|t| t.elapsed().as_secs()).unwrap_or(0));
    let _ = writeln!(inv, "up {}h {}m {}s", secs / 3600, secs / 60 % 60, secs % 60);
    ExitCode::Success
}

fn led(inv: &mut Invocation<'_>) -> ExitCode {
    let state = match inv.arg(1) {
        Some("on") => true,
        Some("off") => false,
        None => {
            let _ = writeln!(inv, "led is {}", if LED.with(Cell::get) { "on" } else { "off" });
            return ExitCode::Success;
        }
        Some(_) => return ExitCode::InvalidArguments,
    };
    LED.with(|l| l.set(state));
    ExitCode::Success
}

fn add(inv: &mut Invocation<'_>) -> ExitCode {
    let mut sum: i64 = 0;
    for arg in inv.args() {
        match arg.parse::<i64>() {
            Ok(n) => sum = sum.saturating_add(n),
            Err(_) => return ExitCode::InvalidArguments,
        }
    }
    let _ = writeln!(inv, "{}", sum);
    ExitCode::Success
}

fn mount(_inv: &mut Invocation<'_>) -> ExitCode {
    ExitCode::FilesystemError
}

fn update(_inv: &mut Invocation<'_>) -> ExitCode {
    ExitCode::NotImplemented
}

fn quit(inv: &mut Invocation<'_>) -> ExitCode {
    let _ = writeln!(inv, "bye");
    QUIT.with(|q| q.set(true));
    ExitCode::Success
}

const COMMANDS: &[Command] = &[
    Command::new("echo", "echo [ARGS...] - print the arguments", echo),
    Command::new("uptime", "uptime - time since start", uptime),
    Command::new("led", "led [on|off] - show or switch the virtual LED", led),
    Command::new("add", "add <N>... - sum integers", add),
    Command::new("mount", "mount - always fails with a filesystem error", mount),
    Command::new("update", "update - not implemented", update),
    Command::new("quit", "quit - leave the demo", quit),
];

// =============================================================================
// Main
// =============================================================================

/// Route `tracing` output to a log file; the terminal belongs to the shell.
fn init_logging() {
    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("serial-cmd-demo.log")
    else {
        return;
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    STARTED.with(|s| s.set(Some(Instant::now())));

    println!("serial-cmd {} native demo", serial_cmd::VERSION);
    println!("Type 'help' for commands, 'quit' or Ctrl+D to exit.\n");

    let _raw = RawModeGuard::new()?;
    info!("demo started");

    let mut shell: DefaultShell<'static, StdioByteIo, CounterPrompt> =
        Shell::new(COMMANDS, CounterPrompt, StdioByteIo::new());
    shell.activate()?;

    loop {
        match shell.io_mut().get_byte()? {
            // EOF, or Ctrl+D / Ctrl+C (raw mode delivers them as bytes)
            None | Some(0x04) | Some(0x03) => break,
            Some(byte) => shell.process_byte(byte)?,
        }
        if QUIT.with(Cell::get) {
            break;
        }
    }

    info!("demo finished");
    shell.io_mut().write_str("\n")?;
    Ok(())
}
