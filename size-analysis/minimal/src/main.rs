#![no_std]
#![no_main]

use core::fmt::Write;
use panic_halt as _;
use serial_cmd::{ByteIo, Command, ExitCode, Invocation, MinimalShell, Shell};

// Minimal ByteIo implementation - measures only struct size
pub struct MinimalIo;

impl ByteIo for MinimalIo {
    type Error = ();

    fn get_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        Ok(None)
    }

    fn put_byte(&mut self, _byte: u8) -> Result<(), Self::Error> {
        Ok(())
    }
}

// Command implementations
fn status_cmd(inv: &mut Invocation<'_>) -> ExitCode {
    let _ = writeln!(inv, "OK");
    ExitCode::Success
}

fn led_cmd(inv: &mut Invocation<'_>) -> ExitCode {
    match inv.arg(1) {
        Some("on") | Some("off") => ExitCode::Success,
        _ => ExitCode::InvalidArguments,
    }
}

const COMMANDS: &[Command] = &[
    Command::new("status", "status - show status", status_cmd),
    Command::new("led", "led <on|off> - switch the LED", led_cmd),
];

// Entry point
#[cortex_m_rt::entry]
fn main() -> ! {
    let mut shell: MinimalShell<'static, MinimalIo, &'static str> =
        Shell::new(COMMANDS, "> ", MinimalIo);

    // Activate shell to ensure all code paths are included
    // Use black_box to prevent optimizer from removing the code
    let _ = core::hint::black_box(shell.activate());

    // Submit one line so editing and dispatch are both linked in
    for &b in b"led on\n\x1b[A\t" {
        let _ = core::hint::black_box(shell.process_byte(b));
    }

    // Keep shell alive to prevent optimization
    loop {
        core::hint::black_box(&shell);
        cortex_m::asm::nop();
    }
}

// Required: exception handler
#[cortex_m_rt::exception]
unsafe fn HardFault(_ef: &cortex_m_rt::ExceptionFrame) -> ! {
    loop {
        cortex_m::asm::nop();
    }
}
