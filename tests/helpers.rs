//! Shared test helpers to reduce duplication across integration tests.

#![allow(dead_code)]

#[allow(clippy::duplicate_mod)]
#[path = "fixtures/mod.rs"]
mod fixtures;

pub use fixtures::*;

use serial_cmd::{DefaultShell, Shell};

/// Shell type used by most tests.
pub type TestShell = DefaultShell<'static, MockIo, &'static str>;

/// Prompt used by [`create_test_shell`].
pub const PROMPT: &str = "> ";

/// Up arrow escape sequence.
pub const UP: &[u8] = b"\x1b[A";

/// Down arrow escape sequence.
pub const DOWN: &[u8] = b"\x1b[B";

/// Clear-line sequence emitted before a recalled line.
pub const CLEAR: &str = "\x1b[2K\r";

// ============================================================================
// Shell Creation Helpers
// ============================================================================

/// Create an activated shell over `TEST_COMMANDS`, output cleared.
pub fn create_test_shell() -> TestShell {
    let mut shell = Shell::new(TEST_COMMANDS, PROMPT, MockIo::new());
    shell.activate().unwrap();
    shell.io_mut().clear_output();
    shell
}

// ============================================================================
// Input Helpers
// ============================================================================

/// Feed raw bytes to any shell over `MockIo`.
pub fn feed<P, const L: usize, const H: usize, const A: usize>(
    shell: &mut Shell<'static, MockIo, P, L, H, A>,
    bytes: &[u8],
) where
    P: serial_cmd::Prompt,
{
    for &b in bytes {
        shell.process_byte(b).unwrap();
    }
}

/// Type input without executing (no trailing newline).
pub fn type_input(shell: &mut TestShell, input: &str) {
    feed(shell, input.as_bytes());
}

/// Execute a command string and return only the output it produced.
pub fn execute_command(shell: &mut TestShell, cmd: &str) -> String {
    shell.io_mut().clear_output();
    type_input(shell, cmd);
    if !cmd.ends_with('\n') {
        press_enter(shell);
    }
    shell.io().output()
}

/// Submit the current line.
pub fn press_enter(shell: &mut TestShell) {
    feed(shell, b"\n");
}

/// Press the up arrow.
pub fn press_up(shell: &mut TestShell) {
    feed(shell, UP);
}

/// Press the down arrow.
pub fn press_down(shell: &mut TestShell) {
    feed(shell, DOWN);
}

/// Press backspace (DEL, as most terminals send it).
pub fn press_backspace(shell: &mut TestShell) {
    feed(shell, b"\x7f");
}

/// Press backspace `n` times.
pub fn press_backspace_n(shell: &mut TestShell, n: usize) {
    for _ in 0..n {
        press_backspace(shell);
    }
}

/// Press Tab.
pub fn press_tab(shell: &mut TestShell) {
    feed(shell, b"\t");
}

/// Current line as a string.
pub fn line(shell: &TestShell) -> String {
    String::from_utf8_lossy(shell.session().line().as_bytes()).into_owned()
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert output contains all expected strings.
pub fn assert_contains_all(output: &str, expected: &[&str]) {
    for s in expected {
        assert!(
            output.contains(s),
            "Expected output to contain {:?}\nOutput: {:?}",
            s,
            output
        );
    }
}

/// Assert output contains none of the forbidden strings.
pub fn assert_contains_none(output: &str, forbidden: &[&str]) {
    for s in forbidden {
        assert!(
            !output.contains(s),
            "Expected output NOT to contain {:?}\nOutput: {:?}",
            s,
            output
        );
    }
}

/// Assert the prompt appears exactly once, at the very end.
pub fn assert_single_trailing_prompt(output: &str) {
    assert!(
        output.ends_with(PROMPT),
        "Expected output to end with prompt\nOutput: {:?}",
        output
    );
    assert_eq!(
        output.matches(PROMPT).count(),
        1,
        "Expected exactly one prompt\nOutput: {:?}",
        output
    );
}
