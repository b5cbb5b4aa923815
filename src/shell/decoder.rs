//! Input decoder for terminal byte sequences.
//!
//! Provides the state machine that interprets raw input bytes, including the
//! three-byte ANSI cursor sequences (`ESC [ A`, `ESC [ B`) whose bytes may
//! arrive in separate calls.
//!
//! This is a pure decoder - it doesn't manage buffers or I/O. It converts raw
//! bytes into logical input events.

/// Decoder state for escape sequence handling.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Normal input mode
    #[default]
    Normal,

    /// Saw ESC
    EscapeSeen,

    /// Saw ESC [ (next byte selects the cursor key)
    EscapeBracketSeen,
}

/// Logical input event.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// No event (accumulating a sequence, or an ignored byte)
    None,

    /// Byte to append to the line
    Byte(u8),

    /// Backspace key; carries the received byte (BS or DEL) for echoing
    Backspace(u8),

    /// Enter key (line feed or carriage return)
    Enter,

    /// Tab key
    Tab,

    /// Up arrow key (history previous)
    UpArrow,

    /// Down arrow key (history next)
    DownArrow,
}

/// ASCII escape.
pub const ESC: u8 = 0x1B;

/// ASCII backspace.
pub const BS: u8 = 0x08;

/// ASCII delete, sent by most terminals for the backspace key.
pub const DEL: u8 = 0x7F;

/// Terminal input decoder with escape sequence handling.
///
/// Only one level of escape nesting is understood: after `ESC [` exactly one
/// more byte is consumed and the decoder returns to `Normal`.
#[derive(Debug, Clone, Default)]
pub struct InputDecoder {
    mode: InputMode,
}

impl InputDecoder {
    /// Create new decoder in Normal mode.
    pub const fn new() -> Self {
        Self {
            mode: InputMode::Normal,
        }
    }

    /// Decode a single byte into an input event.
    ///
    /// ```rust,ignore
    /// // Up arrow (ESC [ A), one byte per call
    /// assert_eq!(decoder.decode(0x1b), InputEvent::None);
    /// assert_eq!(decoder.decode(b'['), InputEvent::None);
    /// assert_eq!(decoder.decode(b'A'), InputEvent::UpArrow);
    /// ```
    pub fn decode(&mut self, byte: u8) -> InputEvent {
        match self.mode {
            InputMode::Normal => self.decode_normal(byte),
            InputMode::EscapeSeen => self.decode_escape(byte),
            InputMode::EscapeBracketSeen => self.decode_cursor_key(byte),
        }
    }

    fn decode_normal(&mut self, byte: u8) -> InputEvent {
        match byte {
            b'\n' | b'\r' => InputEvent::Enter,
            b'\t' => InputEvent::Tab,
            BS | DEL => InputEvent::Backspace(byte),
            ESC => {
                self.mode = InputMode::EscapeSeen;
                InputEvent::None
            }
            // Everything else goes into the line, control bytes included
            _ => InputEvent::Byte(byte),
        }
    }

    fn decode_escape(&mut self, byte: u8) -> InputEvent {
        if byte == b'[' {
            self.mode = InputMode::EscapeBracketSeen;
        } else {
            // Unrecognized single-byte escape is swallowed
            self.mode = InputMode::Normal;
        }
        InputEvent::None
    }

    fn decode_cursor_key(&mut self, byte: u8) -> InputEvent {
        self.mode = InputMode::Normal;

        match byte {
            b'A' => InputEvent::UpArrow,
            b'B' => InputEvent::DownArrow,
            _ => InputEvent::None,
        }
    }

    /// Current decoder mode.
    pub fn mode(&self) -> InputMode {
        self.mode
    }
}
