//! Line buffer for the line being typed.

/// Bounded byte buffer holding the in-progress line.
///
/// Capacity is `N` bytes, of which `N - 2` can be filled; pushes beyond that
/// are refused and the caller drops the byte.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineBuffer<const N: usize> {
    buf: heapless::Vec<u8, N>,
}

impl<const N: usize> LineBuffer<N> {
    /// Maximum number of bytes the line can hold.
    pub const LIMIT: usize = N.saturating_sub(2);

    /// Create empty buffer.
    pub const fn new() -> Self {
        Self {
            buf: heapless::Vec::new(),
        }
    }

    /// Append a byte. Returns `false` (buffer unchanged) when full.
    pub fn push(&mut self, byte: u8) -> bool {
        if self.buf.len() >= Self::LIMIT {
            return false;
        }
        self.buf.push(byte).is_ok()
    }

    /// Remove and return the last byte.
    pub fn pop(&mut self) -> Option<u8> {
        self.buf.pop()
    }

    /// Replace contents, keeping at most `LIMIT` bytes.
    pub fn set(&mut self, bytes: &[u8]) {
        self.buf.clear();
        let len = bytes.len().min(Self::LIMIT);
        let _ = self.buf.extend_from_slice(&bytes[..len]);
    }

    /// Clear buffer.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Current length in bytes.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Raw contents.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Contents as UTF-8, if valid.
    pub fn as_str(&self) -> Result<&str, core::str::Utf8Error> {
        core::str::from_utf8(&self.buf)
    }

    /// Replace every byte of an invalid UTF-8 sequence with `?` and return
    /// the contents as `&str`.
    ///
    /// Length is unchanged, so space-separated tokens stay where they were.
    pub fn to_str_lossy(&mut self) -> &str {
        let mut start = 0;
        while let Err(e) = core::str::from_utf8(&self.buf[start..]) {
            let bad = start + e.valid_up_to();
            let end = match e.error_len() {
                Some(len) => bad + len,
                None => self.buf.len(),
            };
            self.buf[bad..end].fill(b'?');
            start = end;
        }
        core::str::from_utf8(&self.buf).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_pop() {
        let mut line = LineBuffer::<8>::new();
        assert!(line.push(b'a'));
        assert!(line.push(b'b'));
        assert_eq!(line.as_bytes(), b"ab");
        assert_eq!(line.pop(), Some(b'b'));
        assert_eq!(line.as_str(), Ok("a"));
    }

    #[test]
    fn test_limit_reserves_two_bytes() {
        let mut line = LineBuffer::<8>::new();
        for b in b"abcdef" {
            assert!(line.push(*b));
        }
        assert!(!line.push(b'g'));
        assert_eq!(line.as_bytes(), b"abcdef");
    }

    #[test]
    fn test_pop_empty() {
        let mut line = LineBuffer::<8>::new();
        assert_eq!(line.pop(), None);
        assert!(line.is_empty());
    }

    #[test]
    fn test_set_truncates() {
        let mut line = LineBuffer::<4>::new();
        line.set(b"hello");
        assert_eq!(line.as_bytes(), b"he");

        line.set(b"");
        assert!(line.is_empty());
    }

    #[test]
    fn test_tiny_capacity_holds_nothing() {
        let mut line = LineBuffer::<2>::new();
        assert_eq!(LineBuffer::<2>::LIMIT, 0);
        assert!(!line.push(b'x'));
    }

    #[test]
    fn test_invalid_utf8() {
        let mut line = LineBuffer::<8>::new();
        line.push(0xFF);
        assert!(line.as_str().is_err());
    }

    #[test]
    fn test_lossy_replaces_invalid_bytes() {
        let mut line = LineBuffer::<16>::new();
        line.set(b"a\xe9 b\xff\xfe");
        assert_eq!(line.to_str_lossy(), "a? b??");
        assert_eq!(line.len(), 6);
    }

    #[test]
    fn test_lossy_keeps_valid_multibyte() {
        let mut line = LineBuffer::<16>::new();
        line.set(b"\xc3\xa9\xe2\x82");
        // Truncated sequence at the end is replaced byte for byte
        assert_eq!(line.to_str_lossy(), "é??");
    }
}
