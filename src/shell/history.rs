//! Command history ring with up/down recall.
//!
//! Fixed array of `N` line slots addressed modulo `N`. `end` counts every
//! stored line and never goes backwards; the browse position is kept as a
//! distance back from `end`, so `position() <= end()` always holds.
//!
//! The browse position never steps onto slot `end mod N`, the one the next
//! line will overwrite: `end() - position() < N`, so at most `N - 1` lines
//! are recallable.

use super::line::LineBuffer;

/// Result of stepping forward through history.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Recall<'a> {
    /// A stored line
    Entry(&'a [u8]),

    /// Back at the live end; the line being edited is empty
    Live,
}

/// Command history storage.
#[derive(Debug, Clone)]
pub struct HistoryRing<const LINE: usize, const N: usize> {
    slots: [LineBuffer<LINE>; N],

    /// Slot the next line is written to (`end mod N`)
    head: usize,

    /// Number of lines ever stored (wrapping)
    end: usize,

    /// Number of populated slots, at most `N`
    len: usize,

    /// Distance of the browse position behind `end` (0 = live line)
    offset: usize,
}

impl<const LINE: usize, const N: usize> HistoryRing<LINE, N> {
    /// Create empty history.
    pub const fn new() -> Self {
        Self {
            slots: [const { LineBuffer::new() }; N],
            head: 0,
            end: 0,
            len: 0,
            offset: 0,
        }
    }

    /// Store a submitted line.
    ///
    /// Empty lines are not stored. Once full, the oldest line is overwritten.
    /// Returns `true` if the line was stored. The browse position keeps its
    /// distance from `end`; call [`reset_position`](Self::reset_position)
    /// first to return to the live end.
    pub fn push(&mut self, line: &[u8]) -> bool {
        if line.is_empty() || N == 0 {
            return false;
        }

        self.slots[self.head].set(line);
        self.head = (self.head + 1) % N;
        self.end = self.end.wrapping_add(1);
        self.len = (self.len + 1).min(N);
        true
    }

    /// Step back to the previous (older) line (up arrow).
    ///
    /// Returns `None` and leaves the position unchanged at the oldest
    /// recallable line.
    pub fn previous(&mut self) -> Option<&[u8]> {
        if self.offset + 1 > self.len.min(N.saturating_sub(1)) {
            return None;
        }
        self.offset += 1;
        Some(self.slot(self.offset).as_bytes())
    }

    /// Step forward to the next (newer) line (down arrow).
    ///
    /// Returns `None` when already at the live end, `Recall::Live` when the
    /// step lands back on it.
    pub fn next(&mut self) -> Option<Recall<'_>> {
        if self.offset == 0 {
            return None;
        }
        self.offset -= 1;
        if self.offset == 0 {
            Some(Recall::Live)
        } else {
            Some(Recall::Entry(self.slot(self.offset).as_bytes()))
        }
    }

    /// Return the browse position to the live end.
    pub fn reset_position(&mut self) {
        self.offset = 0;
    }

    /// Number of lines ever stored.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Current browse position (equals `end()` when not browsing).
    pub fn position(&self) -> usize {
        self.end.wrapping_sub(self.offset)
    }

    /// Number of populated slots.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Stored lines, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (1..=self.len).rev().map(|age| self.slot(age).as_bytes())
    }

    /// Slot holding the line stored `age` submissions ago (1 = newest).
    fn slot(&self, age: usize) -> &LineBuffer<LINE> {
        &self.slots[(self.head + N - age) % N]
    }
}

impl<const LINE: usize, const N: usize> Default for HistoryRing<LINE, N> {
    fn default() -> Self {
        Self::new()
    }
}
