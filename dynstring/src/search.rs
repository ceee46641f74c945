//! The search family: naive linear scans over the content bytes.
//!
//! All methods report "not found" as [`DynString::NPOS`]; the backward
//! searches also accept `NPOS` as the default "start from the end"
//! position. The scans are intentionally O(len * pattern) with no
//! preprocessing.

use crate::core::DynString;

impl DynString {
    /// First occurrence of `pattern` at or after `pos`, or `NPOS`.
    ///
    /// An empty pattern is found immediately at any valid position
    /// (including one past the last byte).
    #[must_use]
    pub fn find(&self, pattern: &[u8], pos: usize) -> usize {
        let hay = self.as_bytes();
        if pattern.is_empty() {
            return if pos <= hay.len() { pos } else { Self::NPOS };
        }
        if pattern.len() > hay.len() || pos > hay.len() - pattern.len() {
            return Self::NPOS;
        }
        let mut i = pos;
        while i + pattern.len() <= hay.len() {
            if &hay[i..i + pattern.len()] == pattern {
                return i;
            }
            i += 1;
        }
        Self::NPOS
    }

    /// First occurrence of `byte` at or after `pos`, or `NPOS`.
    #[must_use]
    pub fn find_byte(&self, byte: u8, pos: usize) -> usize {
        let hay = self.as_bytes();
        let mut i = pos;
        while i < hay.len() {
            if hay[i] == byte {
                return i;
            }
            i += 1;
        }
        Self::NPOS
    }

    /// Like [`find`](Self::find), with the pattern capped at its first
    /// `n` bytes.
    #[must_use]
    pub fn find_limited(&self, pattern: &[u8], pos: usize, n: usize) -> usize {
        let n = n.min(pattern.len());
        self.find(&pattern[..n], pos)
    }

    /// Last occurrence of `pattern` starting at or before `pos`, or
    /// `NPOS`. Pass `NPOS` (the default in the original interface) to
    /// search from the end.
    #[must_use]
    pub fn rfind(&self, pattern: &[u8], pos: usize) -> usize {
        let hay = self.as_bytes();
        if pattern.is_empty() {
            return pos.min(hay.len());
        }
        if pattern.len() > hay.len() {
            return Self::NPOS;
        }
        let mut i = pos.min(hay.len() - pattern.len());
        loop {
            if &hay[i..i + pattern.len()] == pattern {
                return i;
            }
            if i == 0 {
                break;
            }
            i -= 1;
        }
        Self::NPOS
    }

    /// Last occurrence of `byte` at or before `pos`, or `NPOS`.
    #[must_use]
    pub fn rfind_byte(&self, byte: u8, pos: usize) -> usize {
        self.scan_backward(pos, |b| b == byte)
    }

    /// First position at or after `pos` holding any byte of `set`.
    #[must_use]
    pub fn find_first_of(&self, set: &[u8], pos: usize) -> usize {
        self.scan_forward(pos, |b| set.contains(&b))
    }

    /// Last position at or before `pos` holding any byte of `set`.
    #[must_use]
    pub fn find_last_of(&self, set: &[u8], pos: usize) -> usize {
        self.scan_backward(pos, |b| set.contains(&b))
    }

    /// First position at or after `pos` holding a byte outside `set`.
    #[must_use]
    pub fn find_first_not_of(&self, set: &[u8], pos: usize) -> usize {
        self.scan_forward(pos, |b| !set.contains(&b))
    }

    /// Last position at or before `pos` holding a byte outside `set`.
    #[must_use]
    pub fn find_last_not_of(&self, set: &[u8], pos: usize) -> usize {
        self.scan_backward(pos, |b| !set.contains(&b))
    }

    fn scan_forward(&self, pos: usize, pred: impl Fn(u8) -> bool) -> usize {
        let hay = self.as_bytes();
        let mut i = pos;
        while i < hay.len() {
            if pred(hay[i]) {
                return i;
            }
            i += 1;
        }
        Self::NPOS
    }

    /// Backward scan from `min(pos, len - 1)` down to 0. The loop tests
    /// before decrementing, so index 0 is reached without unsigned
    /// wraparound.
    fn scan_backward(&self, pos: usize, pred: impl Fn(u8) -> bool) -> usize {
        let hay = self.as_bytes();
        if hay.is_empty() {
            return Self::NPOS;
        }
        let mut i = pos.min(hay.len() - 1);
        loop {
            if pred(hay[i]) {
                return i;
            }
            if i == 0 {
                break;
            }
            i -= 1;
        }
        Self::NPOS
    }
}
