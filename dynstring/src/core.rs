use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Add, AddAssign};

use crate::error::DynStringError;

/// A growable owned byte string.
///
/// The buffer holds the content plus one trailing NUL byte and is resized
/// to an exact fit on every mutation. `None` is the canonical empty
/// state: default construction, `clear`, `take`, and any mutation that
/// produces an empty result all return to it.
#[derive(Clone, Default)]
pub struct DynString {
    buf: Option<Box<[u8]>>,
}

impl DynString {
    /// The "no position" sentinel shared by every search method, also
    /// used as "through the end" for lengths and "start from the end"
    /// for the backward searches.
    pub const NPOS: usize = usize::MAX;

    /// Creates an empty string. Does not allocate.
    #[must_use]
    pub const fn new() -> Self {
        Self { buf: None }
    }

    /// Composes `parts` into a fresh exact-fit buffer with a trailing
    /// NUL, or `None` when the parts are empty overall. Every mutator
    /// funnels through here.
    fn compose(parts: &[&[u8]]) -> Option<Box<[u8]>> {
        let total: usize = parts.iter().map(|p| p.len()).sum();
        if total == 0 {
            return None;
        }
        let mut buf = Vec::with_capacity(total + 1);
        for part in parts {
            buf.extend_from_slice(part);
        }
        buf.push(0);
        Some(buf.into_boxed_slice())
    }

    /// Number of content bytes, excluding the terminator.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.as_ref().map_or(0, |b| b.len() - 1)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_none()
    }

    /// The content bytes, without the terminator. Empty slice in the
    /// empty state.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match &self.buf {
            Some(buf) => &buf[..buf.len() - 1],
            None => &[],
        }
    }

    /// The NUL-terminated view of the buffer, including the terminator.
    /// `None` in the empty state, which owns no buffer.
    #[must_use]
    pub fn c_str(&self) -> Option<&[u8]> {
        self.buf.as_deref()
    }

    /// Bounds-checked byte access.
    ///
    /// # Errors
    ///
    /// Returns `DynStringError::IndexOutOfBounds` if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<u8, DynStringError> {
        self.as_bytes()
            .get(index)
            .copied()
            .ok_or(DynStringError::IndexOutOfBounds {
                index,
                length: self.len(),
            })
    }

    /// Bounds-checked mutable byte access. Writes through this reference
    /// modify the buffer in place; the terminator is out of reach.
    ///
    /// # Errors
    ///
    /// Returns `DynStringError::IndexOutOfBounds` if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut u8, DynStringError> {
        let length = self.len();
        if index >= length {
            return Err(DynStringError::IndexOutOfBounds { index, length });
        }
        match self.buf.as_deref_mut() {
            Some(buf) => Ok(&mut buf[index]),
            None => Err(DynStringError::IndexOutOfBounds { index, length }),
        }
    }

    /// Unchecked byte access.
    ///
    /// # Safety
    ///
    /// The caller must guarantee `index < len()`.
    #[must_use]
    pub unsafe fn get_unchecked(&self, index: usize) -> u8 {
        debug_assert!(index < self.len());
        unsafe { *self.as_bytes().get_unchecked(index) }
    }

    /// Unchecked mutable byte access.
    ///
    /// # Safety
    ///
    /// The caller must guarantee `index < len()`.
    #[must_use]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut u8 {
        debug_assert!(index < self.len());
        unsafe {
            self.buf
                .as_deref_mut()
                .unwrap_unchecked()
                .get_unchecked_mut(index)
        }
    }

    /// First content byte, `None` when empty.
    #[must_use]
    pub fn front(&self) -> Option<u8> {
        self.as_bytes().first().copied()
    }

    /// Last content byte, `None` when empty.
    #[must_use]
    pub fn back(&self) -> Option<u8> {
        self.as_bytes().last().copied()
    }

    /// Releases the buffer and returns to the empty state.
    pub fn clear(&mut self) {
        self.buf = None;
    }

    /// Transfers the content out, leaving this string empty. The
    /// ownership-transfer counterpart of plain Rust moves for callers
    /// that need the source to stay usable.
    #[must_use]
    pub fn take(&mut self) -> DynString {
        mem::take(self)
    }

    /// Exchanges the buffers of two strings without copying content.
    pub fn swap(&mut self, other: &mut DynString) {
        mem::swap(&mut self.buf, &mut other.buf);
    }

    // ---- append family ----

    /// Appends a single byte.
    pub fn push(&mut self, byte: u8) -> &mut Self {
        self.buf = Self::compose(&[self.as_bytes(), &[byte]]);
        self
    }

    /// Appends the whole of `other`.
    pub fn append(&mut self, other: &DynString) -> &mut Self {
        self.append_slice(other.as_bytes())
    }

    /// Appends the `(subpos, sublen)` sub-range of `other`. The length
    /// is clamped to the rest of `other`; a start position at or past
    /// the end of `other` makes this a no-op.
    pub fn append_substr(&mut self, other: &DynString, subpos: usize, sublen: usize) -> &mut Self {
        let src = other.as_bytes();
        if subpos >= src.len() {
            return self;
        }
        let avail = src.len() - subpos;
        let count = if sublen > avail { avail } else { sublen };
        self.append_slice(&src[subpos..subpos + count])
    }

    /// Appends a raw byte slice.
    pub fn append_slice(&mut self, s: &[u8]) -> &mut Self {
        self.buf = Self::compose(&[self.as_bytes(), s]);
        self
    }

    /// Appends the first `n` bytes of `s`; `n` is capped at `s.len()`.
    pub fn append_slice_n(&mut self, s: &[u8], n: usize) -> &mut Self {
        let n = n.min(s.len());
        self.append_slice(&s[..n])
    }

    /// Appends `n` copies of `byte`.
    pub fn append_fill(&mut self, n: usize, byte: u8) -> &mut Self {
        let fill = vec![byte; n];
        self.append_slice(&fill)
    }

    // ---- assign family ----

    /// Replaces the content with a deep copy of `other`.
    pub fn assign(&mut self, other: &DynString) -> &mut Self {
        self.buf = other.buf.clone();
        self
    }

    /// Replaces the content with the `(subpos, sublen)` sub-range of
    /// `other`. A start position at or past the end of `other` assigns
    /// the empty string.
    pub fn assign_substr(&mut self, other: &DynString, subpos: usize, sublen: usize) -> &mut Self {
        let src = other.as_bytes();
        let slice = if subpos >= src.len() {
            &[][..]
        } else {
            let avail = src.len() - subpos;
            let count = if sublen > avail { avail } else { sublen };
            &src[subpos..subpos + count]
        };
        self.buf = Self::compose(&[slice]);
        self
    }

    /// Replaces the content with a raw byte slice.
    pub fn assign_slice(&mut self, s: &[u8]) -> &mut Self {
        self.buf = Self::compose(&[s]);
        self
    }

    /// Replaces the content with the first `n` bytes of `s`; `n` is
    /// capped at `s.len()`.
    pub fn assign_slice_n(&mut self, s: &[u8], n: usize) -> &mut Self {
        let n = n.min(s.len());
        self.assign_slice(&s[..n])
    }

    /// Replaces the content with `n` copies of `byte`.
    pub fn assign_fill(&mut self, n: usize, byte: u8) -> &mut Self {
        let fill = vec![byte; n];
        self.assign_slice(&fill)
    }

    // ---- insert / erase / replace ----

    /// Inserts `other` at `pos`; a position past the end is clamped down
    /// to the end.
    pub fn insert(&mut self, pos: usize, other: &DynString) -> &mut Self {
        self.insert_slice(pos, other.as_bytes())
    }

    /// Inserts a raw byte slice at `pos`, clamped down to the end.
    pub fn insert_slice(&mut self, pos: usize, s: &[u8]) -> &mut Self {
        let pos = pos.min(self.len());
        let bytes = self.as_bytes();
        self.buf = Self::compose(&[&bytes[..pos], s, &bytes[pos..]]);
        self
    }

    /// Removes `len` bytes starting at `pos`. The length is clamped to
    /// the rest of the string (pass [`DynString::NPOS`] for "through the
    /// end"); a position at or past the end is a no-op.
    pub fn erase(&mut self, pos: usize, len: usize) -> &mut Self {
        let size = self.len();
        if pos >= size {
            return self;
        }
        let avail = size - pos;
        let count = if len > avail { avail } else { len };
        let bytes = self.as_bytes();
        self.buf = Self::compose(&[&bytes[..pos], &bytes[pos + count..]]);
        self
    }

    /// Replaces the `(pos, len)` range with `other`: an erase followed
    /// by an insert at the same position, not an atomic exchange.
    pub fn replace(&mut self, pos: usize, len: usize, other: &DynString) -> &mut Self {
        self.erase(pos, len);
        self.insert(pos, other)
    }

    /// Replaces the `(pos, len)` range with a raw byte slice.
    pub fn replace_slice(&mut self, pos: usize, len: usize, s: &[u8]) -> &mut Self {
        self.erase(pos, len);
        self.insert_slice(pos, s)
    }

    /// Removes and returns the last byte; no-op (`None`) on empty.
    pub fn pop(&mut self) -> Option<u8> {
        let (&last, rest) = self.as_bytes().split_last()?;
        self.buf = Self::compose(&[rest]);
        Some(last)
    }

    // ---- extraction ----

    /// Copies up to `len` bytes starting at `pos` into `dest` and
    /// returns the number of bytes actually copied, additionally bounded
    /// by `dest.len()`. Returns 0 when `pos >= len()`.
    pub fn copy_to(&self, dest: &mut [u8], len: usize, pos: usize) -> usize {
        let bytes = self.as_bytes();
        if pos >= bytes.len() {
            return 0;
        }
        let avail = bytes.len() - pos;
        let count = len.min(avail).min(dest.len());
        dest[..count].copy_from_slice(&bytes[pos..pos + count]);
        count
    }

    /// Returns an independent string holding the `(pos, len)` sub-range,
    /// clamped to the rest of the string. A position at or past the end
    /// yields the empty string.
    #[must_use]
    pub fn substr(&self, pos: usize, len: usize) -> DynString {
        let bytes = self.as_bytes();
        if pos >= bytes.len() {
            return DynString::new();
        }
        let avail = bytes.len() - pos;
        let count = if len > avail { avail } else { len };
        DynString::from(&bytes[pos..pos + count])
    }

    // ---- comparison ----

    /// Three-way byte-wise comparison: the first differing byte decides
    /// via its difference, equal prefixes fall back to the sign of the
    /// length difference. Only the sign of the result is significant.
    #[must_use]
    pub fn compare(&self, other: &DynString) -> i32 {
        let a = self.as_bytes();
        let b = other.as_bytes();
        let common = a.len().min(b.len());
        for i in 0..common {
            let diff = i32::from(a[i]) - i32::from(b[i]);
            if diff != 0 {
                return diff;
            }
        }
        match a.len().cmp(&b.len()) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Compares the `(pos, len)` sub-range of this string against the
    /// whole of `other`. The sub-range length is clamped to the rest of
    /// this string; after an equal common prefix the residual lengths
    /// decide.
    ///
    /// # Errors
    ///
    /// Returns `DynStringError::PosOutOfRange` if `pos > len()`.
    pub fn compare_range(
        &self,
        pos: usize,
        len: usize,
        other: &DynString,
    ) -> Result<i32, DynStringError> {
        let size = self.len();
        if pos > size {
            return Err(DynStringError::PosOutOfRange { pos, length: size });
        }
        let rest = size - pos;
        let span = if len > rest { rest } else { len };
        let a = &self.as_bytes()[pos..pos + span];
        let b = other.as_bytes();
        let common = span.min(b.len());
        for i in 0..common {
            let diff = i32::from(a[i]) - i32::from(b[i]);
            if diff != 0 {
                return Ok(diff);
            }
        }
        Ok(match span.cmp(&b.len()) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        })
    }
}

// The relational operators are all defined through `compare`.

impl PartialEq for DynString {
    fn eq(&self, other: &DynString) -> bool {
        self.compare(other) == 0
    }
}

impl Eq for DynString {}

impl PartialOrd for DynString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DynString {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other).cmp(&0)
    }
}

impl Hash for DynString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl PartialEq<&str> for DynString {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<DynString> for &str {
    fn eq(&self, other: &DynString) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&[u8]> for DynString {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl PartialEq<DynString> for &[u8] {
    fn eq(&self, other: &DynString) -> bool {
        *self == other.as_bytes()
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for DynString {
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.as_bytes() == *other
    }
}

impl<const N: usize> PartialEq<DynString> for &[u8; N] {
    fn eq(&self, other: &DynString) -> bool {
        **self == *other.as_bytes()
    }
}

impl From<&[u8]> for DynString {
    fn from(s: &[u8]) -> Self {
        Self {
            buf: Self::compose(&[s]),
        }
    }
}

impl<const N: usize> From<&[u8; N]> for DynString {
    fn from(s: &[u8; N]) -> Self {
        Self::from(&s[..])
    }
}

impl From<&str> for DynString {
    fn from(s: &str) -> Self {
        Self::from(s.as_bytes())
    }
}

impl AddAssign<&DynString> for DynString {
    fn add_assign(&mut self, other: &DynString) {
        self.append(other);
    }
}

impl AddAssign<&[u8]> for DynString {
    fn add_assign(&mut self, other: &[u8]) {
        self.append_slice(other);
    }
}

impl AddAssign<u8> for DynString {
    fn add_assign(&mut self, byte: u8) {
        self.push(byte);
    }
}

impl Add for DynString {
    type Output = DynString;

    fn add(mut self, rhs: DynString) -> DynString {
        self.append(&rhs);
        self
    }
}

impl Add<&DynString> for DynString {
    type Output = DynString;

    fn add(mut self, rhs: &DynString) -> DynString {
        self.append(rhs);
        self
    }
}

impl Add<&DynString> for &DynString {
    type Output = DynString;

    fn add(self, rhs: &DynString) -> DynString {
        let mut out = self.clone();
        out.append(rhs);
        out
    }
}

impl Add<u8> for DynString {
    type Output = DynString;

    fn add(mut self, byte: u8) -> DynString {
        self.push(byte);
        self
    }
}

impl Add<DynString> for u8 {
    type Output = DynString;

    fn add(self, rhs: DynString) -> DynString {
        let mut out = DynString::new();
        out.push(self);
        out.append(&rhs);
        out
    }
}

impl fmt::Display for DynString {
    /// Renders the content bytes; the empty state renders as empty
    /// output. Non-UTF-8 bytes go through lossy conversion.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}

impl fmt::Debug for DynString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("b\"")?;
        for byte in self.as_bytes() {
            write!(f, "{}", byte.escape_ascii())?;
        }
        f.write_str("\"")
    }
}
