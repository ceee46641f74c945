//! `DynString`: a growable owned byte string with exact-fit storage.
//!
//! `DynString` stores an arbitrary byte sequence in a heap buffer that is
//! always NUL-terminated while non-empty. There is no spare capacity:
//! every mutation composes the result into a fresh buffer sized exactly
//! for it, terminates it, and swaps it in. The empty state owns no buffer
//! at all.
//!
//! ```
//! use dynstring::DynString;
//!
//! let mut s = DynString::from("hello");
//! s.append_slice(b" world");
//!
//! assert_eq!(s.len(), 11);
//! assert_eq!(s, "hello world");
//! assert_eq!(s.find(b"world", 0), 6);
//! assert_eq!(s.c_str().unwrap().last(), Some(&0));
//! ```
//!
//! # Range clamping
//!
//! Position/length arguments that would run past the end of a buffer are
//! silently clamped to "rest of the string" rather than reported as
//! errors; a start position past the end makes `erase` and
//! `append_substr` no-ops while `insert` clamps the position down to the
//! end. Only the checked accessors (`at`, `at_mut`) and the bounded
//! `compare_range` signal out-of-range conditions, via
//! [`DynStringError`].
//!
//! ```
//! use dynstring::DynString;
//!
//! let mut s = DynString::from("abc");
//! s.insert_slice(10, b"X"); // position clamped to the end
//! assert_eq!(s, "abcX");
//!
//! assert_eq!(DynString::from("abcdef").substr(4, 100), "ef");
//! ```
//!
//! # The `NPOS` sentinel
//!
//! Every search method reports "not found" as [`DynString::NPOS`]
//! (`usize::MAX`). The same value doubles as "through the end" for
//! `erase`/`substr` lengths and as "start from the end" for the backward
//! searches.
//!
//! # Stream extraction
//!
//! The [`io`] module reads whitespace-delimited tokens and lines from any
//! `std::io::Read` into a `DynString`, the way the interactive layer of a
//! program would consume user input.

mod core;
mod error;
pub mod io;
mod search;

pub use crate::core::DynString;
pub use crate::error::DynStringError;
