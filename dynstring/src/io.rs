//! Stream extraction into a [`DynString`].
//!
//! These functions mirror how an interactive front end consumes user
//! input: skip leading ASCII whitespace, then accumulate bytes until a
//! stop condition. They read byte-at-a-time from any `std::io::Read`,
//! and return `Ok(false)` when the stream ends before any content byte
//! was extracted.

use std::io::{self, Read};

use crate::core::DynString;

fn read_byte<R: Read>(reader: &mut R) -> io::Result<Option<u8>> {
    let mut byte = [0u8; 1];
    loop {
        match reader.read(&mut byte) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(byte[0])),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
}

fn skip_whitespace<R: Read>(reader: &mut R) -> io::Result<Option<u8>> {
    loop {
        match read_byte(reader)? {
            Some(b) if b.is_ascii_whitespace() => {}
            other => return Ok(other),
        }
    }
}

/// Reads one whitespace-delimited token into `out`, replacing its
/// content. Returns `Ok(false)` on end-of-stream before any token byte.
///
/// # Errors
///
/// Propagates any I/O error other than `Interrupted`.
pub fn read_token<R: Read>(reader: &mut R, out: &mut DynString) -> io::Result<bool> {
    out.clear();
    let Some(first) = skip_whitespace(reader)? else {
        return Ok(false);
    };
    let mut byte = first;
    loop {
        out.push(byte);
        byte = match read_byte(reader)? {
            None => return Ok(true),
            Some(b) if b.is_ascii_whitespace() => return Ok(true),
            Some(b) => b,
        };
    }
}

/// Reads one line into `out`, replacing its content: skips leading
/// whitespace, then accumulates until a newline or carriage return.
/// Returns `Ok(false)` on end-of-stream before any content byte.
///
/// # Errors
///
/// Propagates any I/O error other than `Interrupted`.
pub fn read_line<R: Read>(reader: &mut R, out: &mut DynString) -> io::Result<bool> {
    read_until(reader, out, |b| b == b'\n' || b == b'\r')
}

/// Like [`read_line`], stopping at `delim` instead of newline.
///
/// # Errors
///
/// Propagates any I/O error other than `Interrupted`.
pub fn read_line_delim<R: Read>(
    reader: &mut R,
    out: &mut DynString,
    delim: u8,
) -> io::Result<bool> {
    read_until(reader, out, |b| b == delim)
}

fn read_until<R: Read>(
    reader: &mut R,
    out: &mut DynString,
    stop: impl Fn(u8) -> bool,
) -> io::Result<bool> {
    out.clear();
    let Some(first) = skip_whitespace(reader)? else {
        return Ok(false);
    };
    if stop(first) {
        return Ok(true);
    }
    let mut byte = first;
    loop {
        out.push(byte);
        byte = match read_byte(reader)? {
            None => return Ok(true),
            Some(b) if stop(b) => return Ok(true),
            Some(b) => b,
        };
    }
}
