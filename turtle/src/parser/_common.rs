//! I define the machinery shared by the Turtle and N-Triples parsers:
//! the buffered [`Input`], the [`Cursor`] with its terminal productions,
//! and the two grammars.

use crate::parser::ErrorKind;

mod _cursor;
pub(crate) use _cursor::*;
mod _input;
pub(crate) use _input::*;
mod _terminals;

mod _nt;
pub(crate) use _nt::*;
mod _turtle;
pub(crate) use _turtle::*;

/// Decode the numeric escape sequence (UCHAR) at the start of `txt`,
/// which starts right after the backslash.
///
/// Return the decoded character and the length of the sequence (without the backslash).
fn unescape_numeric(txt: &str) -> Result<(char, usize), ErrorKind> {
    const ERR: ErrorKind = ErrorKind::InvalidEscape;
    let len = match txt.as_bytes().first() {
        Some(b'u') => 4,
        Some(b'U') => 8,
        _ => return Err(ERR),
    };
    let hex = txt.get(1..=len).ok_or(ERR)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ERR);
    }
    let code = u32::from_str_radix(hex, 16).map_err(|_| ERR)?;
    let chr = char::try_from(code).map_err(|_| ERR)?;
    Ok((chr, len + 1))
}

/// Decode the escape sequence (ECHAR or UCHAR) at the start of `txt`,
/// which starts right after the backslash.
fn unescape_literal(txt: &str) -> Result<(char, usize), ErrorKind> {
    let chr = match txt.as_bytes().first() {
        Some(b'b') => '\x08',
        Some(b'f') => '\x0C',
        Some(b'n') => '\n',
        Some(b'r') => '\r',
        Some(b't') => '\t',
        Some(b'"') => '"',
        Some(b'\'') => '\'',
        Some(b'\\') => '\\',
        _ => return unescape_numeric(txt),
    };
    Ok((chr, 1))
}
