// this module is transparently re-exported by its parent `_common`
use crate::parser::ErrorKind;

/// Why a production did not complete.
#[derive(Debug)]
pub(crate) enum Interrupt<E> {
    /// The input does not match, at the given position in the cursor's text
    Fail(ErrorKind, usize),
    /// The sink failed
    Sink(E),
    /// The end of the buffered text was reached, but more input is available
    Incomplete,
}

/// Result type of all productions.
pub(crate) type PResult<T, E> = Result<T, Interrupt<E>>;

pub(crate) trait ResultExt<T> {
    /// Report the error, if any, at position `pos`.
    fn at<E>(self, pos: usize) -> PResult<T, E>;
}

impl<T> ResultExt<T> for Result<T, ErrorKind> {
    fn at<E>(self, pos: usize) -> PResult<T, E> {
        self.map_err(|kind| Interrupt::Fail(kind, pos))
    }
}

/// A position in a piece of text.
///
/// `complete` indicates whether the text extends to the end of the input;
/// if not, reaching its end interrupts the current production with [`Interrupt::Incomplete`].
#[derive(Clone, Debug)]
pub(crate) struct Cursor<'a> {
    pub(super) txt: &'a str,
    pub(super) pos: usize,
    pub(super) complete: bool,
}

impl<'a> Cursor<'a> {
    pub fn new(txt: &'a str, complete: bool) -> Self {
        Cursor {
            txt,
            pos: 0,
            complete,
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn set_pos(&mut self, pos: usize) {
        debug_assert!(self.txt.is_char_boundary(pos));
        self.pos = pos;
    }

    /// The text after the cursor.
    pub fn rest(&self) -> &'a str {
        &self.txt[self.pos..]
    }

    pub fn advance(&mut self, n: usize) {
        self.pos += n;
    }

    /// Skip white spaces and comments.
    pub fn ws(&mut self) {
        let bytes = self.txt.as_bytes();
        while let Some(b) = bytes.get(self.pos) {
            match b {
                b' ' | b'\t' | b'\n' | b'\r' => self.pos += 1,
                b'#' => {
                    self.pos += bytes[self.pos..]
                        .iter()
                        .position(|b| *b == b'\n' || *b == b'\r')
                        .unwrap_or(bytes.len() - self.pos);
                }
                _ => break,
            }
        }
    }

    /// Skip horizontal white spaces.
    pub fn hws(&mut self) {
        let bytes = self.txt.as_bytes();
        while let Some(b' ' | b'\t') = bytes.get(self.pos) {
            self.pos += 1;
        }
    }

    /// The next byte, or `None` at the end of the input.
    pub fn peek<E>(&self) -> PResult<Option<u8>, E> {
        match self.txt.as_bytes().get(self.pos) {
            Some(b) => Ok(Some(*b)),
            None if self.complete => Ok(None),
            None => Err(Interrupt::Incomplete),
        }
    }

    /// Consume `b` if it is the next byte.
    pub fn eat<E>(&mut self, b: u8) -> PResult<bool, E> {
        if self.peek()? == Some(b) {
            self.pos += 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consume `b`, or fail.
    pub fn expect<E>(&mut self, b: u8, expected: &str) -> PResult<(), E> {
        if self.eat(b)? {
            Ok(())
        } else {
            self.fail(expected)
        }
    }

    /// Fail at the current position, reporting what was expected there.
    pub fn fail<T, E>(&self, expected: &str) -> PResult<T, E> {
        if self.pos < self.txt.len() {
            Err(Interrupt::Fail(ErrorKind::Syntax(expected.into()), self.pos))
        } else if self.complete {
            Err(Interrupt::Fail(
                ErrorKind::UnexpectedEof(expected.into()),
                self.pos,
            ))
        } else {
            Err(Interrupt::Incomplete)
        }
    }

    /// Check that a token ending at `end` (relative to the cursor) is not cut by the end of the buffer.
    pub(super) fn check_cut<E>(&self, end: usize) -> PResult<(), E> {
        if !self.complete && self.pos + end >= self.txt.len() {
            Err(Interrupt::Incomplete)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::convert::Infallible;

    #[test]
    fn ws_skips_comments() {
        let mut cur = Cursor::new("  # comment\n\t# other\r\n x", true);
        cur.ws();
        assert_eq!(cur.rest(), "x");
    }

    #[test]
    fn hws_stops_at_newline() {
        let mut cur = Cursor::new(" \t\n x", true);
        cur.hws();
        assert_eq!(cur.rest(), "\n x");
    }

    #[test]
    fn peek_at_end() {
        let cur = Cursor::new("", true);
        assert!(matches!(cur.peek::<Infallible>(), Ok(None)));
        let cur = Cursor::new("", false);
        assert!(matches!(cur.peek::<Infallible>(), Err(Interrupt::Incomplete)));
    }

    #[test]
    fn fail_kinds() {
        let cur = Cursor::new("x", true);
        assert!(matches!(
            cur.fail::<(), Infallible>("y"),
            Err(Interrupt::Fail(ErrorKind::Syntax(_), 0))
        ));
        let mut cur = Cursor::new("x", true);
        cur.advance(1);
        assert!(matches!(
            cur.fail::<(), Infallible>("y"),
            Err(Interrupt::Fail(ErrorKind::UnexpectedEof(_), 1))
        ));
        let mut cur = Cursor::new("x", false);
        cur.advance(1);
        assert!(matches!(cur.fail::<(), Infallible>("y"), Err(Interrupt::Incomplete)));
    }

    #[test]
    fn eat_and_expect() {
        let mut cur = Cursor::new(".;", true);
        assert!(cur.eat::<Infallible>(b'.').unwrap());
        assert!(!cur.eat::<Infallible>(b'.').unwrap());
        assert!(cur.expect::<Infallible>(b';', "';'").is_ok());
        assert!(cur.expect::<Infallible>(b';', "';'").is_err());
    }
}
