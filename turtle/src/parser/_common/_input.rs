// this module is transparently re-exported by its parent `_common`
use std::io::{self, BufRead};

/// The minimum number of bytes read by each call to [`Input::fill`].
const CHUNK: usize = 1 << 16;

/// A buffer over a [`BufRead`], keeping track of the position in the whole input.
///
/// The buffer always ends at the end of a line, or at the end of the input.
#[derive(Debug)]
pub(crate) struct Input<B> {
    read: B,
    buf: String,
    start: usize,
    offset: usize,
    line: usize,
    col: usize,
    eof: bool,
}

impl<B: BufRead> Input<B> {
    pub fn new(read: B) -> Self {
        Input {
            read,
            buf: String::new(),
            start: 0,
            offset: 0,
            line: 1,
            col: 1,
            eof: false,
        }
    }

    /// The buffered text that has not been consumed yet.
    pub fn text(&self) -> &str {
        &self.buf[self.start..]
    }

    /// Whether [`text`](Input::text) extends to the end of the input.
    pub fn is_complete(&self) -> bool {
        self.eof
    }

    /// Read more text, at least as much as is currently buffered (unless the input ends).
    pub fn fill(&mut self) -> io::Result<()> {
        if self.start > 0 {
            self.buf.drain(..self.start);
            self.start = 0;
        }
        let target = self.buf.len().max(CHUNK);
        let mut read = 0;
        while read < target {
            let n = self.read.read_line(&mut self.buf)?;
            if n == 0 {
                self.eof = true;
                break;
            }
            read += n;
        }
        log::trace!(
            "read {read} bytes at offset {}, {} bytes buffered, eof={}",
            self.offset,
            self.buf.len(),
            self.eof
        );
        Ok(())
    }

    /// Mark the first `n` bytes of [`text`](Input::text) as consumed.
    pub fn consume(&mut self, n: usize) {
        let (line, col) = lico(&self.text()[..n], self.line, self.col);
        self.line = line;
        self.col = col;
        self.offset += n;
        self.start += n;
    }

    /// The offset, line and column of position `pos` in [`text`](Input::text).
    pub fn locate(&self, pos: usize) -> (usize, usize, usize) {
        let pos = pos.min(self.text().len());
        let (line, col) = lico(&self.text()[..pos], self.line, self.col);
        (self.offset + pos, line, col)
    }
}

/// The line and column reached after reading `txt` from line `line`, column `col`.
///
/// Columns count characters.
pub(crate) fn lico(txt: &str, mut line: usize, mut col: usize) -> (usize, usize) {
    for chr in txt.chars() {
        if chr == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }
    (line, col)
}
