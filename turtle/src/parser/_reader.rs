// this module is transparently re-exported by its parent `parser`
use crate::lazy_regex;
use crate::parser::_common::{Input, Interrupt, NTriplesGrammar, TurtleGrammar};
use crate::parser::{Error, ErrorKind, ErrorMode, ParseContext};
use rdfparse_api::source::{SinkError, SourceError, StreamResult, TripleSource};
use rdfparse_term::Triple;
use std::io::BufRead;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Syntax {
    Turtle,
    NTriples,
    TriplesBlock,
}

/// The [`TripleSource`] produced by the parsers of this crate.
///
/// Each call to [`try_for_some_triple`](TripleSource::try_for_some_triple)
/// parses one statement, and pushes its triples to the callback.
///
/// In [strict](ErrorMode::Strict) mode, the first error ends the parse.
/// In [permissive](ErrorMode::Permissive) mode, errors are [recorded](TripleReader::errors),
/// the input is skipped up to the next '.' that ends a statement, and parsing resumes there.
/// Triples that were emitted by the faulty statement before the error are not retracted.
#[derive(Debug)]
pub struct TripleReader<B> {
    input: Input<B>,
    syntax: Syntax,
    ctx: ParseContext,
    mode: ErrorMode,
    errors: Vec<Error>,
    /// Number of triples of the current statement that were already delivered
    skip: usize,
    resync: bool,
    done: bool,
    count: usize,
}

impl<B: BufRead> TripleReader<B> {
    pub(crate) fn new(read: B, syntax: Syntax, ctx: ParseContext, mode: ErrorMode) -> Self {
        log::debug!("start parsing {syntax:?} in {mode:?} mode");
        TripleReader {
            input: Input::new(read),
            syntax,
            ctx,
            mode,
            errors: vec![],
            skip: 0,
            resync: false,
            done: false,
            count: 0,
        }
    }

    /// The errors recorded so far (always empty in strict mode).
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Take the errors recorded so far.
    pub fn take_errors(&mut self) -> Vec<Error> {
        std::mem::take(&mut self.errors)
    }

    /// The number of triples delivered so far.
    pub fn triple_count(&self) -> usize {
        self.count
    }

    /// The context of this parse, holding the current base, prefixes and blank node scope.
    pub fn context(&self) -> &ParseContext {
        &self.ctx
    }

    /// Consume this reader, returning its context, so that it can be used for another parse.
    pub fn into_context(self) -> ParseContext {
        self.ctx
    }

    fn error_at(&self, kind: ErrorKind, pos: usize) -> Error {
        let (offset, line, col) = self.input.locate(pos);
        Error::new(kind, offset, line, col)
    }

    fn fill(&mut self) -> Result<(), Error> {
        self.input
            .fill()
            .map_err(|err| self.error_at(err.into(), self.input.text().len()))
    }

    /// Skip the input up to (and including) the next '.' that ends a statement.
    fn resynchronize(&mut self) -> Result<(), Error> {
        lazy_regex!(STATEMENT_END = r"\.(?:[ \t\r\n#]|$)");
        loop {
            let txt = self.input.text();
            let found = STATEMENT_END.find(txt).map(|m| (m.start(), m.end()));
            let len = txt.len();
            let complete = self.input.is_complete();
            match found {
                Some((start, end)) if end > start + 1 || complete => {
                    log::trace!("skipping {} bytes", start + 1);
                    self.input.consume(start + 1);
                    self.resync = false;
                    return Ok(());
                }
                Some((start, _)) => {
                    // a '.' at the end of the buffer may be followed by more name characters
                    self.input.consume(start);
                    self.fill()?;
                }
                None if complete => {
                    self.input.consume(len);
                    self.resync = false;
                    return Ok(());
                }
                None => {
                    self.input.consume(len);
                    self.fill()?;
                }
            }
        }
    }

    fn finish(&mut self) {
        self.done = true;
        log::debug!(
            "parsed {} triples with {} errors",
            self.count,
            self.errors.len()
        );
    }
}

impl<B: BufRead> TripleSource for TripleReader<B> {
    type Triple = Triple;
    type Error = Error;

    fn try_for_some_triple<E, F>(&mut self, mut f: F) -> StreamResult<bool, Self::Error, E>
    where
        E: std::error::Error,
        F: FnMut(Self::Triple) -> Result<(), E>,
    {
        if self.done {
            return Ok(false);
        }
        if self.resync {
            self.resynchronize().map_err(SourceError)?;
        }
        let mark = self.ctx.bnodes().checkpoint();
        loop {
            let skip = self.skip;
            let mut emitted = 0;
            let outcome = {
                let emit = |t: Triple| {
                    emitted += 1;
                    if emitted > skip {
                        f(t)
                    } else {
                        Ok(())
                    }
                };
                let txt = self.input.text();
                let complete = self.input.is_complete();
                match self.syntax {
                    Syntax::Turtle => {
                        TurtleGrammar::new(txt, complete, &mut self.ctx, emit).statement()
                    }
                    Syntax::NTriples => {
                        NTriplesGrammar::new(txt, complete, &mut self.ctx, emit).statement()
                    }
                    Syntax::TriplesBlock => TurtleGrammar::new(txt, complete, &mut self.ctx, emit)
                        .with_variables()
                        .statement(),
                }
            };
            match outcome {
                Ok(Some(end)) => {
                    self.input.consume(end);
                    self.skip = 0;
                    self.count += emitted.saturating_sub(skip);
                    return Ok(true);
                }
                Ok(None) => {
                    self.finish();
                    return Ok(false);
                }
                Err(Interrupt::Incomplete) => {
                    // replay the statement once more text is available
                    self.ctx.bnodes_mut().rollback(mark);
                    self.count += emitted.saturating_sub(skip);
                    self.skip = emitted.max(skip);
                    if let Err(err) = self.fill() {
                        self.finish();
                        return Err(SourceError(err));
                    }
                }
                Err(Interrupt::Sink(err)) => {
                    self.finish();
                    return Err(SinkError(err));
                }
                Err(Interrupt::Fail(kind, pos)) => {
                    let err = self.error_at(kind, pos);
                    self.skip = 0;
                    self.count += emitted.saturating_sub(skip);
                    match self.mode {
                        ErrorMode::Strict => {
                            self.finish();
                            return Err(SourceError(err));
                        }
                        ErrorMode::Permissive => {
                            log::warn!("{err}");
                            self.errors.push(err);
                            self.input.consume(pos);
                            self.resync = true;
                            return Ok(true);
                        }
                    }
                }
            }
        }
    }
}
