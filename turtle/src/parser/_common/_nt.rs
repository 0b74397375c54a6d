// this module is transparently re-exported by its parent `_common`
use super::{Cursor, Interrupt, PResult, ResultExt};
use crate::parser::{ErrorKind, ParseContext};
use rdfparse_iri::check_absolute_iri;
use rdfparse_term::{Term, Triple};

/// Recognizer for the N-Triples grammar.
///
/// Every statement holds on a single line,
/// and its triple is emitted only once the whole line has been recognized.
pub(crate) struct NTriplesGrammar<'a, 'x, F> {
    cur: Cursor<'a>,
    ctx: &'x mut ParseContext,
    emit: F,
}

impl<'a, 'x, E, F> NTriplesGrammar<'a, 'x, F>
where
    F: FnMut(Triple) -> Result<(), E>,
{
    pub fn new(txt: &'a str, complete: bool, ctx: &'x mut ParseContext, emit: F) -> Self {
        NTriplesGrammar {
            cur: Cursor::new(txt, complete),
            ctx,
            emit,
        }
    }

    /// Production triple, with the empty lines and comments that precede it.
    ///
    /// Return the position right after the statement, or `None` if there is none left.
    pub fn statement(&mut self) -> PResult<Option<usize>, E> {
        self.cur.ws();
        let s = match self.cur.peek()? {
            None => return Ok(None),
            Some(b'<') => self.iri()?,
            Some(b'_') => self.blank_node()?,
            Some(_) => return self.cur.fail("subject"),
        };
        self.cur.hws();
        let p = match self.cur.peek()? {
            Some(b'<') => self.iri()?,
            _ => return self.cur.fail("predicate"),
        };
        self.cur.hws();
        let o = match self.cur.peek()? {
            Some(b'<') => self.iri()?,
            Some(b'_') => self.blank_node()?,
            Some(b'"') => self.literal()?,
            _ => return self.cur.fail("object"),
        };
        self.cur.hws();
        self.cur.expect(b'.', "'.'")?;
        self.cur.hws();
        match self.cur.peek()? {
            None | Some(b'\n' | b'\r' | b'#') => {}
            Some(_) => return self.cur.fail("end of line"),
        }
        (self.emit)(Triple::new_unchecked(s, p, o)).map_err(Interrupt::Sink)?;
        Ok(Some(self.cur.pos()))
    }

    /// Production IRIREF, which must be absolute.
    fn iri(&mut self) -> PResult<Term, E> {
        let pos = self.cur.pos();
        let iri = self.cur.iriref()?;
        check_absolute_iri(&iri, self.ctx.strict_iri)
            .map_err(ErrorKind::from)
            .at(pos)?;
        Ok(self.ctx.iri_term(&iri))
    }

    fn blank_node(&mut self) -> PResult<Term, E> {
        let label = self.cur.blank_node_label()?;
        Ok(self.ctx.bnode_term(label))
    }

    /// Production literal, assuming the opening quote.
    fn literal(&mut self) -> PResult<Term, E> {
        let lex = self.cur.string_literal(false)?;
        match self.cur.peek()? {
            Some(b'@') => {
                let tag = self.cur.lang_tag()?;
                Ok(self.ctx.literal_term(&lex, Some(tag)))
            }
            Some(b'^') => {
                self.cur.advance(1);
                self.cur.expect(b'^', "'^^'")?;
                if self.cur.peek()? != Some(b'<') {
                    return self.cur.fail("datatype IRI");
                }
                let datatype = self.iri()?;
                Ok(self.ctx.typed_literal_term(&lex, &datatype))
            }
            _ => Ok(self.ctx.literal_term(&lex, None)),
        }
    }
}
