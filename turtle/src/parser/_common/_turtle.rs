// this module is transparently re-exported by its parent `_common`
use super::{Cursor, Interrupt, PResult, ResultExt};
use crate::lazy_regex;
use crate::parser::ParseContext;
use rdfparse_api::ns::{rdf, xsd};
use rdfparse_term::{GenericLiteral, GenericTerm, Term, Triple};
use rdfparse_iri::Iri;

/// Recursive descent recognizer for the Turtle grammar.
///
/// Triples are pushed to `emit` as soon as they are complete,
/// so the triples of a statement may have been emitted before the statement fails.
/// Prefix and base declarations take effect only once their statement is complete.
pub(crate) struct TurtleGrammar<'a, 'x, F> {
    cur: Cursor<'a>,
    ctx: &'x mut ParseContext,
    emit: F,
    /// Whether SPARQL variables are accepted as subject, verb and object
    variables: bool,
}

impl<'a, 'x, E, F> TurtleGrammar<'a, 'x, F>
where
    F: FnMut(Triple) -> Result<(), E>,
{
    pub fn new(txt: &'a str, complete: bool, ctx: &'x mut ParseContext, emit: F) -> Self {
        TurtleGrammar {
            cur: Cursor::new(txt, complete),
            ctx,
            emit,
            variables: false,
        }
    }

    /// Accept SPARQL variables, as in the triple patterns of a SPARQL triples block.
    ///
    /// The '.' after the last triple pattern is then optional.
    pub fn with_variables(mut self) -> Self {
        self.variables = true;
        self
    }

    /// Production statement.
    ///
    /// Return the position right after the statement, or `None` if there is none left.
    pub fn statement(&mut self) -> PResult<Option<usize>, E> {
        self.cur.ws();
        match self.cur.peek()? {
            None => return Ok(None),
            Some(b'@') => self.at_directive()?,
            Some(_) => {
                if !self.sparql_directive()? {
                    self.triples()?;
                    self.cur.ws();
                    if self.variables && self.cur.peek()?.is_none() {
                        return Ok(Some(self.cur.pos()));
                    }
                    self.cur.expect(b'.', "'.'")?;
                }
            }
        }
        Ok(Some(self.cur.pos()))
    }

    /// A single term, surrounded by optional white spaces, and spanning the whole text.
    pub fn term(&mut self) -> PResult<Term, E> {
        self.cur.ws();
        let term = if self.cur.peek()? == Some(b'[') {
            self.cur.advance(1);
            self.cur.ws();
            self.cur.expect(b']', "']'")?;
            self.ctx.fresh_bnode()
        } else {
            self.simple_object("term")?
        };
        self.cur.ws();
        match self.cur.peek()? {
            None => Ok(term),
            Some(_) => self.cur.fail("end of input"),
        }
    }

    /// Productions prefixID and base, assuming the leading '@'.
    fn at_directive(&mut self) -> PResult<(), E> {
        lazy_regex!(KEYWORDS = [r"^@base[ \n\r\t#<]", r"^@prefix[ \n\r\t#:]"]);
        self.check_keyword_cut()?;
        match KEYWORDS.matches(self.cur.rest()).iter().next() {
            Some(0) => {
                self.cur.advance("@base".len());
                let (iri, pos) = self.directive_iri()?;
                self.cur.ws();
                self.cur.expect(b'.', "'.'")?;
                self.ctx.declare_base(&iri).at(pos)
            }
            Some(1) => {
                self.cur.advance("@prefix".len());
                let (prefix, iri, pos) = self.prefix_declaration()?;
                self.cur.ws();
                self.cur.expect(b'.', "'.'")?;
                self.ctx.declare_prefix(prefix, &iri).at(pos)
            }
            _ => {
                self.cur.advance(1);
                self.cur.fail("'prefix' or 'base'")
            }
        }
    }

    /// Productions sparqlPrefix and sparqlBase, if they match.
    fn sparql_directive(&mut self) -> PResult<bool, E> {
        lazy_regex!(KEYWORDS = [r"(?i)^base[ \n\r\t#<]", r"(?i)^prefix[ \n\r\t#]"]);
        if !matches!(self.cur.peek()?, Some(b'b' | b'B' | b'p' | b'P')) {
            return Ok(false);
        }
        self.check_keyword_cut()?;
        match KEYWORDS.matches(self.cur.rest()).iter().next() {
            Some(0) => {
                self.cur.advance("base".len());
                let (iri, pos) = self.directive_iri()?;
                self.ctx.declare_base(&iri).at(pos)?;
                Ok(true)
            }
            Some(1) => {
                self.cur.advance("prefix".len());
                let (prefix, iri, pos) = self.prefix_declaration()?;
                self.ctx.declare_prefix(prefix, &iri).at(pos)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Make sure that a directive keyword is not cut by the end of the buffer.
    fn check_keyword_cut(&self) -> PResult<(), E> {
        if !self.cur.complete && self.cur.rest().len() < "@prefix ".len() {
            Err(Interrupt::Incomplete)
        } else {
            Ok(())
        }
    }

    /// PNAME_NS IRIREF, after the 'prefix' keyword.
    fn prefix_declaration(&mut self) -> PResult<(&'a str, String, usize), E> {
        self.cur.ws();
        let (prefix, colon) = self.cur.pname_ns("prefix")?;
        self.cur.set_pos(colon + 1);
        let (iri, pos) = self.directive_iri()?;
        Ok((prefix, iri, pos))
    }

    /// IRIREF, after a directive keyword.
    fn directive_iri(&mut self) -> PResult<(String, usize), E> {
        self.cur.ws();
        let pos = self.cur.pos();
        if self.cur.peek()? != Some(b'<') {
            return self.cur.fail("IRI");
        }
        let iri = self.cur.iriref()?;
        Ok((iri.into_owned(), pos))
    }

    /// Production triples.
    fn triples(&mut self) -> PResult<(), E> {
        match self.cur.peek()? {
            Some(b'[') => {
                self.cur.advance(1);
                self.cur.ws();
                let node = self.ctx.fresh_bnode();
                if self.cur.eat(b']')? {
                    self.cur.ws();
                    return self.predicate_object_list(&node);
                }
                self.predicate_object_list(&node)?;
                self.cur.ws();
                self.cur.expect(b']', "']'")?;
                self.cur.ws();
                // the predicate-object list is optional after a blank node property list
                match self.cur.peek()? {
                    Some(b'.') | None => Ok(()),
                    Some(_) => self.predicate_object_list(&node),
                }
            }
            Some(b'(') => {
                let subject = self.collection()?;
                self.cur.ws();
                self.predicate_object_list(&subject)
            }
            _ => {
                let subject = self.subject()?;
                self.cur.ws();
                self.predicate_object_list(&subject)
            }
        }
    }

    /// Production predicateObjectList.
    fn predicate_object_list(&mut self, subject: &Term) -> PResult<(), E> {
        loop {
            let predicate = self.verb()?;
            self.cur.ws();
            self.object_list(subject, &predicate)?;
            self.cur.ws();
            if !self.cur.eat(b';')? {
                return Ok(());
            }
            // repeated and trailing semicolons are allowed
            loop {
                self.cur.ws();
                if !self.cur.eat(b';')? {
                    break;
                }
            }
            if matches!(self.cur.peek()?, Some(b'.' | b']') | None) {
                return Ok(());
            }
        }
    }

    /// Production objectList.
    fn object_list(&mut self, subject: &Term, predicate: &Term) -> PResult<(), E> {
        loop {
            self.object(subject, predicate)?;
            self.cur.ws();
            if !self.cur.eat(b',')? {
                return Ok(());
            }
            self.cur.ws();
        }
    }

    /// Production object, emitting the triple (`subject`, `predicate`, object).
    fn object(&mut self, subject: &Term, predicate: &Term) -> PResult<(), E> {
        match self.cur.peek()? {
            Some(b'[') => {
                self.cur.advance(1);
                self.cur.ws();
                let node = self.ctx.fresh_bnode();
                self.emit(subject, predicate, &node)?;
                if !self.cur.eat(b']')? {
                    self.predicate_object_list(&node)?;
                    self.cur.ws();
                    self.cur.expect(b']', "']'")?;
                }
                Ok(())
            }
            Some(b'(') => {
                let head = self.collection()?;
                self.emit(subject, predicate, &head)
            }
            _ => {
                let object = self.simple_object("object")?;
                self.emit(subject, predicate, &object)
            }
        }
    }

    /// Production collection, assuming the leading '('.
    ///
    /// Emit the rdf:first/rdf:rest chain, and return its head.
    fn collection(&mut self) -> PResult<Term, E> {
        self.cur.advance(1);
        let first = self.ctx.iri_term(rdf::first);
        let rest = self.ctx.iri_term(rdf::rest);
        let mut head = None;
        let mut prev: Option<Term> = None;
        loop {
            self.cur.ws();
            if self.cur.eat(b')')? {
                break;
            }
            let node = self.ctx.fresh_bnode();
            match &prev {
                None => head = Some(node.clone()),
                Some(prev) => self.emit(prev, &rest, &node)?,
            }
            self.object(&node, &first)?;
            prev = Some(node);
        }
        let nil = self.ctx.iri_term(rdf::nil);
        if let Some(prev) = &prev {
            self.emit(prev, &rest, &nil)?;
        }
        Ok(head.unwrap_or(nil))
    }

    /// Production subject, except for collections.
    fn subject(&mut self) -> PResult<Term, E> {
        match self.cur.peek()? {
            Some(b'?' | b'$') if self.variables => self.variable(),
            Some(b'<') => self.iri(),
            Some(b'_') => self.blank_node(),
            _ => self.prefixed_name("subject"),
        }
    }

    /// Production verb.
    fn verb(&mut self) -> PResult<Term, E> {
        if self.cur.keyword_a()? {
            return Ok(self.ctx.iri_term(rdf::type_));
        }
        match self.cur.peek()? {
            Some(b'?' | b'$') if self.variables => self.variable(),
            Some(b'<') => self.iri(),
            _ => self.prefixed_name("verb"),
        }
    }

    /// The alternatives of production object that do not emit triples.
    fn simple_object(&mut self, expected: &str) -> PResult<Term, E> {
        match self.cur.peek()? {
            Some(b'?' | b'$') if self.variables => self.variable(),
            Some(b'<') => self.iri(),
            Some(b'_') => self.blank_node(),
            Some(b'"' | b'\'') => self.literal(),
            Some(b'+' | b'-' | b'.' | b'0'..=b'9') => {
                let (lex, datatype) = self.cur.numeric(expected)?;
                Ok(self.typed_literal(lex, datatype))
            }
            Some(b't' | b'f') => match self.cur.boolean()? {
                Some(lex) => Ok(self.typed_literal(lex, xsd::boolean)),
                None => self.prefixed_name(expected),
            },
            _ => self.prefixed_name(expected),
        }
    }

    fn iri(&mut self) -> PResult<Term, E> {
        let pos = self.cur.pos();
        let iri = self.cur.iriref()?;
        self.ctx.iri_ref_term(&iri).at(pos)
    }

    fn prefixed_name(&mut self, expected: &str) -> PResult<Term, E> {
        let pos = self.cur.pos();
        let (prefix, local) = self.cur.prefixed_name(expected)?;
        self.ctx.pname_term(prefix, &local).at(pos)
    }

    fn blank_node(&mut self) -> PResult<Term, E> {
        let label = self.cur.blank_node_label()?;
        Ok(self.ctx.bnode_term(label))
    }

    fn variable(&mut self) -> PResult<Term, E> {
        let name = self.cur.variable()?;
        Ok(self.ctx.variable_term(name))
    }

    /// Production RDFLiteral, assuming the opening quote.
    fn literal(&mut self) -> PResult<Term, E> {
        let lex = self.cur.string_literal(true)?;
        // the language tag or datatype marker must immediately follow the closing quote
        match self.cur.peek()? {
            Some(b'@') => {
                let tag = self.cur.lang_tag()?;
                Ok(self.ctx.literal_term(&lex, Some(tag)))
            }
            Some(b'^') => {
                self.cur.advance(1);
                self.cur.expect(b'^', "'^^'")?;
                let datatype = match self.cur.peek()? {
                    Some(b'<') => self.iri()?,
                    _ => self.prefixed_name("datatype")?,
                };
                Ok(self.ctx.typed_literal_term(&lex, &datatype))
            }
            _ => Ok(self.ctx.literal_term(&lex, None)),
        }
    }

    fn typed_literal(&mut self, lex: &str, datatype: &str) -> Term {
        self.ctx.make_term(GenericTerm::Literal(GenericLiteral::Typed(
            lex,
            Iri::new_unchecked(datatype),
        )))
    }

    fn emit(&mut self, s: &Term, p: &Term, o: &Term) -> PResult<(), E> {
        (self.emit)(Triple::new_unchecked(s.clone(), p.clone(), o.clone())).map_err(Interrupt::Sink)
    }
}
