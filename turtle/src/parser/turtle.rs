//! A streaming parser for [Turtle].
//!
//! [Turtle]: https://www.w3.org/TR/turtle/
use crate::parser::_common::{lico, Interrupt, TurtleGrammar};
use crate::parser::{Error, ErrorKind, ErrorMode, ParseContext, Syntax, TripleReader};
use rdfparse_api::parser::TripleParser;
use rdfparse_api::prefix::Prefix;
use rdfparse_iri::resolve::BaseIri;
use rdfparse_iri::Iri;
use rdfparse_term::{SharedInterner, Term, Triple};
use std::convert::Infallible;
use std::io::BufRead;

/// Turtle parser.
#[derive(Clone, Debug)]
pub struct TurtleParser {
    /// The base IRI used by this parser to resolve relative IRI-references.
    pub base: Option<BaseIri<String>>,
    /// Whether IRIs must comply with RFC 3987 (true by default).
    ///
    /// If false, IRIs are only required to be free of the characters forbidden by the grammar,
    /// and relative IRI-references are kept as is when there is no base IRI.
    pub strict_iri: bool,
    /// What to do on syntax errors.
    pub error_mode: ErrorMode,
    /// Prefixes that are declared before the document starts.
    pub prefixes: Vec<(Prefix<Box<str>>, Iri<Box<str>>)>,
    /// If set, all the terms are interned in this interner, instead of a private one.
    pub interner: Option<SharedInterner>,
}

impl TurtleParser {
    /// Build a parser with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// The context in which this parser starts parsing a document.
    pub fn new_context(&self) -> ParseContext {
        let mut ctx = ParseContext::new(self.base.clone(), self.strict_iri);
        if let Some(interner) = &self.interner {
            ctx = ctx.with_interner(interner.clone());
        }
        for (prefix, ns) in &self.prefixes {
            ctx.seed_prefix(prefix, ns);
        }
        ctx
    }

    /// Parse `data` in the given context,
    /// typically recovered from a previous parse with [`TripleReader::into_context`].
    ///
    /// The base, prefixes, interner and blank node scope of `ctx` are kept;
    /// only the IRI checking policy of this parser overrides that of `ctx`.
    pub fn parse_with_context<B: BufRead>(&self, data: B, mut ctx: ParseContext) -> TripleReader<B> {
        ctx.strict_iri = self.strict_iri;
        TripleReader::new(data, Syntax::Turtle, ctx, self.error_mode)
    }

    /// Parse a single term,
    /// i.e. an IRI, prefixed name, blank node, literal, or literal abbreviation.
    ///
    /// Leading and trailing white spaces are allowed, but nothing else.
    pub fn parse_term(&self, txt: &str) -> Result<Term, Error> {
        let mut ctx = self.new_context();
        let mut grammar = TurtleGrammar::new(txt, true, &mut ctx, |_: Triple| {
            Ok::<(), Infallible>(())
        });
        let (kind, pos) = match grammar.term() {
            Ok(term) => return Ok(term),
            Err(Interrupt::Fail(kind, pos)) => (kind, pos),
            Err(Interrupt::Sink(never)) => match never {},
            Err(Interrupt::Incomplete) => (ErrorKind::UnexpectedEof("term".into()), txt.len()),
        };
        let (line, col) = lico(&txt[..pos], 1, 1);
        Err(Error::new(kind, pos, line, col))
    }
}

impl Default for TurtleParser {
    fn default() -> Self {
        TurtleParser {
            base: None,
            strict_iri: true,
            error_mode: ErrorMode::default(),
            prefixes: vec![],
            interner: None,
        }
    }
}

impl<B: BufRead> TripleParser<B> for TurtleParser {
    type Source = TripleReader<B>;
    fn parse(&self, data: B) -> Self::Source {
        TripleReader::new(data, Syntax::Turtle, self.new_context(), self.error_mode)
    }
}

rdfparse_api::def_mod_functions_for_bufread_parser!(TurtleParser, TripleParser);
