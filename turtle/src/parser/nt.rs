//! A streaming parser for [N-Triples].
//!
//! [N-Triples]: https://www.w3.org/TR/n-triples/

use crate::parser::{ErrorMode, ParseContext, Syntax, TripleReader};
use rdfparse_api::parser::TripleParser;
use rdfparse_term::SharedInterner;
use std::io::BufRead;

/// N-Triples parser.
#[derive(Clone, Debug)]
pub struct NTriplesParser {
    /// Whether IRIs must comply with RFC 3987 (true by default).
    ///
    /// If false, IRIs are only required to have a scheme,
    /// and to be free of the characters forbidden by the grammar.
    pub strict_iri: bool,
    /// What to do on syntax errors.
    pub error_mode: ErrorMode,
    /// If set, all the terms are interned in this interner, instead of a private one.
    pub interner: Option<SharedInterner>,
}

impl NTriplesParser {
    /// Build a parser with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for NTriplesParser {
    fn default() -> Self {
        NTriplesParser {
            strict_iri: true,
            error_mode: ErrorMode::default(),
            interner: None,
        }
    }
}

impl<B: BufRead> TripleParser<B> for NTriplesParser {
    type Source = TripleReader<B>;
    fn parse(&self, data: B) -> Self::Source {
        let mut ctx = ParseContext::new(None, self.strict_iri);
        if let Some(interner) = &self.interner {
            ctx = ctx.with_interner(interner.clone());
        }
        TripleReader::new(data, Syntax::NTriples, ctx, self.error_mode)
    }
}

rdfparse_api::def_mod_functions_for_bufread_parser!(NTriplesParser, TripleParser);

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
