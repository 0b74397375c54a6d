// this module is transparently re-exported by its parent `parser`
use crate::parser::ErrorKind;
use rdfparse_api::prefix::{Prefix, PrefixLog};
use rdfparse_iri::resolve::BaseIri;
use rdfparse_iri::{check_iri_ref, has_scheme, InvalidIri, Iri};
use rdfparse_term::{
    BnodeScope, GenericLiteral, GenericTerm, SharedInterner, Term, TermFactory, TermInterner,
    TermRef,
};
use std::sync::Arc;

/// The state shared by all the statements of a document:
/// base IRI, prefix declarations, blank node scope and term interner.
///
/// A context is created for each parse,
/// but can be [recovered](crate::parser::TripleReader::into_context) at the end of a parse
/// and [reused](crate::parser::turtle::TurtleParser::parse_with_context) for the next one,
/// so that several documents share the same prefixes and blank nodes.
#[derive(Debug)]
pub struct ParseContext {
    base: Option<BaseIri<String>>,
    prefixes: PrefixLog,
    bnodes: BnodeScope,
    terms: Terms,
    pub(crate) strict_iri: bool,
    buf: String,
}

#[derive(Debug)]
enum Terms {
    Local(TermInterner),
    Shared(SharedInterner),
}

impl TermFactory for Terms {
    fn make_term(&mut self, term: TermRef) -> Term {
        match self {
            Terms::Local(interner) => interner.make_term(term),
            Terms::Shared(interner) => interner.make_term(term),
        }
    }
}

impl ParseContext {
    /// A fresh context, with a private interner.
    ///
    /// If `strict_iri` is true, IRIs must comply with RFC 3987;
    /// otherwise, only the characters forbidden by the grammar are rejected.
    pub fn new(base: Option<BaseIri<String>>, strict_iri: bool) -> Self {
        ParseContext {
            base,
            prefixes: PrefixLog::new(),
            bnodes: BnodeScope::new(),
            terms: Terms::Local(TermInterner::new()),
            strict_iri,
            buf: String::new(),
        }
    }

    /// Use `interner` instead of a private interner.
    ///
    /// Terms created before this call are not transferred to `interner`.
    pub fn with_interner(mut self, interner: SharedInterner) -> Self {
        self.terms = Terms::Shared(interner);
        self
    }

    /// The current base IRI, if any.
    pub fn base(&self) -> Option<&str> {
        self.base.as_ref().map(BaseIri::as_str)
    }

    /// The history of prefix declarations.
    pub fn prefixes(&self) -> &PrefixLog {
        &self.prefixes
    }

    /// The blank node scope.
    pub fn bnodes(&self) -> &BnodeScope {
        &self.bnodes
    }

    /// The blank node scope, mutably.
    pub fn bnodes_mut(&mut self) -> &mut BnodeScope {
        &mut self.bnodes
    }

    /// Whether IRIs are checked against RFC 3987.
    pub fn strict_iri(&self) -> bool {
        self.strict_iri
    }

    /// The number of distinct terms in the private interner of this context
    /// (or in the shared interner, if one is used).
    pub fn term_count(&self) -> usize {
        match &self.terms {
            Terms::Local(interner) => interner.len(),
            Terms::Shared(interner) => interner.len(),
        }
    }

    /// Declare that `prefix` stands for `iri` in the following statements.
    ///
    /// `iri` is resolved against the current base.
    pub fn declare_prefix(&mut self, prefix: &str, iri: &str) -> Result<(), ErrorKind> {
        let prefix = Prefix::new(Box::<str>::from(prefix))
            .map_err(|err| ErrorKind::Syntax(format!("valid prefix, got '{}'", err.0)))?;
        let ns = self.resolve_relative(iri)?;
        log::trace!("prefix {prefix} <{ns}>");
        self.prefixes.declare(prefix, ns.into());
        Ok(())
    }

    /// Declare a prefix whose namespace is known to be valid.
    pub(crate) fn seed_prefix(&mut self, prefix: &Prefix<Box<str>>, ns: &Iri<Box<str>>) {
        self.prefixes.declare(prefix.clone(), Arc::from(ns.as_str()));
    }

    /// Set the base IRI for the following statements.
    ///
    /// `iri` is itself resolved against the current base.
    pub fn declare_base(&mut self, iri: &str) -> Result<(), ErrorKind> {
        let resolved = self.resolve_relative(iri)?;
        let base = BaseIri::new(resolved)?;
        log::trace!("base <{}>", base.as_str());
        self.base = Some(base);
        Ok(())
    }

    /// Expand the prefixed name `prefix:local` into an IRI.
    pub fn resolve_pname(&self, prefix: &str, local: &str) -> Result<String, ErrorKind> {
        let mut buf = String::new();
        self.resolve_pname_into(prefix, local, &mut buf)?;
        Ok(buf)
    }

    /// Resolve the IRI reference `iri` against the current base.
    ///
    /// IRIs with a scheme are returned unchanged.
    /// Relative IRIs are an error if there is no base, unless IRIs are checked laxly,
    /// in which case they are returned unchanged.
    /// When IRIs are checked laxly, relative IRIs that do not comply with RFC 3987
    /// are still resolved against the base.
    pub fn resolve_relative(&self, iri: &str) -> Result<String, ErrorKind> {
        let mut buf = String::new();
        self.resolve_relative_into(iri, &mut buf)?;
        Ok(buf)
    }

    fn resolve_pname_into(&self, prefix: &str, local: &str, buf: &mut String) -> Result<(), ErrorKind> {
        let Some(ns) = self.prefixes.get_namespace(prefix) else {
            return Err(ErrorKind::UnresolvedPrefix(prefix.into()));
        };
        buf.clear();
        buf.push_str(ns);
        buf.push_str(local);
        check_iri_ref(buf, self.strict_iri)?;
        Ok(())
    }

    fn resolve_relative_into(&self, iri: &str, buf: &mut String) -> Result<(), ErrorKind> {
        check_iri_ref(iri, self.strict_iri)?;
        if has_scheme(iri) {
            buf.clear();
            buf.push_str(iri);
            return Ok(());
        }
        match &self.base {
            Some(base) if self.strict_iri => {
                base.resolve_into(iri, buf)?;
            }
            Some(base) => {
                base.resolve_lax_into(iri, buf);
            }
            None if self.strict_iri => {
                return Err(InvalidIri::new(iri, "relative IRI with no base").into());
            }
            None => {
                buf.clear();
                buf.push_str(iri);
            }
        }
        Ok(())
    }

    /// Get an owned (and possibly shared) term equal to `term`.
    pub fn make_term(&mut self, term: TermRef) -> Term {
        self.terms.make_term(term)
    }

    pub(crate) fn iri_term(&mut self, iri: &str) -> Term {
        self.terms.make_term(GenericTerm::Iri(Iri::new_unchecked(iri)))
    }

    /// The IRI term for the IRI reference `iri`, resolved against the current base.
    pub(crate) fn iri_ref_term(&mut self, iri: &str) -> Result<Term, ErrorKind> {
        let mut buf = std::mem::take(&mut self.buf);
        let res = self
            .resolve_relative_into(iri, &mut buf)
            .map(|()| self.iri_term(&buf));
        self.buf = buf;
        res
    }

    /// The IRI term for the prefixed name `prefix:local`.
    pub(crate) fn pname_term(&mut self, prefix: &str, local: &str) -> Result<Term, ErrorKind> {
        let mut buf = std::mem::take(&mut self.buf);
        let res = self
            .resolve_pname_into(prefix, local, &mut buf)
            .map(|()| self.iri_term(&buf));
        self.buf = buf;
        res
    }

    pub(crate) fn literal_term(&mut self, lex: &str, tag: Option<&str>) -> Term {
        let lit = match tag {
            None => GenericLiteral::Simple(lex),
            Some(tag) => GenericLiteral::LanguageString(lex, tag),
        };
        self.terms.make_term(GenericTerm::Literal(lit))
    }

    /// A literal typed with `datatype`, which must be an IRI term.
    pub(crate) fn typed_literal_term(&mut self, lex: &str, datatype: &Term) -> Term {
        let lit = match datatype.iri() {
            Some(dt) => GenericLiteral::new_typed(lex, dt),
            None => GenericLiteral::Simple(lex),
        };
        self.terms.make_term(GenericTerm::Literal(lit))
    }

    pub(crate) fn bnode_term(&mut self, label: &str) -> Term {
        GenericTerm::BlankNode(self.bnodes.label_of(label))
    }

    pub(crate) fn fresh_bnode(&mut self) -> Term {
        GenericTerm::BlankNode(self.bnodes.fresh())
    }

    pub(crate) fn variable_term(&mut self, name: &str) -> Term {
        self.terms.make_term(GenericTerm::Variable(name))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_setup;
    use test_case::test_case;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn ctx(base: Option<&str>, strict: bool) -> ParseContext {
        let base = base.map(|b| BaseIri::new(b.to_string()).unwrap());
        ParseContext::new(base, strict)
    }

    #[test_case("http://x/a", "http://x/a"; "absolute")]
    #[test_case("c", "http://x/b/c"; "relative")]
    #[test_case("../c", "http://x/c"; "parent")]
    #[test_case("#f", "http://x/b/a#f"; "fragment")]
    #[test_case("", "http://x/b/a"; "empty")]
    fn resolve_relative(iri: &str, expected: &str) -> TestResult {
        test_setup();
        let ctx = ctx(Some("http://x/b/a"), true);
        assert_eq!(ctx.resolve_relative(iri)?, expected);
        Ok(())
    }

    #[test]
    fn absolute_iris_are_unchanged() -> TestResult {
        let ctx = ctx(Some("http://x/"), true);
        // resolution would remove the dot segments
        assert_eq!(ctx.resolve_relative("http://y/a/../b")?, "http://y/a/../b");
        Ok(())
    }

    #[test]
    fn relative_without_base() {
        assert!(matches!(
            ctx(None, true).resolve_relative("a"),
            Err(ErrorKind::InvalidIri(_))
        ));
        assert_eq!(ctx(None, false).resolve_relative("a").unwrap(), "a");
    }

    #[test]
    fn lax_iris() {
        assert!(ctx(None, true).resolve_relative("http://a/%zz").is_err());
        assert!(ctx(None, false).resolve_relative("http://a/%zz").is_ok());
        assert!(ctx(None, false).resolve_relative("http://a/ b").is_err());
    }

    #[test]
    fn prefixes() -> TestResult {
        test_setup();
        let mut ctx = ctx(Some("http://x/"), true);
        assert!(matches!(
            ctx.resolve_pname("ex", "a"),
            Err(ErrorKind::UnresolvedPrefix(p)) if p == "ex"
        ));
        ctx.declare_prefix("ex", "ns/")?;
        assert_eq!(ctx.resolve_pname("ex", "a")?, "http://x/ns/a");
        ctx.declare_prefix("ex", "http://y/")?;
        assert_eq!(ctx.resolve_pname("ex", "a")?, "http://y/a");
        assert_eq!(ctx.prefixes().len(), 2);
        assert!(ctx.declare_prefix("0x", "http://y/").is_err());
        Ok(())
    }

    #[test]
    fn base_is_resolved_against_previous_base() -> TestResult {
        let mut ctx = ctx(None, true);
        assert!(ctx.declare_base("foo/").is_err());
        ctx.declare_base("http://x/a/")?;
        ctx.declare_base("../b/")?;
        assert_eq!(ctx.base(), Some("http://x/b/"));
        Ok(())
    }

    #[test]
    fn terms_are_interned() -> TestResult {
        let mut ctx = ctx(Some("http://x/"), true);
        ctx.declare_prefix("", "http://x/")?;
        let t1 = ctx.iri_ref_term("a")?;
        let t2 = ctx.pname_term("", "a")?;
        assert_eq!(t1, t2);
        assert_eq!(ctx.term_count(), 1);
        ctx.literal_term("a", None);
        ctx.literal_term("a", Some("en"));
        assert_eq!(ctx.term_count(), 3);
        Ok(())
    }

    #[test]
    fn xsd_string_literals_are_simple() {
        let mut ctx = ctx(None, true);
        let dt = ctx.iri_term(rdfparse_api::ns::xsd::string);
        let t1 = ctx.typed_literal_term("a", &dt);
        let t2 = ctx.literal_term("a", None);
        assert_eq!(t1, t2);
    }

    #[test]
    fn shared_interner() -> TestResult {
        let shared = SharedInterner::new();
        let mut ctx1 = ctx(None, true).with_interner(shared.clone());
        let mut ctx2 = ctx(None, true).with_interner(shared.clone());
        ctx1.iri_ref_term("http://x/a")?;
        ctx2.iri_ref_term("http://x/a")?;
        ctx2.iri_ref_term("http://x/b")?;
        assert_eq!(shared.len(), 2);
        assert_eq!(ctx1.term_count(), 2);
        Ok(())
    }

    #[test]
    fn blank_nodes() {
        let mut ctx = ctx(None, true);
        let b1 = ctx.bnode_term("x");
        let b2 = ctx.fresh_bnode();
        assert_ne!(b1, b2);
        assert_eq!(ctx.bnode_term("x"), b1);
        let mut other = ParseContext::new(None, true);
        assert_ne!(other.bnode_term("x"), b1);
    }
}
