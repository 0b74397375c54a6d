// this module implements Display for the types of its parent `lib`
//
// All terms and triples are displayed using the N-Triples syntax,
// which makes their display a canonical identifier.

use crate::{BnodeId, GenericLiteral, GenericTerm, Triple};
use std::borrow::Borrow;
use std::fmt;

impl fmt::Display for BnodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:b{}_{}", self.scope(), self.index())
    }
}

impl<T: Borrow<str>> fmt::Display for GenericLiteral<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        quoted_string(f, self.lexical_form())?;
        f.write_str("\"")?;
        match self {
            GenericLiteral::Simple(_) => Ok(()),
            GenericLiteral::LanguageString(_, tag) => write!(f, "@{}", tag.borrow()),
            GenericLiteral::Typed(_, dt) => write!(f, "^^{}", dt),
        }
    }
}

impl<T: Borrow<str>> fmt::Display for GenericTerm<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenericTerm::Iri(iri) => fmt::Display::fmt(iri, f),
            GenericTerm::BlankNode(id) => fmt::Display::fmt(id, f),
            GenericTerm::Literal(lit) => fmt::Display::fmt(lit, f),
            GenericTerm::Variable(name) => write!(f, "?{}", name.borrow()),
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.s(), self.p(), self.o())
    }
}

fn quoted_string(f: &mut fmt::Formatter<'_>, txt: &str) -> fmt::Result {
    let mut start = 0;
    for (pos, chr) in txt.char_indices() {
        let esc = match chr {
            '\n' => "\\n",
            '\r' => "\\r",
            '"' => "\\\"",
            '\\' => "\\\\",
            _ => continue,
        };
        f.write_str(&txt[start..pos])?;
        f.write_str(esc)?;
        start = pos + 1;
    }
    f.write_str(&txt[start..])
}
