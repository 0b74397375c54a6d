//! A streaming parser for the triples blocks of [SPARQL] queries,
//! i.e. Turtle triples where any term may be a variable (`?name` or `$name`).
//!
//! The '.' after the last triple pattern is optional.
//!
//! [SPARQL]: https://www.w3.org/TR/sparql11-query/#rTriplesBlock
use crate::parser::turtle::TurtleParser;
use crate::parser::{Syntax, TripleReader};
use rdfparse_api::parser::TripleParser;
use std::io::BufRead;

/// SPARQL triples block parser.
///
/// The [triples](rdfparse_term::Triple) it produces are triple patterns,
/// whose components may be [variables](rdfparse_term::GenericTerm::Variable).
#[derive(Clone, Debug, Default)]
pub struct TriplesBlockParser {
    /// The base IRI, IRI checking policy, error mode, initial prefixes and interner,
    /// with the same meaning as for Turtle.
    pub turtle: TurtleParser,
}

impl TriplesBlockParser {
    /// Build a parser with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }
}

impl From<TurtleParser> for TriplesBlockParser {
    fn from(turtle: TurtleParser) -> Self {
        TriplesBlockParser { turtle }
    }
}

impl<B: BufRead> TripleParser<B> for TriplesBlockParser {
    type Source = TripleReader<B>;
    fn parse(&self, data: B) -> Self::Source {
        TripleReader::new(
            data,
            Syntax::TriplesBlock,
            self.turtle.new_context(),
            self.turtle.error_mode,
        )
    }
}

rdfparse_api::def_mod_functions_for_bufread_parser!(TriplesBlockParser, TripleParser);

#[cfg(test)]
mod test {
    use super::*;
    use crate::parser::{ErrorKind, ErrorMode};
    use crate::test_setup;
    use rdfparse_api::ns::rdf;
    use rdfparse_api::prefix::Prefix;
    use rdfparse_api::source::{StreamError::SourceError, TripleSource};
    use rdfparse_iri::Iri;
    use rdfparse_term::Triple;
    use test_case::test_case;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn parser(prefixes: &[(&str, &str)]) -> TriplesBlockParser {
        TurtleParser {
            prefixes: prefixes
                .iter()
                .map(|(p, ns)| (Prefix::new_unchecked((*p).into()), Iri::new_unchecked((*ns).into())))
                .collect(),
            ..TurtleParser::new()
        }
        .into()
    }

    fn patterns(p: &TriplesBlockParser, txt: &str) -> Result<Vec<String>, Box<dyn std::error::Error>> {
        let triples = p.parse_str(txt).collect_triples()?;
        Ok(triples.iter().map(Triple::to_string).collect())
    }

    #[test]
    fn relative_iri_without_base() -> TestResult {
        test_setup();
        let mut p = TriplesBlockParser::new();
        p.turtle.strict_iri = false;
        assert_eq!(patterns(&p, "?g <sad> ?who . ")?, ["?g <sad> ?who ."]);
        Ok(())
    }

    #[test]
    fn seeded_prefix() -> TestResult {
        let p = parser(&[("foaf", "http://xmlns.com/foaf/0.1/")]);
        assert_eq!(
            patterns(&p, "?x foaf:name ?name .")?,
            ["?x <http://xmlns.com/foaf/0.1/name> ?name ."]
        );
        Ok(())
    }

    #[test]
    fn predicate_object_list() -> TestResult {
        let p = parser(&[
            ("dc", "http://purl.org/dc/elements/1.1/"),
            ("ns", "http://example.org/ns#"),
        ]);
        let got = patterns(&p, "?book dc:title ?title ;\n         ns:price ?price .")?;
        assert_eq!(
            got,
            [
                "?book <http://purl.org/dc/elements/1.1/title> ?title .",
                "?book <http://example.org/ns#price> ?price .",
            ]
        );
        Ok(())
    }

    #[test]
    fn several_patterns() -> TestResult {
        let p = parser(&[("ex", "http://example.org/")]);
        let got = patterns(
            &p,
            "?buch ex:hatVerlag <http://springer.com/Verlag> . ?buch ex:titel ?title . ?buch ex:autor ?autor . ",
        )?;
        assert_eq!(
            got,
            [
                "?buch <http://example.org/hatVerlag> <http://springer.com/Verlag> .",
                "?buch <http://example.org/titel> ?title .",
                "?buch <http://example.org/autor> ?autor .",
            ]
        );
        Ok(())
    }

    #[test]
    fn blank_nodes_and_variables() -> TestResult {
        let p = parser(&[("wde", "http://www.wikidata.org/entity/")]);
        let triples = p
            .parse_str(
                "?var1 <http://www.wikidata.org/prop/P463> _:b0 . \
                 _:b0 <http://www.wikidata.org/prop/statement/P463> wde:Q202479 ; \
                 <http://www.wikidata.org/prop/qualifier/P580> ?var2 .",
            )
            .collect_triples()?;
        assert_eq!(triples.len(), 3);
        assert_eq!(triples[0].s().variable(), Some("var1"));
        assert!(triples[0].o().is_blank_node());
        assert_eq!(triples[0].o(), triples[1].s());
        assert_eq!(triples[1].s(), triples[2].s());
        assert_eq!(triples[1].o().to_string(), "<http://www.wikidata.org/entity/Q202479>");
        assert_eq!(triples[2].o().variable(), Some("var2"));
        Ok(())
    }

    #[test_case("$s ?p $o", &["?s ?p ?o ."]; "dollar and no final dot")]
    #[test_case("?s ?p ?o . ?o ?q ?r", &["?s ?p ?o .", "?o ?q ?r ."]; "no final dot after several")]
    #[test_case("?s a ?class .", &["?s <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> ?class ."]; "keyword a")]
    #[test_case("?s <tag:p> 42, 'x'@en .", &["?s <tag:p> \"42\"^^<http://www.w3.org/2001/XMLSchema#integer> .", "?s <tag:p> \"x\"@en ."]; "literals")]
    #[test_case("[ <tag:p> ?o ] .", &["_ <tag:p> ?o ."]; "blank node property list")]
    fn variables(txt: &str, expected: &[&str]) -> TestResult {
        let got = patterns(&TriplesBlockParser::new(), txt)?;
        assert_eq!(got.len(), expected.len());
        for (g, e) in got.iter().zip(expected) {
            if let Some(rest) = e.strip_prefix('_') {
                assert!(g.starts_with("_:") && g.ends_with(rest), "{g}");
            } else {
                assert_eq!(g, e);
            }
        }
        Ok(())
    }

    #[test]
    fn variables_in_collection() -> TestResult {
        let triples = TriplesBlockParser::new()
            .parse_str("?s <tag:p> (?a $b) .")
            .collect_triples()?;
        assert_eq!(triples.len(), 5);
        let firsts: Vec<_> = triples
            .iter()
            .filter(|t| t.p().iri().is_some_and(|iri| iri == rdf::first))
            .map(|t| t.o().to_string())
            .collect();
        assert_eq!(firsts, ["?a", "?b"]);
        Ok(())
    }

    #[test]
    fn same_name_same_term() -> TestResult {
        let triples = TriplesBlockParser::new()
            .parse_str("?x <tag:p> ?y . $y <tag:q> $x .")
            .collect_triples()?;
        assert_eq!(triples[0].s(), triples[1].o());
        assert_eq!(triples[0].o(), triples[1].s());
        Ok(())
    }

    #[test_case("?x <tag:p> <tag:o> .", (1, 1); "subject")]
    #[test_case("<tag:s> ?p <tag:o> .", (1, 9); "verb")]
    #[test_case("<tag:s> <tag:p> $o .", (1, 17); "object")]
    fn variables_are_not_turtle(txt: &str, exp_pos: (usize, usize)) {
        let mut ts = TurtleParser::new().parse_str(txt);
        let Err(SourceError(err)) = ts.try_for_each_triple(|_| Ok::<_, std::convert::Infallible>(())) else {
            panic!()
        };
        assert_eq!(err.position(), exp_pos);
    }

    #[test_case("?s ?p", (1, 6); "missing object")]
    #[test_case("?s ?p ?o ?x", (1, 10); "missing dot between patterns")]
    #[test_case("?s ?p ? .", (1, 8); "empty variable name")]
    #[test_case("?s ?p 'x'^^?dt", (1, 12); "variable datatype")]
    fn syntax_errors(txt: &str, exp_pos: (usize, usize)) {
        let res = TriplesBlockParser::new().parse_str(txt).collect_triples();
        let err = res.unwrap_err();
        assert!(
            matches!(err.kind(), ErrorKind::Syntax(_) | ErrorKind::UnexpectedEof(_)),
            "{err:#?}"
        );
        assert_eq!(err.position(), exp_pos);
    }

    #[test]
    fn permissive() -> TestResult {
        let p: TriplesBlockParser = TurtleParser {
            error_mode: ErrorMode::Permissive,
            ..TurtleParser::new()
        }
        .into();
        let mut ts = p.parse_str("?s <tag:p> ?o1 .\n?s ?p .\n?s <tag:p> ?o3");
        let mut objects = vec![];
        ts.for_each_triple(|t| objects.push(t.o().to_string()))?;
        assert_eq!(objects, ["?o1", "?o3"]);
        assert_eq!(ts.errors().len(), 1);
        assert_eq!(ts.errors()[0].position(), (2, 7));
        Ok(())
    }
}
