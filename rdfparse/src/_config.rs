// this module is transparently re-exported by its parent `lib`
use crate::{Error, Format, RdfParser};
use rdfparse_api::prefix::Prefix;
use rdfparse_iri::resolve::BaseIri;
use rdfparse_iri::Iri;
use rdfparse_term::SharedInterner;
use rdfparse_turtle::parser::nt::NTriplesParser;
use rdfparse_turtle::parser::turtle::TurtleParser;
use rdfparse_turtle::parser::ErrorMode;

/// The configuration of an [`RdfParser`].
///
/// It is built either with the `with_*` methods,
/// or from textual options with [`ParserConfig::from_options`].
/// It is only checked when [`ParserConfig::parser`] is called,
/// so that an invalid configuration fails before any input is read.
#[derive(Clone, Debug)]
pub struct ParserConfig {
    /// The syntax to parse.
    ///
    /// If `None`, files are parsed according to their extension,
    /// and other inputs are parsed as Turtle.
    pub format: Option<Format>,
    /// Whether IRIs must comply with RFC 3987 (true by default).
    pub strict_iri_validation: bool,
    /// What to do on syntax errors.
    pub error_mode: ErrorMode,
    /// The IRI against which relative IRI-references are resolved.
    pub base_iri: Option<String>,
    /// Prefixes declared before the document starts (ignored by N-Triples).
    pub prefixes: Vec<(String, String)>,
    /// If set, all the terms are interned in this interner.
    pub interner: Option<SharedInterner>,
}

impl ParserConfig {
    /// The default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from `key`/`value` options.
    ///
    /// The recognized keys are
    /// `format` (`ntriples` or `turtle`),
    /// `strictIRIValidation` (`true` or `false`),
    /// `errorMode` (`strict` or `permissive`),
    /// and `baseIRI` (an absolute IRI, or the empty string for no base).
    pub fn from_options<I, K, V>(options: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();
        for (key, value) in options {
            config.set_option(key.as_ref(), value.as_ref())?;
        }
        Ok(config)
    }

    /// Set one option, as described in [`ParserConfig::from_options`].
    pub fn set_option(&mut self, key: &str, value: &str) -> Result<(), Error> {
        let invalid = |reason: String| Error::InvalidOptionValue {
            key: key.into(),
            value: value.into(),
            reason,
        };
        log::trace!("option {key} = {value:?}");
        match key {
            "format" => {
                let format = value.parse::<Format>().map_err(|err| invalid(err.to_string()))?;
                self.format = Some(format);
            }
            "strictIRIValidation" => {
                self.strict_iri_validation = match value {
                    "true" => true,
                    "false" => false,
                    _ => return Err(invalid("expected 'true' or 'false'".into())),
                }
            }
            "errorMode" => {
                self.error_mode = value
                    .parse::<ErrorMode>()
                    .map_err(|err| invalid(err.to_string()))?;
            }
            "baseIRI" if value.is_empty() => self.base_iri = None,
            "baseIRI" => {
                BaseIri::new(value).map_err(|err| invalid(err.to_string()))?;
                self.base_iri = Some(value.into());
            }
            _ => return Err(Error::UnknownOption(key.into())),
        }
        Ok(())
    }

    /// Set the format.
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    /// Set whether IRIs must comply with RFC 3987.
    pub fn with_strict_iri_validation(mut self, strict: bool) -> Self {
        self.strict_iri_validation = strict;
        self
    }

    /// Set the error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Set the base IRI.
    pub fn with_base_iri<T: Into<String>>(mut self, base: T) -> Self {
        self.base_iri = Some(base.into());
        self
    }

    /// Declare a prefix before the document starts.
    ///
    /// The document may redeclare it.
    pub fn with_prefix<P: Into<String>, N: Into<String>>(mut self, prefix: P, ns: N) -> Self {
        self.prefixes.push((prefix.into(), ns.into()));
        self
    }

    /// Intern all the terms in `interner`, which may be shared with other parsers.
    pub fn with_interner(mut self, interner: SharedInterner) -> Self {
        self.interner = Some(interner);
        self
    }

    /// Check this configuration, and build the corresponding parser.
    pub fn parser(&self) -> Result<RdfParser, Error> {
        let base = match &self.base_iri {
            Some(iri) if !iri.is_empty() => {
                Some(BaseIri::new(iri.clone()).map_err(Error::InvalidBase)?)
            }
            _ => None,
        };
        let prefixes = self
            .prefixes
            .iter()
            .map(|(prefix, ns)| {
                let invalid = |reason: String| Error::InvalidPrefix {
                    prefix: prefix.clone(),
                    reason,
                };
                let p: Prefix<Box<str>> =
                    Prefix::new(prefix.as_str().into()).map_err(|e| invalid(e.to_string()))?;
                let n: Iri<Box<str>> =
                    Iri::new(ns.as_str().into()).map_err(|e| invalid(e.to_string()))?;
                Ok((p, n))
            })
            .collect::<Result<Vec<_>, Error>>()?;
        let turtle = TurtleParser {
            base,
            strict_iri: self.strict_iri_validation,
            error_mode: self.error_mode,
            prefixes,
            interner: self.interner.clone(),
        };
        let nt = NTriplesParser {
            strict_iri: self.strict_iri_validation,
            error_mode: self.error_mode,
            interner: self.interner.clone(),
        };
        Ok(RdfParser::new(self.format, turtle, nt))
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            format: None,
            strict_iri_validation: true,
            error_mode: ErrorMode::default(),
            base_iri: None,
            prefixes: vec![],
            interner: None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn default() {
        let config = ParserConfig::new();
        assert_eq!(config.format, None);
        assert!(config.strict_iri_validation);
        assert_eq!(config.error_mode, ErrorMode::Strict);
        assert_eq!(config.base_iri, None);
    }

    #[test]
    fn from_options() -> TestResult {
        let config = ParserConfig::from_options([
            ("format", "nt"),
            ("strictIRIValidation", "false"),
            ("errorMode", "permissive"),
            ("baseIRI", "http://example.org/"),
        ])?;
        assert_eq!(config.format, Some(Format::NTriples));
        assert!(!config.strict_iri_validation);
        assert_eq!(config.error_mode, ErrorMode::Permissive);
        assert_eq!(config.base_iri.as_deref(), Some("http://example.org/"));
        Ok(())
    }

    #[test]
    fn empty_base_means_no_base() -> TestResult {
        let mut config = ParserConfig::new().with_base_iri("http://example.org/");
        config.set_option("baseIRI", "")?;
        assert_eq!(config.base_iri, None);
        Ok(())
    }

    #[test]
    fn options_from_owned_strings() -> TestResult {
        let options = vec![("format".to_string(), "Turtle".to_string())];
        assert_eq!(ParserConfig::from_options(options)?.format, Some(Format::Turtle));
        Ok(())
    }

    #[test]
    fn unknown_option() {
        let res = ParserConfig::from_options([("format", "ttl"), ("strict", "true")]);
        assert!(matches!(res, Err(Error::UnknownOption(key)) if key == "strict"));
    }

    #[test_case("format", "rdfxml")]
    #[test_case("strictIRIValidation", "yes")]
    #[test_case("strictIRIValidation", "TRUE")]
    #[test_case("errorMode", "lenient")]
    #[test_case("baseIRI", "not an iri")]
    #[test_case("baseIRI", "relative/path")]
    fn invalid_option_value(key: &str, value: &str) {
        let res = ParserConfig::from_options([(key, value)]);
        assert!(
            matches!(&res, Err(Error::InvalidOptionValue { key: k, .. }) if k == key),
            "{res:?}"
        );
    }

    #[test]
    fn invalid_base() {
        let res = ParserConfig::new().with_base_iri("foo bar").parser();
        assert!(matches!(res, Err(Error::InvalidBase(_))));
    }

    #[test_case("1a", "http://example.org/"; "invalid label")]
    #[test_case("ex", "ex/"; "relative namespace")]
    fn invalid_prefix(prefix: &str, ns: &str) {
        let res = ParserConfig::new().with_prefix(prefix, ns).parser();
        assert!(matches!(res, Err(Error::InvalidPrefix { .. })));
    }

    #[test]
    fn empty_prefix_label() -> TestResult {
        let parser = ParserConfig::new().with_prefix("", "http://example.org/").parser()?;
        let term = parser.parse_term(":a")?;
        assert_eq!(term.to_string(), "<http://example.org/a>");
        Ok(())
    }
}
