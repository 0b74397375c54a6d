//! Terminal productions, shared by the Turtle and N-Triples grammars.
use super::{unescape_literal, unescape_numeric, Cursor, Interrupt, PResult, ResultExt};
use crate::lazy_regex;
use crate::parser::ErrorKind;
use rdfparse_api::ns::xsd;
use std::borrow::Cow;

impl<'a> Cursor<'a> {
    /// Production IRIREF, assuming the leading '<'.
    ///
    /// Return the IRI without its delimiters, with its escape sequences decoded.
    /// Whether the IRI is acceptable is left to the caller.
    pub fn iriref<E>(&mut self) -> PResult<Cow<'a, str>, E> {
        debug_assert_eq!(self.txt.as_bytes()[self.pos], b'<');
        let start = self.pos + 1;
        let bytes = self.txt.as_bytes();
        let mut buf: Option<String> = None;
        let mut seg = start;
        let mut i = start;
        loop {
            match bytes.get(i) {
                Some(b'>') => break,
                Some(b'\\') => {
                    let (chr, len) = match unescape_numeric(&self.txt[i + 1..]) {
                        Ok(ok) => ok,
                        Err(_) if !self.complete && self.txt.len() - i < 10 => {
                            return Err(Interrupt::Incomplete)
                        }
                        Err(kind) => return Err(Interrupt::Fail(kind, i)),
                    };
                    let buf = buf.get_or_insert_with(String::new);
                    buf.push_str(&self.txt[seg..i]);
                    buf.push(chr);
                    i += 1 + len;
                    seg = i;
                }
                Some(b'\n' | b'\r' | b'<') => {
                    self.pos = i;
                    return self.fail("'>'");
                }
                Some(_) => i += 1,
                None => {
                    self.pos = i;
                    return self.fail("'>'");
                }
            }
        }
        self.pos = i + 1;
        Ok(match buf {
            None => Cow::Borrowed(&self.txt[start..i]),
            Some(mut buf) => {
                buf.push_str(&self.txt[seg..i]);
                Cow::Owned(buf)
            }
        })
    }

    /// Production BLANK_NODE_LABEL, assuming the leading '_'.
    ///
    /// Return the label without the leading "_:".
    pub fn blank_node_label<E>(&mut self) -> PResult<&'a str, E> {
        debug_assert_eq!(self.txt.as_bytes()[self.pos], b'_');
        self.advance(1);
        self.expect(b':', "':'")?;
        lazy_regex!(
            LABEL = r#"(?x) ^
            # (PN_CHARS_U | [0-9]) ((PN_CHARS | '.')* PN_CHARS)?
            [
             A-Z a-z \xC0-\xD6 \xD8-\xF6 \xF8-\u{02FF} \u{0370}-\u{037D}
             \u{037F}-\u{1FFF} \u{200C}-\u{200D} \u{2070}-\u{218F} \u{2C00}-\u{2FEF}
             \u{3001}-\u{D7FF} \u{F900}-\u{FDCF} \u{FDF0}-\u{FFFD} \u{10000}-\u{EFFFF}
             _
             0-9
            ]
            (?:
                [
                 A-Z a-z \xC0-\xD6 \xD8-\xF6 \xF8-\u{02FF} \u{0370}-\u{037D}
                 \u{037F}-\u{1FFF} \u{200C}-\u{200D} \u{2070}-\u{218F} \u{2C00}-\u{2FEF}
                 \u{3001}-\u{D7FF} \u{F900}-\u{FDCF} \u{FDF0}-\u{FFFD} \u{10000}-\u{EFFFF}
                 _
                 \- 0-9 \xB7 \u{0300}-\u{036F} \u{203F}-\u{2040}
                 .
                ]*
                [
                 A-Z a-z \xC0-\xD6 \xD8-\xF6 \xF8-\u{02FF} \u{0370}-\u{037D}
                 \u{037F}-\u{1FFF} \u{200C}-\u{200D} \u{2070}-\u{218F} \u{2C00}-\u{2FEF}
                 \u{3001}-\u{D7FF} \u{F900}-\u{FDCF} \u{FDF0}-\u{FFFD} \u{10000}-\u{EFFFF}
                 _
                 \- 0-9 \xB7 \u{0300}-\u{036F} \u{203F}-\u{2040}
                ]
            )?
        "#
        );
        match LABEL.find(self.rest()) {
            None => self.fail("blank node label"),
            Some(m) => {
                self.check_cut(m.end())?;
                let label = m.as_str();
                self.advance(m.end());
                Ok(label)
            }
        }
    }

    /// Productions VAR1 and VAR2 of SPARQL, assuming the leading '?' or '$'.
    ///
    /// Return the name of the variable.
    pub fn variable<E>(&mut self) -> PResult<&'a str, E> {
        debug_assert!(matches!(self.txt.as_bytes()[self.pos], b'?' | b'$'));
        self.advance(1);
        lazy_regex!(
            VARNAME = r#"(?x) ^
            # (PN_CHARS_U | [0-9]) (PN_CHARS_U | [0-9] | #x00B7 | [#x0300-#x036F] | [#x203F-#x2040])*
            [
             A-Z a-z \xC0-\xD6 \xD8-\xF6 \xF8-\u{02FF} \u{0370}-\u{037D}
             \u{037F}-\u{1FFF} \u{200C}-\u{200D} \u{2070}-\u{218F} \u{2C00}-\u{2FEF}
             \u{3001}-\u{D7FF} \u{F900}-\u{FDCF} \u{FDF0}-\u{FFFD} \u{10000}-\u{EFFFF}
             _
             0-9
            ]
            [
             A-Z a-z \xC0-\xD6 \xD8-\xF6 \xF8-\u{02FF} \u{0370}-\u{037D}
             \u{037F}-\u{1FFF} \u{200C}-\u{200D} \u{2070}-\u{218F} \u{2C00}-\u{2FEF}
             \u{3001}-\u{D7FF} \u{F900}-\u{FDCF} \u{FDF0}-\u{FFFD} \u{10000}-\u{EFFFF}
             _
             0-9 \xB7 \u{0300}-\u{036F} \u{203F}-\u{2040}
            ]*
        "#
        );
        match VARNAME.find(self.rest()) {
            None => self.fail("variable name"),
            Some(m) => {
                self.check_cut(m.end())?;
                let name = m.as_str();
                self.advance(m.end());
                Ok(name)
            }
        }
    }

    /// Productions STRING_LITERAL_QUOTE and STRING_LITERAL_SINGLE_QUOTE,
    /// plus their long (triple-quoted) variants if `long_allowed`,
    /// assuming the opening quote.
    ///
    /// Return the lexical form with its escape sequences decoded.
    pub fn string_literal<E>(&mut self, long_allowed: bool) -> PResult<Cow<'a, str>, E> {
        let start = self.pos;
        let bytes = self.txt.as_bytes();
        let quote = bytes[start];
        debug_assert!(quote == b'"' || quote == b'\'');
        let triple = [quote; 3];
        let long = if long_allowed {
            let head = &bytes[start..(start + 3).min(bytes.len())];
            if head.len() < 3 && !self.complete && head.iter().all(|b| *b == quote) {
                return Err(Interrupt::Incomplete);
            }
            head == triple
        } else {
            false
        };
        let delim = if long { 3 } else { 1 };
        let mut buf: Option<String> = None;
        let mut seg = start + delim;
        let mut i = seg;
        loop {
            match bytes.get(i) {
                None if self.complete => {
                    return Err(Interrupt::Fail(ErrorKind::UnterminatedLiteral, start))
                }
                None => return Err(Interrupt::Incomplete),
                Some(b'\\') => {
                    let (chr, len) = match unescape_literal(&self.txt[i + 1..]) {
                        Ok(ok) => ok,
                        Err(_) if !self.complete && self.txt.len() - i < 10 => {
                            return Err(Interrupt::Incomplete)
                        }
                        Err(kind) => return Err(Interrupt::Fail(kind, i)),
                    };
                    let buf = buf.get_or_insert_with(String::new);
                    buf.push_str(&self.txt[seg..i]);
                    buf.push(chr);
                    i += 1 + len;
                    seg = i;
                }
                Some(b) if *b == quote => {
                    if !long {
                        break;
                    }
                    if !self.complete && i + 3 > bytes.len() {
                        return Err(Interrupt::Incomplete);
                    }
                    if bytes[i..].starts_with(&triple) {
                        break;
                    }
                    i += 1;
                }
                Some(b'\n' | b'\r') if !long => {
                    return Err(Interrupt::Fail(ErrorKind::UnterminatedLiteral, start))
                }
                Some(b'\n' | b'\r' | b'\t') => i += 1,
                Some(b) if *b < 0x20 => {
                    return Err(Interrupt::Fail(ErrorKind::ControlCharacter(*b as u32), i))
                }
                Some(_) => i += 1,
            }
        }
        self.pos = i + delim;
        Ok(match buf {
            None => Cow::Borrowed(&self.txt[seg..i]),
            Some(mut buf) => {
                buf.push_str(&self.txt[seg..i]);
                Cow::Owned(buf)
            }
        })
    }

    /// Production LANGTAG, assuming the leading '@'.
    ///
    /// Return the tag without the '@'.
    pub fn lang_tag<E>(&mut self) -> PResult<&'a str, E> {
        debug_assert_eq!(self.txt.as_bytes()[self.pos], b'@');
        self.advance(1);
        lazy_regex!(LANG = r"(?x) ^ [a-zA-Z]+ (?: - [a-zA-Z0-9]+ )*");
        match LANG.find(self.rest()) {
            None => self.fail("language tag"),
            Some(m) => {
                self.check_cut(m.end())?;
                self.advance(m.end());
                Ok(m.as_str())
            }
        }
    }

    /// Productions INTEGER, DECIMAL and DOUBLE.
    ///
    /// Return the lexical form, verbatim, and the corresponding datatype.
    pub fn numeric<E>(&mut self, expected: &str) -> PResult<(&'a str, &'static str), E> {
        lazy_regex!(
            NUMERIC = r"(?x) ^
            [+-]?
            (?:
              (?: [0-9]+ (?: \. [0-9]*)? | \. [0-9]+ ) [eE] [+-]? [0-9]+
            |
              [0-9]* \. [0-9]+
            |
              [0-9]+
            )
        "
        );
        let Some(m) = NUMERIC.find(self.rest()) else {
            return self.fail(expected);
        };
        self.check_cut(m.end())?;
        let lex = m.as_str();
        let datatype = if lex.contains(['e', 'E']) {
            xsd::double
        } else if lex.contains('.') {
            xsd::decimal
        } else {
            xsd::integer
        };
        self.advance(m.end());
        Ok((lex, datatype))
    }

    /// Production BooleanLiteral.
    ///
    /// Return `None` (without moving) if `true` or `false` is not the next token.
    pub fn boolean<E>(&mut self) -> PResult<Option<&'a str>, E> {
        lazy_regex!(BOOL = r#"^(?:true|false)(?:[ \n\r\t#,;.()\[\]<"']|$)"#);
        match BOOL.find(self.rest()) {
            None => Ok(None),
            Some(m) => {
                self.check_cut(m.end())?;
                let len = if self.rest().starts_with('t') { 4 } else { 5 };
                let lex = &self.rest()[..len];
                self.advance(len);
                Ok(Some(lex))
            }
        }
    }

    /// Whether the next token is the keyword 'a' (standing for `rdf:type`).
    ///
    /// The keyword is consumed if present.
    pub fn keyword_a<E>(&mut self) -> PResult<bool, E> {
        lazy_regex!(DELIMITER = r##"^([ \n\r\t\[\(<'"#]|$)"##);
        let rest = self.rest();
        if !rest.starts_with('a') {
            return Ok(false);
        }
        match DELIMITER.find(&rest[1..]) {
            None => Ok(false),
            Some(m) => {
                self.check_cut(1 + m.end())?;
                self.advance(1);
                Ok(true)
            }
        }
    }

    /// Productions PNAME_NS and PNAME_LN.
    ///
    /// Return the prefix (without the ':') and the local part,
    /// where reserved characters escaped with '\\' are unescaped.
    pub fn prefixed_name<E>(&mut self, expected: &str) -> PResult<(&'a str, Cow<'a, str>), E> {
        let (prefix, colon) = self.pname_ns(expected)?;
        lazy_regex!(
            SUFFIX = r"(?x) ^
            # (PN_CHARS_U | ':' | [0-9] | PLX) ((PN_CHARS | '.' | ':' | PLX)* (PN_CHARS | ':' | PLX))?
            (?:
                [
                 A-Z a-z \xC0-\xD6 \xD8-\xF6 \xF8-\u{02FF} \u{0370}-\u{037D}
                 \u{037F}-\u{1FFF} \u{200C}-\u{200D} \u{2070}-\u{218F} \u{2C00}-\u{2FEF}
                 \u{3001}-\u{D7FF} \u{F900}-\u{FDCF} \u{FDF0}-\u{FFFD} \u{10000}-\u{EFFFF}
                 _
                 : 0-9
                ] | %[0-9A-Fa-f]{2} | \\[_~.\-!$&'()*+,;=/?\#@%]
            )
            (?:
             (?:
                [
                 A-Z a-z \xC0-\xD6 \xD8-\xF6 \xF8-\u{02FF} \u{0370}-\u{037D}
                 \u{037F}-\u{1FFF} \u{200C}-\u{200D} \u{2070}-\u{218F} \u{2C00}-\u{2FEF}
                 \u{3001}-\u{D7FF} \u{F900}-\u{FDCF} \u{FDF0}-\u{FFFD} \u{10000}-\u{EFFFF}
                 _
                 \- 0-9 \xB7 \u{0300}-\u{036F} \u{203F}-\u{2040}
                 . :
                ] | %[0-9A-Fa-f]{2} | \\[_~.\-!$&'()*+,;=/?\#@%]
             )*
             (?:
                [
                 A-Z a-z \xC0-\xD6 \xD8-\xF6 \xF8-\u{02FF} \u{0370}-\u{037D}
                 \u{037F}-\u{1FFF} \u{200C}-\u{200D} \u{2070}-\u{218F} \u{2C00}-\u{2FEF}
                 \u{3001}-\u{D7FF} \u{F900}-\u{FDCF} \u{FDF0}-\u{FFFD} \u{10000}-\u{EFFFF}
                 _
                 \- 0-9 \xB7 \u{0300}-\u{036F} \u{203F}-\u{2040}
                 :
                ] | %[0-9A-Fa-f]{2} | \\[_~.\-!$&'()*+,;=/?\#@%]
             )
            )?
        "
        );
        self.pos = colon + 1;
        let local = match SUFFIX.find(self.rest()) {
            None => {
                self.check_cut(0)?;
                Cow::Borrowed("")
            }
            Some(m) => {
                self.check_cut(m.end())?;
                self.advance(m.end());
                let txt = m.as_str();
                if txt.contains('\\') {
                    Cow::Owned(txt.replace('\\', ""))
                } else {
                    Cow::Borrowed(txt)
                }
            }
        };
        Ok((prefix, local))
    }

    /// Production PNAME_NS.
    ///
    /// Return the prefix (without the ':') and the position of the ':',
    /// without consuming anything.
    pub fn pname_ns<E>(&self, expected: &str) -> PResult<(&'a str, usize), E> {
        lazy_regex!(
            PREFIX = r"(?x)^(
            # PN_CHAR_BASE
            [A-Za-z\u{00C0}-\u{00D6}\u{00D8}-\u{00F6}\u{00F8}-\u{02FF}\u{0370}-\u{037D}\u{037F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}]
            (
                # [ PN_CHARS | '.' ]*
                [A-Za-z\u{00C0}-\u{00D6}\u{00D8}-\u{00F6}\u{00F8}-\u{02FF}\u{0370}-\u{037D}\u{037F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_0-9\u{00B7}\u{0300}-\u{036F}\u{203F}-\u{2040}.-]*
                # PN_CHARS
                [A-Za-z\u{00C0}-\u{00D6}\u{00D8}-\u{00F6}\u{00F8}-\u{02FF}\u{0370}-\u{037D}\u{037F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_0-9\u{00B7}\u{0300}-\u{036F}\u{203F}-\u{2040}-]
            )?
        )?"
        );
        let rest = self.rest();
        // the empty string always matches
        let len = PREFIX.find(rest).map(|m| m.end()).unwrap_or(0);
        match rest.as_bytes().get(len) {
            Some(b':') => Ok((&rest[..len], self.pos + len)),
            None if !self.complete => Err(Interrupt::Incomplete),
            _ if len == 0 => self.fail(expected),
            _ => Err(ErrorKind::Syntax("':'".into())).at(self.pos + len),
        }
    }
}
