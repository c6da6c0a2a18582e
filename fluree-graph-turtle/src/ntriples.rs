//! N-Triples parser that emits to GraphSink.
//!
//! N-Triples is the line-based subset of Turtle: one statement per line, made
//! of absolute IRIs, blank node labels and double-quoted literals. It shares
//! the Turtle lexer and rejects every token Turtle adds on top (directives,
//! prefixed names, `a`, `;`, `,`, `[`, `(`, bare numbers and booleans).

use fluree_graph_ir::{iri, Datatype, GraphSink, Literal, TermId};

use crate::error::{Result, TurtleError};
use crate::lex::{strip_bom, tokenize, Token, TokenKind};

struct Parser<'a, S> {
    source: &'a str,
    tokens: Vec<Token>,
    pos: usize,
    sink: &'a mut S,
}

impl<'a, S: GraphSink> Parser<'a, S> {
    fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn next(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if !token.is_eof() {
            self.pos += 1;
        }
        token
    }

    fn error_at(&self, token: &Token, message: impl Into<String>) -> TurtleError {
        TurtleError::parse(self.source, token.start, message)
    }

    fn unexpected(&self, token: &Token, expected: &str) -> TurtleError {
        self.error_at(token, format!("expected {}, found {}", expected, token.kind))
    }

    fn parse(mut self) -> Result<()> {
        let mut previous_end: Option<usize> = None;

        while !self.current().is_eof() {
            let first = self.current().clone();
            if let Some(end) = previous_end {
                if !self.source[end..first.start].contains(['\n', '\r']) {
                    return Err(self.error_at(&first, "statements must be on separate lines"));
                }
            }

            let subject = self.parse_subject()?;
            let predicate = self.parse_predicate()?;
            let object = self.parse_object()?;

            let dot = self.next();
            if dot.kind != TokenKind::Punct('.') {
                return Err(self.unexpected(&dot, "'.'"));
            }
            if self.source[first.start..dot.start].contains(['\n', '\r']) {
                return Err(self.error_at(&first, "statement spans more than one line"));
            }
            previous_end = Some(dot.end);

            self.sink.emit_triple(subject, predicate, object)?;
        }
        Ok(())
    }

    fn parse_subject(&mut self) -> Result<TermId> {
        let token = self.next();
        match &token.kind {
            TokenKind::Iri(iri) => self.absolute_iri(&token, iri),
            TokenKind::BlankNodeLabel(label) => Ok(self.sink.term_blank(Some(label.as_ref()))),
            _ => Err(self.unexpected(&token, "IRI or blank node subject")),
        }
    }

    fn parse_predicate(&mut self) -> Result<TermId> {
        let token = self.next();
        match &token.kind {
            TokenKind::Iri(iri) => self.absolute_iri(&token, iri),
            _ => Err(self.unexpected(&token, "IRI predicate")),
        }
    }

    fn parse_object(&mut self) -> Result<TermId> {
        let token = self.next();
        match &token.kind {
            TokenKind::Iri(iri) => self.absolute_iri(&token, iri),
            TokenKind::BlankNodeLabel(label) => Ok(self.sink.term_blank(Some(label.as_ref()))),
            TokenKind::String(value) => {
                let text = token.text(self.source);
                if !text.starts_with('"') || text.starts_with("\"\"\"") {
                    return Err(self.error_at(&token, "literals must use a single pair of double quotes"));
                }
                let literal = self.parse_literal_suffix(value)?;
                Ok(self.sink.term_literal(literal))
            }
            _ => Err(self.unexpected(&token, "IRI, blank node or literal object")),
        }
    }

    fn parse_literal_suffix(&mut self, value: &str) -> Result<Literal> {
        match self.current().kind.clone() {
            TokenKind::LangTag(lang) => {
                self.next();
                Ok(Literal::lang(value, lang))
            }
            TokenKind::DoubleCaret => {
                self.next();
                let token = self.next();
                match &token.kind {
                    TokenKind::Iri(dt) if iri::is_absolute(dt) => {
                        Ok(Literal::typed(value, Datatype::from_iri(dt)))
                    }
                    _ => Err(self.unexpected(&token, "absolute datatype IRI")),
                }
            }
            _ => Ok(Literal::plain(value)),
        }
    }

    fn absolute_iri(&mut self, token: &Token, iri: &str) -> Result<TermId> {
        if !iri::is_absolute(iri) {
            return Err(self.error_at(token, format!("relative IRI <{}> in N-Triples", iri)));
        }
        Ok(self.sink.term_iri(iri))
    }
}

/// Parse an N-Triples document into GraphSink events.
pub fn parse_ntriples<S: GraphSink>(input: &str, sink: &mut S) -> Result<()> {
    let input = strip_bom(input);
    Parser {
        source: input,
        tokens: tokenize(input)?,
        pos: 0,
        sink,
    }
    .parse()
}
