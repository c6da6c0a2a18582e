//! Turtle parser that emits to GraphSink.
//!
//! Recursive descent over the token stream produced by [`crate::lex`].

use std::collections::HashMap;

use fluree_graph_ir::{iri, Datatype, GraphSink, Literal, TermId};
use fluree_vocab::{rdf, Namespaces};

use crate::error::{Result, TurtleError};
use crate::lex::{strip_bom, tokenize, Token, TokenKind};

/// Document-independent parse settings
#[derive(Clone, Debug, Default)]
pub struct TurtleOptions {
    /// Base for relative IRIs until the document declares `@base`
    pub base: Option<String>,
    /// Fallback bindings for prefixes the document does not declare
    pub namespaces: Namespaces,
}

impl TurtleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    pub fn with_namespaces(mut self, namespaces: Namespaces) -> Self {
        self.namespaces = namespaces;
        self
    }
}

/// Turtle parser state.
pub struct Parser<'a, S> {
    source: &'a str,
    tokens: Vec<Token>,
    pos: usize,
    sink: &'a mut S,
    /// Prefixes declared by the document
    prefixes: HashMap<String, String>,
    fallback: &'a Namespaces,
    /// Base IRI for relative IRI resolution
    base: Option<String>,
}

impl<'a, S: GraphSink> Parser<'a, S> {
    /// Create a new parser.
    pub fn new(source: &'a str, sink: &'a mut S, options: &'a TurtleOptions) -> Result<Self> {
        let source = strip_bom(source);
        Ok(Self {
            source,
            tokens: tokenize(source)?,
            pos: 0,
            sink,
            prefixes: HashMap::new(),
            fallback: &options.namespaces,
            base: options.base.clone(),
        })
    }

    /// Parse the entire Turtle document.
    pub fn parse(mut self) -> Result<()> {
        while !self.is_at_end() {
            self.parse_statement()?;
        }
        Ok(())
    }

    fn is_at_end(&self) -> bool {
        self.current().is_eof()
    }

    fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Current token kind, cloned so the sink can be borrowed mutably.
    fn peek_kind(&self) -> TokenKind {
        self.current().kind.clone()
    }

    fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    fn error(&self, message: impl Into<String>) -> TurtleError {
        TurtleError::parse(self.source, self.current().start, message)
    }

    fn unexpected(&self, expected: &str) -> TurtleError {
        self.error(format!("expected {}, found {}", expected, self.current().kind))
    }

    /// Consume a token of the expected kind, or return an error.
    fn expect(&mut self, kind: &TokenKind) -> Result<()> {
        if std::mem::discriminant(&self.current().kind) == std::mem::discriminant(kind) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(&format!("'{}'", kind)))
        }
    }

    fn parse_statement(&mut self) -> Result<()> {
        match self.current().kind {
            TokenKind::Prefix { .. } => self.parse_prefix_directive(),
            TokenKind::Base { .. } => self.parse_base_directive(),
            _ => self.parse_triples(),
        }
    }

    /// `@prefix p: <iri> .` or `PREFIX p: <iri>`
    fn parse_prefix_directive(&mut self) -> Result<()> {
        let is_sparql_style = matches!(self.current().kind, TokenKind::Prefix { sparql: true });
        self.advance();

        let prefix = match self.peek_kind() {
            TokenKind::PrefixedName { prefix, local } if local.is_empty() => prefix.to_string(),
            _ => return Err(self.unexpected("prefix name")),
        };
        self.advance();

        let namespace = match self.peek_kind() {
            TokenKind::Iri(iri) => self.resolve_iri(&iri)?,
            _ => return Err(self.unexpected("IRI for prefix namespace")),
        };
        self.advance();

        tracing::trace!(%prefix, %namespace, "turtle prefix");
        self.sink.on_prefix(&prefix, &namespace);
        self.prefixes.insert(prefix, namespace);

        if !is_sparql_style {
            self.expect(&TokenKind::Punct('.'))?;
        }
        Ok(())
    }

    /// `@base <iri> .` or `BASE <iri>`; a relative base resolves against the current one.
    fn parse_base_directive(&mut self) -> Result<()> {
        let is_sparql_style = matches!(self.current().kind, TokenKind::Base { sparql: true });
        self.advance();

        let base = match self.peek_kind() {
            TokenKind::Iri(iri) => self.resolve_iri(&iri)?,
            _ => return Err(self.unexpected("IRI for base")),
        };
        self.advance();

        tracing::trace!(%base, "turtle base");
        self.sink.on_base(&base);
        self.base = Some(base);

        if !is_sparql_style {
            self.expect(&TokenKind::Punct('.'))?;
        }
        Ok(())
    }

    fn parse_triples(&mut self) -> Result<()> {
        // `[ :p :o ] .` is a complete statement on its own
        if matches!(self.current().kind, TokenKind::Punct('[')) {
            let subject = self.parse_blank_node_property_list()?;
            if !matches!(self.current().kind, TokenKind::Punct('.')) {
                self.parse_predicate_object_list(subject)?;
            }
        } else {
            let subject = self.parse_subject()?;
            self.parse_predicate_object_list(subject)?;
        }
        self.expect(&TokenKind::Punct('.'))
    }

    fn parse_subject(&mut self) -> Result<TermId> {
        if let Some(iri) = self.parse_iri_like()? {
            return Ok(self.sink.term_iri(&iri));
        }
        match self.peek_kind() {
            TokenKind::BlankNodeLabel(label) => {
                self.advance();
                Ok(self.sink.term_blank(Some(label.as_ref())))
            }
            TokenKind::Anon => {
                self.advance();
                Ok(self.sink.term_blank(None))
            }
            TokenKind::Punct('(') => self.parse_collection(),
            TokenKind::Nil => {
                self.advance();
                Ok(self.sink.term_iri(rdf::NIL))
            }
            _ => Err(self.unexpected("subject")),
        }
    }

    /// `p o1, o2 ; p2 o3` with optional trailing `;`
    fn parse_predicate_object_list(&mut self, subject: TermId) -> Result<()> {
        loop {
            let predicate = self.parse_predicate()?;
            self.parse_object_list(subject, predicate)?;

            if !matches!(self.current().kind, TokenKind::Punct(';')) {
                return Ok(());
            }
            while matches!(self.current().kind, TokenKind::Punct(';')) {
                self.advance();
            }
            if matches!(
                self.current().kind,
                TokenKind::Punct('.' | ']') | TokenKind::Eof
            ) {
                return Ok(());
            }
        }
    }

    fn parse_predicate(&mut self) -> Result<TermId> {
        if matches!(self.current().kind, TokenKind::KwA) {
            self.advance();
            return Ok(self.sink.term_iri(rdf::TYPE));
        }
        match self.parse_iri_like()? {
            Some(iri) => Ok(self.sink.term_iri(&iri)),
            None => Err(self.unexpected("predicate")),
        }
    }

    fn parse_object_list(&mut self, subject: TermId, predicate: TermId) -> Result<()> {
        loop {
            let object = self.parse_object()?;
            self.sink.emit_triple(subject, predicate, object)?;

            if !matches!(self.current().kind, TokenKind::Punct(',')) {
                return Ok(());
            }
            self.advance();
        }
    }

    fn parse_object(&mut self) -> Result<TermId> {
        if let Some(iri) = self.parse_iri_like()? {
            return Ok(self.sink.term_iri(&iri));
        }
        match self.peek_kind() {
            TokenKind::BlankNodeLabel(label) => {
                self.advance();
                Ok(self.sink.term_blank(Some(label.as_ref())))
            }
            TokenKind::Anon => {
                self.advance();
                Ok(self.sink.term_blank(None))
            }
            TokenKind::Punct('[') => self.parse_blank_node_property_list(),
            TokenKind::Punct('(') => self.parse_collection(),
            TokenKind::Nil => {
                self.advance();
                Ok(self.sink.term_iri(rdf::NIL))
            }
            TokenKind::String(_)
            | TokenKind::Integer(_)
            | TokenKind::Decimal(_)
            | TokenKind::Double(_)
            | TokenKind::Boolean(_) => {
                let literal = self.parse_literal()?;
                Ok(self.sink.term_literal(literal))
            }
            _ => Err(self.unexpected("object")),
        }
    }

    /// String with optional language tag or datatype, number, or boolean.
    fn parse_literal(&mut self) -> Result<Literal> {
        let kind = self.peek_kind();
        self.advance();
        let literal = match kind {
            TokenKind::String(value) => match self.peek_kind() {
                TokenKind::LangTag(lang) => {
                    self.advance();
                    Literal::lang(value, lang)
                }
                TokenKind::DoubleCaret => {
                    self.advance();
                    match self.parse_iri_like()? {
                        Some(dt) => Literal::typed(value, Datatype::from_iri(dt)),
                        None => return Err(self.unexpected("datatype IRI")),
                    }
                }
                _ => Literal::plain(value),
            },
            TokenKind::Integer(lexical) => Literal::typed(lexical, Datatype::xsd_integer()),
            TokenKind::Decimal(lexical) => Literal::typed(lexical, Datatype::xsd_decimal()),
            TokenKind::Double(lexical) => Literal::typed(lexical, Datatype::xsd_double()),
            TokenKind::Boolean(value) => Literal::typed(value.to_string(), Datatype::xsd_boolean()),
            _ => return Err(self.unexpected("literal")),
        };
        Ok(literal)
    }

    /// `[ predicate object ; ... ]`
    fn parse_blank_node_property_list(&mut self) -> Result<TermId> {
        self.expect(&TokenKind::Punct('['))?;
        let bnode = self.sink.term_blank(None);
        self.parse_predicate_object_list(bnode)?;
        self.expect(&TokenKind::Punct(']'))?;
        Ok(bnode)
    }

    /// `( item1 item2 ... )` as an rdf:first / rdf:rest chain
    fn parse_collection(&mut self) -> Result<TermId> {
        self.expect(&TokenKind::Punct('('))?;

        if matches!(self.current().kind, TokenKind::Punct(')')) {
            self.advance();
            return Ok(self.sink.term_iri(rdf::NIL));
        }

        let rdf_first = self.sink.term_iri(rdf::FIRST);
        let rdf_rest = self.sink.term_iri(rdf::REST);

        let head = self.sink.term_blank(None);
        let mut node = head;
        loop {
            let item = self.parse_object()?;
            self.sink.emit_triple(node, rdf_first, item)?;

            if matches!(self.current().kind, TokenKind::Punct(')')) {
                let rdf_nil = self.sink.term_iri(rdf::NIL);
                self.sink.emit_triple(node, rdf_rest, rdf_nil)?;
                break;
            }
            if self.is_at_end() {
                return Err(self.unexpected("')'"));
            }
            let next = self.sink.term_blank(None);
            self.sink.emit_triple(node, rdf_rest, next)?;
            node = next;
        }

        self.expect(&TokenKind::Punct(')'))?;
        Ok(head)
    }

    /// IRI reference or prefixed name at the cursor, expanded. `None` if the
    /// current token is neither.
    fn parse_iri_like(&mut self) -> Result<Option<String>> {
        let iri = match self.peek_kind() {
            TokenKind::Iri(reference) => self.resolve_iri(&reference)?,
            TokenKind::PrefixedName { prefix, local } => self.expand_prefixed_name(&prefix, &local)?,
            _ => return Ok(None),
        };
        self.advance();
        Ok(Some(iri))
    }

    fn resolve_iri(&self, reference: &str) -> Result<String> {
        if iri::is_absolute(reference) {
            return Ok(reference.to_string());
        }
        let base = self.base.as_deref().ok_or_else(|| {
            TurtleError::IriResolution(format!("relative IRI <{}> without base", reference))
        })?;
        iri::resolve(base, reference).ok_or_else(|| {
            TurtleError::IriResolution(format!(
                "cannot resolve <{}> against non-absolute base <{}>",
                reference, base
            ))
        })
    }

    /// Document prefixes first, then the host's namespace table.
    fn expand_prefixed_name(&self, prefix: &str, local: &str) -> Result<String> {
        let namespace = self
            .prefixes
            .get(prefix)
            .map(String::as_str)
            .or_else(|| self.fallback.get(prefix))
            .ok_or_else(|| TurtleError::UndefinedPrefix(prefix.to_string()))?;
        Ok(format!("{}{}", namespace, local))
    }
}

/// Parse a Turtle document into GraphSink events.
pub fn parse<S: GraphSink>(input: &str, sink: &mut S) -> Result<()> {
    parse_with(input, sink, &TurtleOptions::default())
}

/// Parse a Turtle document with a starting base and fallback prefixes.
pub fn parse_with<S: GraphSink>(input: &str, sink: &mut S, options: &TurtleOptions) -> Result<()> {
    Parser::new(input, sink, options)?.parse()
}
