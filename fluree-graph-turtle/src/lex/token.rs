//! Token types shared by the Turtle and N-Triples parsers.

use std::sync::Arc;

/// A token and the byte range it was read from
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Self { kind, start, end }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Source text covered by this token
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// `<...>`, still relative if written that way
    Iri(Arc<str>),
    /// `prefix:local`; `local` is empty for a bare `prefix:`
    PrefixedName { prefix: Arc<str>, local: Arc<str> },
    /// `_:label`
    BlankNodeLabel(Arc<str>),
    /// `[]`
    Anon,
    /// `()`
    Nil,

    /// Quoted string, escapes already resolved
    String(Arc<str>),
    /// Numeric literals keep their lexical form
    Integer(Arc<str>),
    Decimal(Arc<str>),
    Double(Arc<str>),
    /// Language tag without the `@`
    LangTag(Arc<str>),
    /// `true` / `false`
    Boolean(bool),

    /// `@prefix`, or `PREFIX` when `sparql` is set
    Prefix { sparql: bool },
    /// `@base`, or `BASE` when `sparql` is set
    Base { sparql: bool },
    /// `a`
    KwA,

    /// One of `. , ; [ ] ( )`
    Punct(char),
    /// `^^`
    DoubleCaret,

    Eof,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Iri(s) => write!(f, "<{}>", s),
            TokenKind::PrefixedName { prefix, local } => write!(f, "{}:{}", prefix, local),
            TokenKind::BlankNodeLabel(s) => write!(f, "_:{}", s),
            TokenKind::Anon => f.write_str("[]"),
            TokenKind::Nil => f.write_str("()"),
            TokenKind::String(s) => write!(f, "\"{}\"", s),
            TokenKind::Integer(s) | TokenKind::Decimal(s) | TokenKind::Double(s) => {
                f.write_str(s)
            }
            TokenKind::LangTag(s) => write!(f, "@{}", s),
            TokenKind::Boolean(b) => write!(f, "{}", b),
            TokenKind::Prefix { sparql: false } => f.write_str("@prefix"),
            TokenKind::Prefix { sparql: true } => f.write_str("PREFIX"),
            TokenKind::Base { sparql: false } => f.write_str("@base"),
            TokenKind::Base { sparql: true } => f.write_str("BASE"),
            TokenKind::KwA => f.write_str("a"),
            TokenKind::Punct(c) => write!(f, "{}", c),
            TokenKind::DoubleCaret => f.write_str("^^"),
            TokenKind::Eof => f.write_str("end of input"),
        }
    }
}
