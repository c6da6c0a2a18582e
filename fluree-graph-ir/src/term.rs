//! RDF term types: IRI, blank node, and literal
//!
//! Terms are the building blocks of statements. A term can be:
//! - An IRI (always expanded, never prefixed)
//! - A blank node (label unique within one parse)
//! - A literal (lexical value + optional datatype *or* optional language tag)
//!
//! Subject position only admits IRIs and blank nodes, so it has its own
//! two-case [`Subject`] type; a literal subject cannot be constructed.

use crate::error::{GraphError, Result};
use crate::native;
use crate::registry::DatatypeRegistry;
use crate::temporal::{XsdDate, XsdDateTime};
use crate::Datatype;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Blank node identifier
///
/// Blank node labels are only meaningful within the graph produced by a single
/// parse. Two parses of the same document may label the same node differently.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlankId(Arc<str>);

impl BlankId {
    /// Create a blank node ID from a label
    ///
    /// The label should NOT include the `_:` prefix.
    pub fn new(label: impl AsRef<str>) -> Self {
        Self(Arc::from(label.as_ref()))
    }

    /// Get the label (without `_:` prefix)
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the full N-Triples representation (`_:label`)
    pub fn to_ntriples(&self) -> String {
        format!("_:{}", self.0)
    }
}

impl std::fmt::Display for BlankId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// Native representation of a literal value
///
/// Produced on demand by [`Literal::native_value`] when the literal's datatype
/// is registered with one of the built-in native tags (see [`crate::native`]).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum LiteralValue {
    /// String value (UTF-8)
    String(Arc<str>),
    /// Boolean value
    Boolean(bool),
    /// Integer value (i64 range)
    Integer(i64),
    /// Floating point value (f64)
    Double(f64),
    /// Decimal value kept in canonical lexical form to preserve precision
    Decimal(Arc<str>),
    /// JSON value stored as canonical normalized string
    Json(Arc<str>),
    /// `xsd:date`, with its timezone if one was written
    Date(XsdDate),
    /// `xsd:dateTime`, with its timezone if one was written
    DateTime(XsdDateTime),
}

impl LiteralValue {
    /// Create a string literal value
    pub fn string(s: impl AsRef<str>) -> Self {
        LiteralValue::String(Arc::from(s.as_ref()))
    }

    /// Convert a lexical form according to a native type tag.
    ///
    /// Returns `None` for unknown tags and for lexical forms the tag's type
    /// cannot represent.
    pub fn from_lexical(tag: &str, lexical: &str) -> Option<Self> {
        match tag {
            native::STRING => Some(Self::string(lexical)),
            native::DATE => XsdDate::parse(lexical).map(LiteralValue::Date),
            native::DATE_TIME => XsdDateTime::parse(lexical).map(LiteralValue::DateTime),
            native::BOOLEAN => match lexical.trim() {
                "true" | "1" => Some(LiteralValue::Boolean(true)),
                "false" | "0" => Some(LiteralValue::Boolean(false)),
                _ => None,
            },
            native::INTEGER => lexical
                .trim()
                .trim_start_matches('+')
                .parse::<i64>()
                .ok()
                .map(LiteralValue::Integer),
            native::DOUBLE => parse_double(lexical.trim()).map(LiteralValue::Double),
            native::DECIMAL => {
                let trimmed = lexical.trim();
                let unsigned = trimmed.trim_start_matches(['+', '-']);
                let valid = !unsigned.is_empty()
                    && unsigned.chars().all(|c| c.is_ascii_digit() || c == '.')
                    && unsigned.matches('.').count() <= 1
                    && unsigned != ".";
                valid.then(|| LiteralValue::Decimal(Arc::from(trimmed)))
            }
            native::JSON => serde_json::from_str::<serde_json::Value>(lexical)
                .ok()
                .map(|v| LiteralValue::Json(Arc::from(v.to_string()))),
            _ => None,
        }
    }

    /// Get the lexical representation of this value
    pub fn lexical(&self) -> String {
        match self {
            LiteralValue::String(s) => s.to_string(),
            LiteralValue::Boolean(b) => b.to_string(),
            LiteralValue::Integer(i) => i.to_string(),
            LiteralValue::Double(d) => {
                if d.is_nan() {
                    "NaN".to_string()
                } else if d.is_infinite() {
                    if d.is_sign_positive() {
                        "INF".to_string()
                    } else {
                        "-INF".to_string()
                    }
                } else {
                    d.to_string()
                }
            }
            LiteralValue::Decimal(s) => s.to_string(),
            LiteralValue::Json(s) => s.to_string(),
            LiteralValue::Date(d) => d.lexical().to_string(),
            LiteralValue::DateTime(dt) => dt.lexical().to_string(),
        }
    }

    /// Try to get as string reference
    pub fn as_str(&self) -> Option<&str> {
        match self {
            LiteralValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            LiteralValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            LiteralValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as double
    pub fn as_double(&self) -> Option<f64> {
        match self {
            LiteralValue::Double(d) => Some(*d),
            LiteralValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&XsdDate> {
        match self {
            LiteralValue::Date(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_date_time(&self) -> Option<&XsdDateTime> {
        match self {
            LiteralValue::DateTime(dt) => Some(dt),
            _ => None,
        }
    }
}

impl PartialEq for LiteralValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (LiteralValue::String(a), LiteralValue::String(b)) => a == b,
            (LiteralValue::Boolean(a), LiteralValue::Boolean(b)) => a == b,
            (LiteralValue::Integer(a), LiteralValue::Integer(b)) => a == b,
            (LiteralValue::Double(a), LiteralValue::Double(b)) => a.to_bits() == b.to_bits(),
            (LiteralValue::Decimal(a), LiteralValue::Decimal(b)) => a == b,
            (LiteralValue::Json(a), LiteralValue::Json(b)) => a == b,
            (LiteralValue::Date(a), LiteralValue::Date(b)) => a == b,
            (LiteralValue::DateTime(a), LiteralValue::DateTime(b)) => a == b,
            _ => false,
        }
    }
}

fn parse_double(s: &str) -> Option<f64> {
    match s {
        "INF" | "+INF" => Some(f64::INFINITY),
        "-INF" => Some(f64::NEG_INFINITY),
        "NaN" => Some(f64::NAN),
        _ => s.parse::<f64>().ok().filter(|d| d.is_finite()),
    }
}

/// An RDF literal: lexical value with at most one of datatype / language tag.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Literal {
    value: Arc<str>,
    datatype: Option<Datatype>,
    language: Option<Arc<str>>,
}

impl Literal {
    /// Create a literal, enforcing that datatype and language are exclusive.
    pub fn new(
        value: impl AsRef<str>,
        datatype: Option<Datatype>,
        language: Option<&str>,
    ) -> Result<Self> {
        if datatype.is_some() && language.is_some() {
            return Err(GraphError::InvalidLiteral {
                lexical: value.as_ref().to_string(),
                reason: "a literal cannot have both a datatype and a language tag".to_string(),
            });
        }
        if language.is_some_and(str::is_empty) {
            return Err(GraphError::InvalidLiteral {
                lexical: value.as_ref().to_string(),
                reason: "language tag cannot be empty".to_string(),
            });
        }
        Ok(Literal {
            value: Arc::from(value.as_ref()),
            datatype,
            language: language.map(Arc::from),
        })
    }

    /// Plain literal: no datatype, no language
    pub fn plain(value: impl AsRef<str>) -> Self {
        Literal {
            value: Arc::from(value.as_ref()),
            datatype: None,
            language: None,
        }
    }

    /// Language-tagged literal
    pub fn lang(value: impl AsRef<str>, language: impl AsRef<str>) -> Self {
        Literal {
            value: Arc::from(value.as_ref()),
            datatype: None,
            language: Some(Arc::from(language.as_ref())),
        }
    }

    /// Typed literal
    pub fn typed(value: impl AsRef<str>, datatype: Datatype) -> Self {
        Literal {
            value: Arc::from(value.as_ref()),
            datatype: Some(datatype),
            language: None,
        }
    }

    /// Lexical value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Datatype, if the literal is typed
    pub fn datatype(&self) -> Option<&Datatype> {
        self.datatype.as_ref()
    }

    /// Language tag, if the literal is language-tagged
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Materialize the literal into its native representation.
    ///
    /// Looks up the tag registered for this literal's datatype and converts
    /// the lexical form with [`LiteralValue::from_lexical`]. Untyped literals,
    /// unregistered datatypes and tags without a built-in conversion yield
    /// `None`.
    pub fn native_value(&self, registry: &DatatypeRegistry) -> Option<LiteralValue> {
        let datatype = self.datatype.as_ref()?;
        let tag = registry.class_for_datatype(datatype.as_iri()).ok()??;
        LiteralValue::from_lexical(&tag, &self.value)
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\"", self.value.escape_default())?;
        if let Some(lang) = &self.language {
            write!(f, "@{}", lang)
        } else if let Some(dt) = &self.datatype {
            write!(f, "^^<{}>", dt.as_iri())
        } else {
            Ok(())
        }
    }
}

/// The shape of a node reference, as seen by consumers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Named resource
    Uri,
    /// Blank node
    Bnode,
    /// Literal value
    Literal,
}

impl NodeKind {
    /// Lowercase name (`uri`, `bnode`, `literal`)
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Uri => "uri",
            NodeKind::Bnode => "bnode",
            NodeKind::Literal => "literal",
        }
    }
}

/// Subject of a statement: a named resource or a blank node
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Subject {
    /// Full expanded IRI
    Iri(Arc<str>),
    /// Blank node
    BlankNode(BlankId),
}

impl Subject {
    /// Create an IRI subject
    pub fn iri(iri: impl AsRef<str>) -> Self {
        Subject::Iri(Arc::from(iri.as_ref()))
    }

    /// Create a blank node subject
    pub fn blank(label: impl AsRef<str>) -> Self {
        Subject::BlankNode(BlankId::new(label))
    }

    /// Parse a subject key: `_:label` is a blank node, anything else an IRI.
    pub fn from_key(key: &str) -> Self {
        match key.strip_prefix("_:") {
            Some(label) => Subject::blank(label),
            None => Subject::iri(key),
        }
    }

    /// Node kind (`Uri` or `Bnode`)
    pub fn kind(&self) -> NodeKind {
        match self {
            Subject::Iri(_) => NodeKind::Uri,
            Subject::BlankNode(_) => NodeKind::Bnode,
        }
    }

    /// The identity string: the IRI, or the blank label without `_:`
    pub fn value(&self) -> &str {
        match self {
            Subject::Iri(iri) => iri,
            Subject::BlankNode(id) => id.as_str(),
        }
    }

    /// Try to get as IRI string
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Subject::Iri(iri) => Some(iri),
            Subject::BlankNode(_) => None,
        }
    }

    /// Check if this is a blank node
    pub fn is_blank(&self) -> bool {
        matches!(self, Subject::BlankNode(_))
    }
}

impl From<BlankId> for Subject {
    fn from(id: BlankId) -> Self {
        Subject::BlankNode(id)
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Subject::Iri(iri) => write!(f, "<{}>", iri),
            Subject::BlankNode(id) => write!(f, "{}", id),
        }
    }
}

/// An RDF term in object position
///
/// # Invariants
///
/// - `Term::Iri` always contains an **expanded** IRI, never a prefixed form.
/// - `Term::Literal` never has both a datatype and a language tag.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Term {
    /// Full expanded IRI (e.g., "http://schema.org/Person")
    Iri(Arc<str>),

    /// Blank node
    BlankNode(BlankId),

    /// Literal value
    Literal(Literal),
}

impl Term {
    /// Create an IRI term from an expanded IRI string
    pub fn iri(iri: impl AsRef<str>) -> Self {
        Term::Iri(Arc::from(iri.as_ref()))
    }

    /// Create a blank node term
    pub fn blank(label: impl AsRef<str>) -> Self {
        Term::BlankNode(BlankId::new(label))
    }

    /// Create a plain literal (no datatype, no language)
    pub fn string(value: impl AsRef<str>) -> Self {
        Term::Literal(Literal::plain(value))
    }

    /// Create a language-tagged literal
    pub fn lang_string(value: impl AsRef<str>, lang: impl AsRef<str>) -> Self {
        Term::Literal(Literal::lang(value, lang))
    }

    /// Create a typed literal
    pub fn typed(value: impl AsRef<str>, datatype: Datatype) -> Self {
        Term::Literal(Literal::typed(value, datatype))
    }

    /// Node kind (`Uri`, `Bnode` or `Literal`)
    pub fn kind(&self) -> NodeKind {
        match self {
            Term::Iri(_) => NodeKind::Uri,
            Term::BlankNode(_) => NodeKind::Bnode,
            Term::Literal(_) => NodeKind::Literal,
        }
    }

    /// The node's value: IRI, blank label (without `_:`), or lexical form
    pub fn value(&self) -> &str {
        match self {
            Term::Iri(iri) => iri,
            Term::BlankNode(id) => id.as_str(),
            Term::Literal(lit) => lit.value(),
        }
    }

    /// Check if this is an IRI term
    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    /// Check if this is a blank node
    pub fn is_blank(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    /// Check if this is a literal
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    /// Try to get as IRI string
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Try to get as blank node ID
    pub fn as_blank(&self) -> Option<&BlankId> {
        match self {
            Term::BlankNode(id) => Some(id),
            _ => None,
        }
    }

    /// Try to get as literal
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// Convert to a subject (IRIs and blank nodes only)
    ///
    /// This is how a blank-node object is followed to the statements it heads.
    pub fn to_subject(&self) -> Option<Subject> {
        match self {
            Term::Iri(iri) => Some(Subject::Iri(iri.clone())),
            Term::BlankNode(id) => Some(Subject::BlankNode(id.clone())),
            Term::Literal(_) => None,
        }
    }
}

impl From<Subject> for Term {
    fn from(subject: Subject) -> Self {
        match subject {
            Subject::Iri(iri) => Term::Iri(iri),
            Subject::BlankNode(id) => Term::BlankNode(id),
        }
    }
}

impl From<Literal> for Term {
    fn from(lit: Literal) -> Self {
        Term::Literal(lit)
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{}>", iri),
            Term::BlankNode(id) => write!(f, "{}", id),
            Term::Literal(lit) => write!(f, "{}", lit),
        }
    }
}
