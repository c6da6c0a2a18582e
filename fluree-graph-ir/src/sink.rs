//! GraphSink trait for event-driven graph construction
//!
//! Readers call methods like `term_iri()` and `emit_triple()` on a sink
//! without knowing what is being built. [`GraphCollectorSink`] collects the
//! events into a [`Graph`] and owns blank node allocation for one parse.

use crate::error::{GraphError, Result};
use crate::{Graph, Literal, Term};
use std::collections::HashMap;

/// Default prefix for generated blank node labels
pub const DEFAULT_BLANK_PREFIX: &str = "genid";

/// Opaque term identifier for efficient triple emission
///
/// `TermId` is only valid within a single sink session. It allows parsers
/// to reference terms efficiently without repeated string allocations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TermId(pub(crate) u32);

impl TermId {
    /// Create a new TermId from a raw index.
    ///
    /// This is intended for `GraphSink` implementations outside this crate
    /// that need to allocate term IDs.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index value.
    pub fn index(self) -> u32 {
        self.0
    }
}

/// Event-driven interface for RDF graph construction
///
/// # Example
///
/// ```
/// use fluree_graph_ir::{GraphSink, GraphCollectorSink, Literal};
///
/// let mut sink = GraphCollectorSink::new();
///
/// sink.on_prefix("foaf", "http://xmlns.com/foaf/0.1/");
///
/// let alice = sink.term_iri("http://example.org/alice");
/// let name = sink.term_iri("http://xmlns.com/foaf/0.1/name");
/// let alice_name = sink.term_literal(Literal::plain("Alice"));
///
/// sink.emit_triple(alice, name, alice_name).unwrap();
///
/// let graph = sink.finish();
/// assert_eq!(graph.len(), 1);
/// ```
pub trait GraphSink {
    /// Called when a base IRI is declared
    ///
    /// In Turtle: `@base <http://example.org/> .`
    /// In RDF/XML: `xml:base="http://example.org/"` on the root element
    fn on_base(&mut self, base_iri: &str);

    /// Called when a prefix is declared
    ///
    /// In Turtle: `@prefix foaf: <http://xmlns.com/foaf/0.1/> .`
    /// In RDF/XML: `xmlns:foaf="http://xmlns.com/foaf/0.1/"`
    fn on_prefix(&mut self, prefix: &str, namespace_iri: &str);

    /// Create an IRI term and return its ID
    ///
    /// The IRI should be fully expanded (not prefixed).
    fn term_iri(&mut self, iri: &str) -> TermId;

    /// Create a blank node term and return its ID
    ///
    /// If `label` is Some, every call with the same in-document label returns
    /// the same node. If None, a fresh blank node is generated.
    fn term_blank(&mut self, label: Option<&str>) -> TermId;

    /// Create a literal term
    fn term_literal(&mut self, literal: Literal) -> TermId;

    /// Emit a triple using previously created term IDs
    ///
    /// Fails if the subject is a literal or the predicate is not an IRI.
    fn emit_triple(&mut self, subject: TermId, predicate: TermId, object: TermId) -> Result<()>;
}

/// A sink that collects triples into a Graph
///
/// In-document blank node labels are never copied into the graph. Each
/// distinct label, and each anonymous node, is given a fresh
/// `{prefix}{n}` label with `n` counting from 1.
#[derive(Debug)]
pub struct GraphCollectorSink {
    /// The graph being built
    graph: Graph,
    /// Terms indexed by TermId
    terms: Vec<Term>,
    blank_prefix: String,
    /// Counter for generating blank node IDs
    blank_counter: u32,
    /// In-document label to allocated term
    blank_labels: HashMap<String, TermId>,
}

impl GraphCollectorSink {
    /// Create a new collector sink
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            terms: Vec::new(),
            blank_prefix: DEFAULT_BLANK_PREFIX.to_string(),
            blank_counter: 0,
            blank_labels: HashMap::new(),
        }
    }

    /// Create a sink with a pre-configured base IRI
    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            graph: Graph::with_base(base),
            ..Self::new()
        }
    }

    /// Use `prefix` for generated blank node labels
    pub fn with_blank_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.blank_prefix = prefix.into();
        self
    }

    /// Finish building and return the graph
    ///
    /// Consumes the sink.
    pub fn finish(self) -> Graph {
        self.graph
    }

    /// Get the current graph (non-consuming)
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Get a term by its ID
    pub fn term(&self, id: TermId) -> Option<&Term> {
        self.terms.get(id.0 as usize)
    }

    fn add_term(&mut self, term: Term) -> TermId {
        let id = TermId(self.terms.len() as u32);
        self.terms.push(term);
        id
    }

    fn fresh_blank(&mut self) -> TermId {
        self.blank_counter += 1;
        let label = format!("{}{}", self.blank_prefix, self.blank_counter);
        self.add_term(Term::blank(label))
    }

    fn lookup(&self, id: TermId, position: &str) -> Result<&Term> {
        self.term(id).ok_or_else(|| {
            GraphError::statement(format!("unknown term id {} in {} position", id.0, position))
        })
    }
}

impl Default for GraphCollectorSink {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphSink for GraphCollectorSink {
    fn on_base(&mut self, base_iri: &str) {
        self.graph.set_base(base_iri);
    }

    fn on_prefix(&mut self, prefix: &str, namespace_iri: &str) {
        self.graph.add_prefix(prefix, namespace_iri);
    }

    fn term_iri(&mut self, iri: &str) -> TermId {
        self.add_term(Term::iri(iri))
    }

    fn term_blank(&mut self, label: Option<&str>) -> TermId {
        match label {
            Some(l) => {
                if let Some(&id) = self.blank_labels.get(l) {
                    return id;
                }
                let id = self.fresh_blank();
                self.blank_labels.insert(l.to_string(), id);
                id
            }
            None => self.fresh_blank(),
        }
    }

    fn term_literal(&mut self, literal: Literal) -> TermId {
        self.add_term(Term::Literal(literal))
    }

    fn emit_triple(&mut self, subject: TermId, predicate: TermId, object: TermId) -> Result<()> {
        let s = self.lookup(subject, "subject")?;
        let s = s
            .to_subject()
            .ok_or_else(|| GraphError::statement(format!("literal {} used as a subject", s)))?;
        let p = match self.lookup(predicate, "predicate")? {
            Term::Iri(iri) => iri.clone(),
            other => {
                return Err(GraphError::statement(format!(
                    "{} used as a predicate",
                    other
                )))
            }
        };
        let o = self.lookup(object, "object")?.clone();
        self.graph.add_statement(s, p, o)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Datatype, Subject};

    #[test]
    fn test_collector_sink_basic() {
        let mut sink = GraphCollectorSink::new();

        let s = sink.term_iri("http://example.org/alice");
        let p = sink.term_iri("http://xmlns.com/foaf/0.1/name");
        let o = sink.term_literal(Literal::plain("Alice"));

        sink.emit_triple(s, p, o).unwrap();

        let graph = sink.finish();
        assert_eq!(graph.len(), 1);

        let triple = graph.iter().next().unwrap();
        assert_eq!(triple.s.as_iri(), Some("http://example.org/alice"));
        assert_eq!(triple.p, "http://xmlns.com/foaf/0.1/name");
    }

    #[test]
    fn test_collector_sink_blank_nodes() {
        let mut sink = GraphCollectorSink::new();

        // Same label should produce same TermId
        let b1 = sink.term_blank(Some("b0"));
        let b2 = sink.term_blank(Some("b0"));
        assert_eq!(b1, b2);

        // Different labels should produce different TermIds
        let b3 = sink.term_blank(Some("b1"));
        assert_ne!(b1, b3);

        // Anonymous blank nodes are always fresh
        let anon1 = sink.term_blank(None);
        let anon2 = sink.term_blank(None);
        assert_ne!(anon1, anon2);

        assert_eq!(sink.term(b1), Some(&Term::blank("genid1")));
        assert_eq!(sink.term(b3), Some(&Term::blank("genid2")));
        assert_eq!(sink.term(anon2), Some(&Term::blank("genid4")));
    }

    #[test]
    fn test_document_labels_are_not_reused() {
        let mut sink = GraphCollectorSink::new().with_blank_prefix("n");
        let b = sink.term_blank(Some("genid7"));
        assert_eq!(sink.term(b), Some(&Term::blank("n1")));
    }

    #[test]
    fn test_collector_sink_prefixes() {
        let mut sink = GraphCollectorSink::new();

        sink.on_base("http://example.org/");
        sink.on_prefix("foaf", "http://xmlns.com/foaf/0.1/");

        let graph = sink.finish();

        assert_eq!(graph.base, Some("http://example.org/".to_string()));
        assert_eq!(
            graph.prefixes.get("foaf"),
            Some(&"http://xmlns.com/foaf/0.1/".to_string())
        );
    }

    #[test]
    fn test_collector_sink_typed_literal() {
        let mut sink = GraphCollectorSink::new();

        let s = sink.term_iri("http://example.org/test");
        let p = sink.term_iri("http://example.org/value");
        let o = sink.term_literal(Literal::typed("42", Datatype::xsd_integer()));
        sink.emit_triple(s, p, o).unwrap();

        let graph = sink.finish();
        let subject = Subject::iri("http://example.org/test");
        let lit = graph
            .first_object(&subject, "http://example.org/value")
            .and_then(Term::as_literal)
            .unwrap();
        assert_eq!(lit.value(), "42");
        assert_eq!(lit.datatype(), Some(&Datatype::xsd_integer()));
    }

    #[test]
    fn test_rejects_literal_subject_and_non_iri_predicate() {
        let mut sink = GraphCollectorSink::new();

        let lit = sink.term_literal(Literal::plain("oops"));
        let iri = sink.term_iri("http://example.org/p");
        let blank = sink.term_blank(None);

        assert!(sink.emit_triple(lit, iri, iri).is_err());
        assert!(sink.emit_triple(iri, blank, iri).is_err());
        assert!(sink.emit_triple(iri, lit, iri).is_err());
        assert!(sink.graph().is_empty());
    }
}
