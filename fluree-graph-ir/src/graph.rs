//! RDF graph - statements grouped by subject and predicate
//!
//! The `Graph` keeps bag semantics: adding the same statement twice stores it
//! twice. Subjects, predicates within a subject, and objects within a
//! predicate all keep their insertion order.

use crate::error::{GraphError, Result};
use crate::triple::TripleRef;
use crate::{Subject, Term, Triple};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

static EMPTY_RESOURCE: Resource = Resource::new();

/// The predicate → objects mapping of one subject
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Resource {
    properties: Vec<(Arc<str>, Vec<Term>)>,
}

impl Resource {
    const fn new() -> Self {
        Resource {
            properties: Vec::new(),
        }
    }

    /// Objects of `predicate`, in insertion order; empty if absent
    pub fn get(&self, predicate: &str) -> &[Term] {
        self.properties
            .iter()
            .find(|(p, _)| p.as_ref() == predicate)
            .map(|(_, objects)| objects.as_slice())
            .unwrap_or(&[])
    }

    /// True if at least one statement uses `predicate`
    pub fn contains(&self, predicate: &str) -> bool {
        self.properties.iter().any(|(p, _)| p.as_ref() == predicate)
    }

    /// Predicates in insertion order
    pub fn predicates(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|(p, _)| p.as_ref())
    }

    /// `(predicate, objects)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Term])> {
        self.properties
            .iter()
            .map(|(p, objects)| (p.as_ref(), objects.as_slice()))
    }

    /// Number of distinct predicates
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    fn push(&mut self, predicate: &str, object: Term) {
        match self
            .properties
            .iter_mut()
            .find(|(p, _)| p.as_ref() == predicate)
        {
            Some((_, objects)) => objects.push(object),
            None => self
                .properties
                .push((Arc::from(predicate), vec![object])),
        }
    }
}

/// A collection of RDF statements indexed by subject
///
/// # Design Decisions
///
/// - **Append only**: statements can be added but never removed.
/// - **No de-duplication**: repeated statements are kept.
/// - **Insertion order**: every level of the mapping iterates in the order
///   statements were added, so reader output is reproducible.
///
/// # Example
///
/// ```
/// use fluree_graph_ir::{Graph, Subject, Term};
///
/// let mut graph = Graph::new();
/// let alice = Subject::iri("http://example.org/alice");
///
/// graph
///     .add_statement(alice.clone(), "http://xmlns.com/foaf/0.1/name", Term::string("Alice"))
///     .unwrap();
///
/// assert_eq!(
///     graph.objects_of(&alice, "http://xmlns.com/foaf/0.1/name"),
///     &[Term::string("Alice")]
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct Graph {
    index: HashMap<Subject, usize>,
    resources: Vec<(Subject, Resource)>,
    len: usize,
    /// Base IRI from parsing
    pub base: Option<String>,
    /// Prefix mappings declared by the parsed document (deterministic order via BTreeMap)
    pub prefixes: BTreeMap<String, String>,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with a base IRI
    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            base: Some(base.into()),
            ..Default::default()
        }
    }

    /// Set the base IRI
    pub fn set_base(&mut self, base: impl Into<String>) {
        self.base = Some(base.into());
    }

    /// Add a prefix mapping
    pub fn add_prefix(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.prefixes.insert(prefix.into(), namespace.into());
    }

    /// Append `object` to the objects of `(subject, predicate)`.
    ///
    /// Fails with [`GraphError::InvalidStatement`] if the subject identity or
    /// the predicate IRI is empty.
    pub fn add_statement(
        &mut self,
        subject: Subject,
        predicate: impl AsRef<str>,
        object: Term,
    ) -> Result<()> {
        let predicate = predicate.as_ref();
        if subject.value().is_empty() {
            return Err(GraphError::statement("subject cannot be empty"));
        }
        if predicate.is_empty() {
            return Err(GraphError::statement(format!(
                "predicate of {} cannot be empty",
                subject
            )));
        }

        let slot = match self.index.get(&subject) {
            Some(&slot) => slot,
            None => {
                let slot = self.resources.len();
                self.index.insert(subject.clone(), slot);
                self.resources.push((subject, Resource::new()));
                slot
            }
        };
        self.resources[slot].1.push(predicate, object);
        self.len += 1;
        Ok(())
    }

    /// Add an owned triple
    pub fn add(&mut self, triple: Triple) -> Result<()> {
        self.add_statement(triple.s, triple.p, triple.o)
    }

    /// Predicate → objects mapping for `subject`; empty if unknown
    pub fn resources_of(&self, subject: &Subject) -> &Resource {
        self.index
            .get(subject)
            .map(|&slot| &self.resources[slot].1)
            .unwrap_or(&EMPTY_RESOURCE)
    }

    /// Objects of `(subject, predicate)` in insertion order; empty if absent
    pub fn objects_of(&self, subject: &Subject, predicate: &str) -> &[Term] {
        self.resources_of(subject).get(predicate)
    }

    /// First object of `(subject, predicate)`
    pub fn first_object(&self, subject: &Subject, predicate: &str) -> Option<&Term> {
        self.objects_of(subject, predicate).first()
    }

    /// True if `subject` has at least one statement
    pub fn contains_subject(&self, subject: &Subject) -> bool {
        self.index.contains_key(subject)
    }

    /// Subjects in insertion order
    pub fn subjects(&self) -> impl Iterator<Item = &Subject> {
        self.resources.iter().map(|(s, _)| s)
    }

    /// Number of distinct subjects
    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    /// Get the number of statements
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate over all statements, grouped by subject then predicate
    pub fn iter(&self) -> impl Iterator<Item = TripleRef<'_>> {
        self.resources.iter().flat_map(|(s, resource)| {
            resource.iter().flat_map(move |(p, objects)| {
                objects.iter().map(move |o| TripleRef { s, p, o })
            })
        })
    }

    /// Clone all statements into owned triples
    pub fn to_triples(&self) -> Vec<Triple> {
        self.iter().map(|t| t.to_owned()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const NAME: &str = "http://xmlns.com/foaf/0.1/name";
    const AGE: &str = "http://xmlns.com/foaf/0.1/age";

    fn make_test_graph() -> Graph {
        let mut graph = Graph::new();
        let bob = Subject::iri("http://example.org/bob");
        let alice = Subject::iri("http://example.org/alice");

        graph.add_statement(bob, NAME, Term::string("Bob")).unwrap();
        graph
            .add_statement(alice.clone(), NAME, Term::string("Alice"))
            .unwrap();
        graph
            .add_statement(
                alice,
                AGE,
                Term::typed("30", crate::Datatype::xsd_integer()),
            )
            .unwrap();
        graph
    }

    #[test]
    fn test_graph_creation() {
        let graph = Graph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.len(), 0);
        assert_eq!(graph.resource_count(), 0);
    }

    #[test]
    fn test_unknown_subject_is_empty() {
        let graph = make_test_graph();
        let nobody = Subject::iri("http://example.org/nobody");
        assert!(graph.resources_of(&nobody).is_empty());
        assert!(graph.objects_of(&nobody, NAME).is_empty());
        assert!(graph
            .objects_of(&Subject::iri("http://example.org/bob"), AGE)
            .is_empty());
    }

    #[test]
    fn test_no_dedupe_and_order() {
        let mut graph = Graph::new();
        let s = Subject::iri("urn:s");
        for v in ["b", "a", "b"] {
            graph.add_statement(s.clone(), "urn:p", Term::string(v)).unwrap();
        }
        assert_eq!(graph.len(), 3);
        assert_eq!(
            graph.objects_of(&s, "urn:p"),
            &[Term::string("b"), Term::string("a"), Term::string("b")]
        );
    }

    #[test]
    fn test_subject_and_predicate_order() {
        let graph = make_test_graph();
        let subjects: Vec<_> = graph.subjects().map(|s| s.value().to_string()).collect();
        assert_eq!(
            subjects,
            vec!["http://example.org/bob", "http://example.org/alice"]
        );

        let alice = Subject::iri("http://example.org/alice");
        let predicates: Vec<_> = graph.resources_of(&alice).predicates().collect();
        assert_eq!(predicates, vec![NAME, AGE]);
    }

    #[test]
    fn test_rejects_empty_identities() {
        let mut graph = Graph::new();
        assert!(graph
            .add_statement(Subject::iri(""), "urn:p", Term::string("x"))
            .is_err());
        assert!(graph
            .add_statement(Subject::blank(""), "urn:p", Term::string("x"))
            .is_err());
        assert!(graph
            .add_statement(Subject::iri("urn:s"), "", Term::string("x"))
            .is_err());
        assert!(graph.is_empty());
    }

    #[test]
    fn test_iter_and_to_triples() {
        let graph = make_test_graph();
        assert_eq!(graph.iter().count(), 3);

        let triples = graph.to_triples();
        assert_eq!(triples[0].o, Term::string("Bob"));
        assert_eq!(triples[2].p.as_ref(), AGE);
    }

    #[test]
    fn test_blank_subjects_are_distinct_from_iris() {
        let mut graph = Graph::new();
        graph
            .add_statement(Subject::blank("x"), "urn:p", Term::string("blank"))
            .unwrap();
        graph
            .add_statement(Subject::iri("x"), "urn:p", Term::string("iri"))
            .unwrap();
        assert_eq!(graph.resource_count(), 2);
        assert_eq!(
            graph.first_object(&Subject::blank("x"), "urn:p"),
            Some(&Term::string("blank"))
        );
    }

    #[test]
    fn test_graph_prefixes() {
        let mut graph = Graph::with_base("http://example.org/");
        graph.add_prefix("foaf", "http://xmlns.com/foaf/0.1/");

        assert_eq!(graph.base.as_deref(), Some("http://example.org/"));
        assert_eq!(
            graph.prefixes.get("foaf").map(String::as_str),
            Some("http://xmlns.com/foaf/0.1/")
        );
    }
}
