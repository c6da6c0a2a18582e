//! RDF statement types

use crate::{Subject, Term};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// An owned RDF statement: subject, predicate IRI, object
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Triple {
    /// Subject (IRI or blank node)
    pub s: Subject,
    /// Predicate (expanded IRI)
    pub p: Arc<str>,
    /// Object (IRI, blank node, or literal)
    pub o: Term,
}

impl Triple {
    /// Create a new triple
    pub fn new(s: Subject, p: impl AsRef<str>, o: Term) -> Self {
        Self {
            s,
            p: Arc::from(p.as_ref()),
            o,
        }
    }

    /// Borrow this triple as a [`TripleRef`]
    pub fn as_ref(&self) -> TripleRef<'_> {
        TripleRef {
            s: &self.s,
            p: &self.p,
            o: &self.o,
        }
    }
}

impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.as_ref().fmt(f)
    }
}

/// A borrowed view of a statement stored in a [`crate::Graph`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TripleRef<'a> {
    pub s: &'a Subject,
    pub p: &'a str,
    pub o: &'a Term,
}

impl TripleRef<'_> {
    /// Clone into an owned [`Triple`]
    pub fn to_owned(&self) -> Triple {
        Triple::new(self.s.clone(), self.p, self.o.clone())
    }

    /// True if neither the subject nor the object is a blank node
    pub fn is_ground(&self) -> bool {
        !self.s.is_blank() && !self.o.is_blank()
    }
}

impl std::fmt::Display for TripleRef<'_> {
    /// N-Triples-like line, without the trailing ` .`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}> {}", self.s, self.p, self.o)
    }
}
