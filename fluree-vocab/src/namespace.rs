//! Namespace prefix table
//!
//! [`Namespaces`] maps short prefixes (`foaf`, `xsd`, ...) to namespace IRIs and
//! expands compact identifiers like `xsd:dateTime` into full IRIs. Expansion is
//! a pure function of the table: identifiers whose prefix is unknown, and
//! absolute IRIs such as `http://example.org/`, pass through unchanged.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{foaf, owl, rdf, rdfs, xsd};

/// Default prefix bindings installed by [`Namespaces::with_defaults`].
pub const DEFAULT_PREFIXES: &[(&str, &str)] = &[
    ("dc", "http://purl.org/dc/elements/1.1/"),
    ("dcterms", "http://purl.org/dc/terms/"),
    ("foaf", foaf::NS),
    ("owl", owl::NS),
    ("rdf", rdf::NS),
    ("rdfs", rdfs::NS),
    ("schema", "http://schema.org/"),
    ("skos", "http://www.w3.org/2004/02/skos/core#"),
    ("xsd", xsd::NS),
];

/// Prefix → namespace IRI table.
///
/// Ordered by prefix so iteration (and serialization) is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Namespaces {
    prefixes: BTreeMap<String, String>,
}

impl Namespaces {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table holding the well-known RDF prefixes.
    pub fn with_defaults() -> Self {
        let mut ns = Self::new();
        for (prefix, iri) in DEFAULT_PREFIXES {
            ns.set(*prefix, *iri);
        }
        ns
    }

    /// Bind `prefix` to `namespace`, replacing any previous binding.
    pub fn set(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        let prefix = prefix.into();
        let namespace = namespace.into();
        tracing::trace!(%prefix, %namespace, "namespace bound");
        self.prefixes.insert(prefix, namespace);
    }

    /// Namespace IRI bound to `prefix`, if any.
    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.prefixes.get(prefix).map(String::as_str)
    }

    /// Remove the binding for `prefix`. Returns the namespace it was bound to.
    pub fn delete(&mut self, prefix: &str) -> Option<String> {
        self.prefixes.remove(prefix)
    }

    /// Number of bound prefixes.
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    /// True if no prefix is bound.
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// Iterate over `(prefix, namespace)` pairs in prefix order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.prefixes.iter().map(|(p, n)| (p.as_str(), n.as_str()))
    }

    /// Merge all bindings of `other` into this table (`other` wins on conflict).
    pub fn extend(&mut self, other: impl IntoIterator<Item = (String, String)>) {
        self.prefixes.extend(other);
    }

    /// Expand a compact identifier to a full IRI.
    ///
    /// `foaf:name` becomes `http://xmlns.com/foaf/0.1/name` when `foaf` is bound.
    /// Anything else (unknown prefix, absolute IRI, bare word) is returned as-is.
    pub fn expand(&self, identifier: &str) -> String {
        match split_compact(identifier) {
            Some((prefix, local)) => match self.prefixes.get(prefix) {
                Some(namespace) => format!("{}{}", namespace, local),
                None => identifier.to_string(),
            },
            None => identifier.to_string(),
        }
    }

    /// Compact a full IRI using the longest matching namespace.
    ///
    /// Returns `None` when no namespace is a prefix of `iri`.
    pub fn shorten(&self, iri: &str) -> Option<String> {
        self.prefixes
            .iter()
            .filter(|(_, ns)| !ns.is_empty() && iri.starts_with(ns.as_str()))
            .max_by_key(|(_, ns)| ns.len())
            .map(|(prefix, ns)| format!("{}:{}", prefix, &iri[ns.len()..]))
    }
}

impl FromIterator<(String, String)> for Namespaces {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Namespaces {
            prefixes: iter.into_iter().collect(),
        }
    }
}

/// Split `prefix:local` into its parts.
///
/// Rejects forms that are really absolute IRIs (`http://...`) and prefixes that
/// contain `/`. The prefix may not be empty.
fn split_compact(s: &str) -> Option<(&str, &str)> {
    let colon = s.find(':')?;
    let (prefix, local) = (&s[..colon], &s[colon + 1..]);

    if prefix.is_empty() || prefix.contains('/') || local.starts_with("//") {
        return None;
    }

    Some((prefix, local))
}
