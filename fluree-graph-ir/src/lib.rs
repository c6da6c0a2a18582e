//! Format-agnostic RDF graph model
//!
//! This crate provides the canonical types every reader produces, regardless
//! of the serialization the data arrived in (RDF/XML, N-Triples, Turtle,
//! RDF/JSON).
//!
//! # Key Design Principles
//!
//! 1. **Expanded IRIs only** - All IRIs are stored in expanded form. Prefixes
//!    and relative references are resolved by the readers.
//!
//! 2. **Literal shape as written** - A literal keeps its lexical form and at
//!    most one of datatype / language tag. Native values are derived on demand
//!    through a [`DatatypeRegistry`], never stored.
//!
//! 3. **Bag semantics** - [`Graph`] keeps repeated statements and preserves
//!    insertion order at every level.
//!
//! 4. **No literal subjects** - [`Subject`] only has IRI and blank node cases.
//!
//! # Example
//!
//! ```
//! use fluree_graph_ir::{Graph, Subject, Term};
//!
//! let mut graph = Graph::new();
//! let alice = Subject::iri("http://example.org/alice");
//!
//! graph
//!     .add_statement(alice.clone(), "http://xmlns.com/foaf/0.1/name", Term::string("Alice"))
//!     .unwrap();
//!
//! assert_eq!(graph.resources_of(&alice).len(), 1);
//! ```

pub mod datatype;
mod error;
mod graph;
pub mod iri;
mod registry;
mod sink;
mod temporal;
mod term;
mod triple;

pub use datatype::Datatype;
pub use error::{GraphError, Result};
pub use graph::{Graph, Resource};
pub use registry::{native, DatatypeRegistry};
pub use sink::{GraphCollectorSink, GraphSink, TermId, DEFAULT_BLANK_PREFIX};
pub use temporal::{XsdDate, XsdDateTime};
pub use term::{BlankId, Literal, LiteralValue, NodeKind, Subject, Term};
pub use triple::{Triple, TripleRef};
