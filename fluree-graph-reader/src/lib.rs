//! Format dispatch for the fluree graph readers.
//!
//! [`GraphParser`] is the single entry point: it validates
//! `(source, content, format)`, selects a [`GraphReader`] by format name and
//! returns the canonical [`Graph`]. Readers for RDF/XML, N-Triples, Turtle and
//! RDF/JSON are registered by default:
//!
//! | format     | names                |
//! |------------|----------------------|
//! | RDF/XML    | `rdfxml`, `xml`      |
//! | N-Triples  | `ntriples`, `nt`     |
//! | Turtle     | `turtle`, `ttl`      |
//! | RDF/JSON   | `json`, `rdfjson`    |
//!
//! Literal datatypes can be mapped to native values afterwards through a
//! [`DatatypeRegistry`]; parsing never consults it.
//!
//! # Example
//!
//! ```
//! use fluree_graph_reader::{DatatypeRegistry, GraphParser, Subject};
//!
//! let graph = GraphParser::new()
//!     .parse(
//!         "http://example.org/doc",
//!         "<http://example.org/a> <http://example.org/age> \"42\"^^<http://www.w3.org/2001/XMLSchema#integer> .",
//!         "nt",
//!     )
//!     .unwrap();
//!
//! let registry = DatatypeRegistry::new();
//! registry.register_builtins().unwrap();
//!
//! let age = graph
//!     .first_object(&Subject::iri("http://example.org/a"), "http://example.org/age")
//!     .and_then(|term| term.as_literal())
//!     .and_then(|literal| literal.native_value(&registry))
//!     .and_then(|value| value.as_integer());
//! assert_eq!(age, Some(42));
//! ```

pub mod config;
pub mod conformance;
mod error;
pub mod format;
pub mod parser;
pub mod reader;

pub use config::ParserConfig;
pub use error::{Error, ParseError, Result};
pub use format::Format;
pub use parser::{GraphParser, ParseRequest};
pub use reader::{
    builtin_reader, GraphReader, NTriplesReader, RdfJsonReader, RdfXmlReader, ReadContext,
    ReaderRegistry, TurtleReader,
};

pub use fluree_graph_ir::{
    DatatypeRegistry, Graph, Literal, LiteralValue, NodeKind, Resource, Subject, Term, XsdDate,
    XsdDateTime,
};
pub use fluree_vocab::Namespaces;
