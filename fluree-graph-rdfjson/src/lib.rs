//! RDF/JSON parser.
//!
//! Reads the subject → predicate → object-array JSON serialization of RDF
//! with `serde_json` and emits statements to a `fluree_graph_ir::GraphSink`.

pub mod error;
pub mod parser;

pub use error::{RdfJsonError, Result};
pub use parser::{parse_rdfjson, to_graph_events};
