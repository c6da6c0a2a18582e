//! Turtle and N-Triples parsers.
//!
//! Both parsers share one winnow lexer and emit to a
//! `fluree_graph_ir::GraphSink`, so the same sink builds a graph from either
//! syntax.
//!
//! # Example
//!
//! ```
//! use fluree_graph_turtle::{parse_with, TurtleOptions};
//! use fluree_graph_ir::{GraphCollectorSink, Subject};
//! use fluree_vocab::Namespaces;
//!
//! let turtle = r#"
//!     <#me> foaf:name "Joe Bloggs" ;
//!           foaf:homepage <./> .
//! "#;
//!
//! let options = TurtleOptions::new()
//!     .with_base("http://www.example.com/joe/foaf.ttl")
//!     .with_namespaces(Namespaces::with_defaults());
//!
//! let mut sink = GraphCollectorSink::new();
//! parse_with(turtle, &mut sink, &options).unwrap();
//! let graph = sink.finish();
//!
//! let me = Subject::iri("http://www.example.com/joe/foaf.ttl#me");
//! assert_eq!(graph.resources_of(&me).len(), 2);
//! ```

pub mod error;
pub mod lex;
pub mod ntriples;
pub mod parser;

pub use error::{Result, TurtleError};
pub use lex::{tokenize, Lexer, Token, TokenKind};
pub use ntriples::parse_ntriples;
pub use parser::{parse, parse_with, TurtleOptions};
