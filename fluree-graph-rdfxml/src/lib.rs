//! RDF/XML parser.
//!
//! Streams the document with `quick-xml` and emits statements to a
//! `fluree_graph_ir::GraphSink`.
//!
//! # Example
//!
//! ```
//! use fluree_graph_ir::{GraphCollectorSink, Subject, Term};
//! use fluree_graph_rdfxml::parse_rdfxml;
//!
//! let xml = r##"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
//!                     xmlns:foaf="http://xmlns.com/foaf/0.1/">
//!   <foaf:Person rdf:about="#me">
//!     <foaf:name>Joe Bloggs</foaf:name>
//!   </foaf:Person>
//! </rdf:RDF>"##;
//!
//! let mut sink = GraphCollectorSink::new();
//! parse_rdfxml(xml, &mut sink, Some("http://www.example.com/joe/foaf.rdf")).unwrap();
//! let graph = sink.finish();
//!
//! let me = Subject::iri("http://www.example.com/joe/foaf.rdf#me");
//! assert_eq!(
//!     graph.objects_of(&me, "http://xmlns.com/foaf/0.1/name"),
//!     &[Term::string("Joe Bloggs")]
//! );
//! ```

pub mod error;
pub mod parser;

pub use error::{RdfXmlError, Result};
pub use parser::parse_rdfxml;
