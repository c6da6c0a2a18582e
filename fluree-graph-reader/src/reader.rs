//! The reader capability and the name → reader registry
//!
//! A [`GraphReader`] turns `(source, content)` into a complete [`Graph`] or a
//! [`ParseError`]. The four built-in readers wrap the format crates; hosts can
//! register their own under any name.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use fluree_graph_ir::{Graph, GraphCollectorSink};
use fluree_graph_turtle::TurtleOptions;
use fluree_vocab::Namespaces;

use crate::error::ParseError;
use crate::format::Format;

/// Per-call settings handed to a reader by the dispatcher
#[derive(Clone, Copy, Debug)]
pub struct ReadContext<'a> {
    /// Prefix for generated blank node labels
    pub blank_node_prefix: &'a str,
    /// Host prefix table for identifiers the document does not declare
    pub namespaces: &'a Namespaces,
}

impl ReadContext<'_> {
    /// A fresh sink whose base is `source`
    pub fn sink(&self, source: &str) -> GraphCollectorSink {
        GraphCollectorSink::with_base(source).with_blank_prefix(self.blank_node_prefix)
    }
}

/// A format-specific reader.
///
/// `source` identifies where the content came from and is the base for
/// relative identifiers. Implementations return either a complete graph or a
/// `ParseError`; never a partial graph.
pub trait GraphReader: Send + Sync {
    fn read(
        &self,
        source: &str,
        content: &str,
        context: &ReadContext<'_>,
    ) -> Result<Graph, ParseError>;
}

impl<F> GraphReader for F
where
    F: Fn(&str, &str, &ReadContext<'_>) -> Result<Graph, ParseError> + Send + Sync,
{
    fn read(
        &self,
        source: &str,
        content: &str,
        context: &ReadContext<'_>,
    ) -> Result<Graph, ParseError> {
        self(source, content, context)
    }
}

/// Turtle reader
#[derive(Clone, Copy, Debug, Default)]
pub struct TurtleReader;

impl GraphReader for TurtleReader {
    fn read(
        &self,
        source: &str,
        content: &str,
        context: &ReadContext<'_>,
    ) -> Result<Graph, ParseError> {
        let options = TurtleOptions::new()
            .with_base(source)
            .with_namespaces(context.namespaces.clone());
        let mut sink = context.sink(source);
        fluree_graph_turtle::parse_with(content, &mut sink, &options)
            .map_err(|e| ParseError::syntax(Format::Turtle.name(), e))?;
        Ok(sink.finish())
    }
}

/// N-Triples reader
#[derive(Clone, Copy, Debug, Default)]
pub struct NTriplesReader;

impl GraphReader for NTriplesReader {
    fn read(
        &self,
        source: &str,
        content: &str,
        context: &ReadContext<'_>,
    ) -> Result<Graph, ParseError> {
        let mut sink = context.sink(source);
        fluree_graph_turtle::parse_ntriples(content, &mut sink)
            .map_err(|e| ParseError::syntax(Format::NTriples.name(), e))?;
        Ok(sink.finish())
    }
}

/// RDF/XML reader
#[derive(Clone, Copy, Debug, Default)]
pub struct RdfXmlReader;

impl GraphReader for RdfXmlReader {
    fn read(
        &self,
        source: &str,
        content: &str,
        context: &ReadContext<'_>,
    ) -> Result<Graph, ParseError> {
        let mut sink = context.sink(source);
        fluree_graph_rdfxml::parse_rdfxml(content, &mut sink, Some(source))
            .map_err(|e| ParseError::syntax(Format::RdfXml.name(), e))?;
        Ok(sink.finish())
    }
}

/// RDF/JSON reader
#[derive(Clone, Copy, Debug, Default)]
pub struct RdfJsonReader;

impl GraphReader for RdfJsonReader {
    fn read(
        &self,
        source: &str,
        content: &str,
        context: &ReadContext<'_>,
    ) -> Result<Graph, ParseError> {
        let mut sink = context.sink(source);
        fluree_graph_rdfjson::parse_rdfjson(content, &mut sink, Some(source))
            .map_err(|e| ParseError::syntax(Format::RdfJson.name(), e))?;
        Ok(sink.finish())
    }
}

/// The built-in reader for `format`
pub fn builtin_reader(format: Format) -> Arc<dyn GraphReader> {
    match format {
        Format::RdfXml => Arc::new(RdfXmlReader),
        Format::NTriples => Arc::new(NTriplesReader),
        Format::Turtle => Arc::new(TurtleReader),
        Format::RdfJson => Arc::new(RdfJsonReader),
    }
}

/// Format name → reader map.
///
/// Names are matched case-insensitively (stored lowercased).
#[derive(Clone, Default)]
pub struct ReaderRegistry {
    readers: BTreeMap<String, Arc<dyn GraphReader>>,
}

impl ReaderRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in readers under every format name
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for format in Format::ALL {
            let reader = builtin_reader(format);
            for name in format.names() {
                registry.insert(name, Arc::clone(&reader));
            }
        }
        registry
    }

    /// Register `reader` under `name`, returning the reader it replaced
    pub fn register(
        &mut self,
        name: &str,
        reader: impl GraphReader + 'static,
    ) -> Option<Arc<dyn GraphReader>> {
        self.insert(name, Arc::new(reader))
    }

    pub fn insert(&mut self, name: &str, reader: Arc<dyn GraphReader>) -> Option<Arc<dyn GraphReader>> {
        self.readers.insert(name.to_ascii_lowercase(), reader)
    }

    pub fn remove(&mut self, name: &str) -> Option<Arc<dyn GraphReader>> {
        self.readers.remove(&name.to_ascii_lowercase())
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn GraphReader>> {
        self.readers.get(&name.to_ascii_lowercase())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Registered names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.readers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.readers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readers.is_empty()
    }
}

impl fmt::Debug for ReaderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReaderRegistry")
            .field("names", &self.names().collect::<Vec<_>>())
            .finish()
    }
}
