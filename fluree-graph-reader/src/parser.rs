//! Format dispatch
//!
//! [`GraphParser::parse`] validates its three arguments in order, picks the
//! reader registered under the format name, and returns the reader's graph.

use fluree_graph_ir::Graph;
use fluree_vocab::Namespaces;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ParserConfig;
use crate::error::{Error, ParseError, Result};
use crate::reader::{GraphReader, ReadContext, ReaderRegistry};

/// Entry point for turning serialized RDF into a [`Graph`].
///
/// ```
/// use fluree_graph_reader::GraphParser;
/// use fluree_graph_ir::{Subject, Term};
///
/// let parser = GraphParser::new();
/// let graph = parser
///     .parse(
///         "http://www.example.com/joe/foaf.ttl",
///         "<#me> foaf:name \"Joe Bloggs\" .",
///         "turtle",
///     )
///     .unwrap();
///
/// let me = Subject::iri("http://www.example.com/joe/foaf.ttl#me");
/// assert_eq!(
///     graph.objects_of(&me, "http://xmlns.com/foaf/0.1/name"),
///     &[Term::string("Joe Bloggs")]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct GraphParser {
    config: ParserConfig,
    namespaces: Namespaces,
    readers: ReaderRegistry,
}

impl Default for GraphParser {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphParser {
    /// A parser with the default configuration and the built-in readers
    pub fn new() -> Self {
        Self::build(ParserConfig::default())
    }

    /// A parser with `config` and the built-in readers
    pub fn with_config(config: ParserConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: ParserConfig) -> Self {
        let mut namespaces = Namespaces::with_defaults();
        namespaces.extend(config.prefixes.clone());
        Self {
            config,
            namespaces,
            readers: ReaderRegistry::with_defaults(),
        }
    }

    /// Replace the reader registry
    pub fn with_readers(mut self, readers: ReaderRegistry) -> Self {
        self.readers = readers;
        self
    }

    /// Register `reader` under `name`, replacing any reader already there
    pub fn register(&mut self, name: &str, reader: impl GraphReader + 'static) -> &mut Self {
        self.readers.register(name, reader);
        self
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn namespaces(&self) -> &Namespaces {
        &self.namespaces
    }

    pub fn readers(&self) -> &ReaderRegistry {
        &self.readers
    }

    pub fn readers_mut(&mut self) -> &mut ReaderRegistry {
        &mut self.readers
    }

    /// Parse `content`, read from `source`, as `format`.
    ///
    /// Fails with `InvalidArgument` if `source`, `content` or `format` (checked
    /// in that order) is empty, or if the content exceeds the configured
    /// size limit. Fails with `ParseError` if no reader is registered for
    /// `format` or the reader rejects the content.
    pub fn parse(&self, source: &str, content: &str, format: &str) -> Result<Graph> {
        require("source", source)?;
        require("content", content)?;
        require("format", format)?;
        if let Some(limit) = self.config.max_content_bytes {
            if content.len() > limit {
                return Err(Error::invalid_argument(
                    "content",
                    format!("{} bytes exceeds the limit of {} bytes", content.len(), limit),
                ));
            }
        }

        let span = tracing::debug_span!("graph_parse", format, source, content_bytes = content.len());
        let _guard = span.enter();

        let Some(reader) = self.readers.get(format) else {
            debug!("no reader registered for format");
            return Err(ParseError::UnsupportedFormat(format.to_string()).into());
        };

        let context = ReadContext {
            blank_node_prefix: &self.config.blank_node_prefix,
            namespaces: &self.namespaces,
        };
        match reader.read(source, content, &context) {
            Ok(graph) => {
                debug!(
                    statements = graph.len(),
                    subjects = graph.resource_count(),
                    "parsed graph"
                );
                Ok(graph)
            }
            Err(err) => {
                warn!(error = %err, "parse failed");
                Err(err.into())
            }
        }
    }

    /// Parse a request already validated by [`ParseRequest::from_json`]
    pub fn parse_request(&self, request: &ParseRequest) -> Result<Graph> {
        self.parse(&request.source, &request.content, &request.format)
    }
}

fn require(argument: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::invalid_argument(argument, "must be a non-empty string"));
    }
    Ok(())
}

/// The three `parse` arguments, as received from a loosely typed caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRequest {
    pub source: String,
    pub content: String,
    pub format: String,
}

impl ParseRequest {
    pub fn new(
        source: impl Into<String>,
        content: impl Into<String>,
        format: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            content: content.into(),
            format: format.into(),
        }
    }

    /// Read `{"source": .., "content": .., "format": ..}`.
    ///
    /// A missing, null, empty or non-string field is an `InvalidArgument`
    /// naming that field; fields are checked in the order above.
    pub fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            source: string_field(value, "source")?,
            content: string_field(value, "content")?,
            format: string_field(value, "format")?,
        })
    }
}

fn string_field(value: &Value, field: &'static str) -> Result<String> {
    match value.get(field) {
        None | Some(Value::Null) => Err(Error::invalid_argument(field, "is required")),
        Some(Value::String(s)) if s.is_empty() => {
            Err(Error::invalid_argument(field, "must be a non-empty string"))
        }
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(Error::invalid_argument(
            field,
            format!("must be a string, found {}", json_type(other)),
        )),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluree_graph_ir::{Subject, Term};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const SOURCE: &str = "http://example.org/doc";

    #[test]
    fn test_arguments_checked_in_order() {
        let parser = GraphParser::new();
        let cases = [
            (("", "", ""), "source"),
            ((SOURCE, "", ""), "content"),
            ((SOURCE, "<a> <b> <c> .", ""), "format"),
        ];
        for ((source, content, format), argument) in cases {
            let err = parser.parse(source, content, format).unwrap_err();
            assert_eq!(err.argument(), Some(argument));
        }
    }

    #[test]
    fn test_unsupported_format_after_validation() {
        let err = GraphParser::new()
            .parse(SOURCE, "irrelevant-content", "no-such-format")
            .unwrap_err();
        assert_eq!(
            err,
            Error::Parse(ParseError::UnsupportedFormat("no-such-format".to_string()))
        );
    }

    #[test]
    fn test_content_limit() {
        let parser =
            GraphParser::with_config(ParserConfig::new().with_max_content_bytes(8)).unwrap();
        let err = parser
            .parse(SOURCE, "<urn:a> <urn:p> <urn:b> .", "ntriples")
            .unwrap_err();
        assert_eq!(err.argument(), Some("content"));
    }

    #[test]
    fn test_config_prefixes_and_blank_prefix() {
        let config = ParserConfig::new()
            .with_blank_node_prefix("node")
            .with_prefix("ex", "http://example.org/vocab#");
        let parser = GraphParser::with_config(config).unwrap();
        let graph = parser
            .parse(SOURCE, "ex:a ex:p [ ex:q \"v\" ] .", "ttl")
            .unwrap();

        let a = Subject::iri("http://example.org/vocab#a");
        assert_eq!(
            graph.objects_of(&a, "http://example.org/vocab#p"),
            &[Term::blank("node1")]
        );
    }

    #[test]
    fn test_with_config_validates() {
        let err = GraphParser::with_config(ParserConfig::new().with_blank_node_prefix(""))
            .unwrap_err();
        assert_eq!(err.argument(), Some("blank_node_prefix"));
    }

    #[test]
    fn test_request_from_json() {
        let request = ParseRequest::from_json(&json!({
            "source": SOURCE,
            "content": "<urn:a> <urn:p> \"x\" .",
            "format": "nt"
        }))
        .unwrap();
        assert_eq!(request, ParseRequest::new(SOURCE, "<urn:a> <urn:p> \"x\" .", "nt"));
        assert_eq!(GraphParser::new().parse_request(&request).unwrap().len(), 1);

        let cases = [
            (json!({}), "source"),
            (json!({ "source": null, "content": 1, "format": 2 }), "source"),
            (json!({ "source": 5, "content": "x", "format": "nt" }), "source"),
            (json!({ "source": SOURCE, "content": ["x"], "format": "nt" }), "content"),
            (json!({ "source": SOURCE, "content": "x", "format": "" }), "format"),
            (json!({ "source": SOURCE, "content": "x", "format": false }), "format"),
            (json!("not an object"), "source"),
        ];
        for (value, argument) in cases {
            let err = ParseRequest::from_json(&value).unwrap_err();
            assert_eq!(err.argument(), Some(argument), "for {}", value);
        }
    }
}
