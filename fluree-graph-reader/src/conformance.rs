//! Behavioural checks every registered reader must pass
//!
//! [`ConformanceSuite`] drives a [`GraphParser`] through one format: argument
//! validation, a known-good document, a malformed document and an
//! unregistered format name. Hosts can point it at their own readers.
//!
//! ```
//! use fluree_graph_reader::conformance::{ConformanceSuite, Expectations};
//! use fluree_graph_reader::GraphParser;
//! use fluree_graph_ir::{Subject, Term};
//!
//! let parser = GraphParser::new();
//! let expect = Expectations {
//!     subject: Subject::iri("http://example.org/a"),
//!     literal: ("http://example.org/name".into(), Term::string("A")),
//!     resource: ("http://example.org/see".into(), Term::iri("http://example.org/b")),
//!     blank: (
//!         "http://example.org/knows".into(),
//!         "http://example.org/name".into(),
//!         Term::string("B"),
//!     ),
//! };
//! let report = ConformanceSuite::new(&parser, "ttl")
//!     .with_source("http://example.org/doc")
//!     .with_valid(
//!         r#"<http://example.org/a> <http://example.org/name> "A" ;
//!                <http://example.org/see> <http://example.org/b> ;
//!                <http://example.org/knows> [ <http://example.org/name> "B" ] ."#,
//!         expect,
//!     )
//!     .with_malformed("<http://example.org/a> <http://example.org/name>")
//!     .run();
//! assert!(report.is_success(), "{}", report);
//! ```

use std::fmt;

use fluree_graph_ir::{Graph, Subject, Term};
use serde_json::json;

use crate::error::{Error, ParseError};
use crate::parser::{GraphParser, ParseRequest};

/// Statements the known-good document must produce
#[derive(Debug, Clone)]
pub struct Expectations {
    /// Named resource every other expectation hangs off
    pub subject: Subject,
    /// (predicate, literal object) of `subject`
    pub literal: (String, Term),
    /// (predicate, named resource object) of `subject`
    pub resource: (String, Term),
    /// (predicate to a blank node, predicate on that node, its object)
    pub blank: (String, String, Term),
}

/// One failed check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub check: &'static str,
    pub message: String,
}

/// Outcome of [`ConformanceSuite::run`]
#[derive(Debug, Clone, Default)]
pub struct ConformanceReport {
    pub passed: Vec<&'static str>,
    pub failures: Vec<Failure>,
}

impl ConformanceReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(&mut self, check: &'static str, outcome: Result<(), String>) {
        match outcome {
            Ok(()) => self.passed.push(check),
            Err(message) => self.failures.push(Failure { check, message }),
        }
    }
}

impl fmt::Display for ConformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} passed, {} failed", self.passed.len(), self.failures.len())?;
        for failure in &self.failures {
            write!(f, "\n  {}: {}", failure.check, failure.message)?;
        }
        Ok(())
    }
}

/// Conformance checks for the reader registered under one format name
pub struct ConformanceSuite<'a> {
    parser: &'a GraphParser,
    format: &'a str,
    source: &'a str,
    valid: Option<(&'a str, Expectations)>,
    malformed: Option<&'a str>,
}

impl<'a> ConformanceSuite<'a> {
    pub fn new(parser: &'a GraphParser, format: &'a str) -> Self {
        Self {
            parser,
            format,
            source: "http://example.org/conformance",
            valid: None,
            malformed: None,
        }
    }

    pub fn with_source(mut self, source: &'a str) -> Self {
        self.source = source;
        self
    }

    /// Known-good document and what it must yield
    pub fn with_valid(mut self, content: &'a str, expect: Expectations) -> Self {
        self.valid = Some((content, expect));
        self
    }

    /// Document the reader must reject
    pub fn with_malformed(mut self, content: &'a str) -> Self {
        self.malformed = Some(content);
        self
    }

    /// Run every check that has its inputs configured
    pub fn run(&self) -> ConformanceReport {
        let mut report = ConformanceReport::default();
        report.record("invalid_arguments", self.check_invalid_arguments());
        report.record("loose_arguments", self.check_loose_arguments());
        if let Some((content, expect)) = &self.valid {
            report.record("known_good", self.check_known_good(content, expect));
        }
        if let Some(content) = self.malformed {
            report.record("malformed", self.check_malformed(content));
        }
        report.record("unsupported_format", self.check_unsupported_format());
        report
    }

    fn content(&self) -> &'a str {
        self.valid
            .as_ref()
            .map_or("irrelevant-content", |(content, _)| *content)
    }

    fn check_invalid_arguments(&self) -> Result<(), String> {
        let content = self.content();
        expect_invalid("source", self.parser.parse("", content, self.format))?;
        expect_invalid("content", self.parser.parse(self.source, "", self.format))?;
        expect_invalid("format", self.parser.parse(self.source, content, ""))
    }

    /// Null and non-string arguments, as a loosely typed caller sends them
    fn check_loose_arguments(&self) -> Result<(), String> {
        let (source, content, format) = (self.source, self.content(), self.format);
        let cases = [
            ("source", json!({ "source": null, "content": content, "format": format })),
            ("source", json!({ "source": 42, "content": content, "format": format })),
            ("content", json!({ "source": source, "content": null, "format": format })),
            ("content", json!({ "source": source, "content": {}, "format": format })),
            ("format", json!({ "source": source, "content": content, "format": null })),
            ("format", json!({ "source": source, "content": content, "format": [] })),
        ];
        for (argument, value) in cases {
            let result = ParseRequest::from_json(&value)
                .and_then(|request| self.parser.parse_request(&request));
            expect_invalid(argument, result)?;
        }
        Ok(())
    }

    fn check_known_good(&self, content: &str, expect: &Expectations) -> Result<(), String> {
        let graph = self
            .parser
            .parse(self.source, content, self.format)
            .map_err(|e| format!("known-good document failed: {e}"))?;

        let (predicate, literal) = &expect.literal;
        expect_object(&graph, &expect.subject, predicate, literal)?;
        let (predicate, resource) = &expect.resource;
        expect_object(&graph, &expect.subject, predicate, resource)?;

        let (link, predicate, object) = &expect.blank;
        let node = graph
            .objects_of(&expect.subject, link)
            .iter()
            .find(|term| term.is_blank())
            .and_then(Term::to_subject)
            .ok_or_else(|| format!("{} has no blank node object for <{}>", expect.subject, link))?;
        expect_object(&graph, &node, predicate, object)
    }

    fn check_malformed(&self, content: &str) -> Result<(), String> {
        match self.parser.parse(self.source, content, self.format) {
            Err(Error::Parse(ParseError::Syntax { .. })) => Ok(()),
            Err(other) => Err(format!("expected a syntax error, got: {other}")),
            Ok(graph) => Err(format!(
                "malformed document accepted with {} statements",
                graph.len()
            )),
        }
    }

    fn check_unsupported_format(&self) -> Result<(), String> {
        let format = format!("no-such-format-{}", self.format);
        match self.parser.parse(self.source, "irrelevant-content", &format) {
            Err(Error::Parse(ParseError::UnsupportedFormat(name))) if name == format => Ok(()),
            Err(other) => Err(format!("expected unsupported format, got: {other}")),
            Ok(_) => Err(format!("format '{format}' unexpectedly parsed")),
        }
    }
}

fn expect_invalid(argument: &str, result: crate::Result<Graph>) -> Result<(), String> {
    match result {
        Err(err) if err.argument() == Some(argument) => Ok(()),
        Err(err) => Err(format!("expected invalid '{argument}', got: {err}")),
        Ok(_) => Err(format!("empty '{argument}' was accepted")),
    }
}

fn expect_object(graph: &Graph, subject: &Subject, predicate: &str, object: &Term) -> Result<(), String> {
    let objects = graph.objects_of(subject, predicate);
    if objects.contains(object) {
        Ok(())
    } else {
        Err(format!(
            "expected {subject} <{predicate}> {object}, found {objects:?}"
        ))
    }
}
