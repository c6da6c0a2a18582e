//! Reader conformance: every built-in format under every registered name.

mod support;

use fluree_graph_reader::GraphParser;
use pretty_assertions::assert_eq;
use support::*;

macro_rules! reader_conformance {
    ($name:ident, $format:expr, $valid:expr, $malformed:expr) => {
        mod $name {
            use super::support::*;
            use fluree_graph_reader::conformance::ConformanceSuite;
            use fluree_graph_reader::{Error, GraphParser, ParseError, ParseRequest};
            use serde_json::json;

            const FORMAT: &str = $format;

            fn parser() -> GraphParser {
                init_tracing();
                GraphParser::new()
            }

            #[test]
            fn rejects_empty_source() {
                let err = parser().parse("", $valid, FORMAT).unwrap_err();
                assert!(err.is_invalid_argument());
                assert_eq!(err.argument(), Some("source"));
            }

            #[test]
            fn rejects_empty_content() {
                let err = parser().parse(FOAF_SOURCE, "", FORMAT).unwrap_err();
                assert_eq!(err.argument(), Some("content"));
            }

            #[test]
            fn rejects_empty_format() {
                let err = parser().parse(FOAF_SOURCE, $valid, "").unwrap_err();
                assert_eq!(err.argument(), Some("format"));
            }

            #[test]
            fn rejects_null_and_non_string_arguments() {
                let cases = [
                    (json!({ "source": null, "content": $valid, "format": FORMAT }), "source"),
                    (json!({ "source": [], "content": $valid, "format": FORMAT }), "source"),
                    (json!({ "source": FOAF_SOURCE, "format": FORMAT }), "content"),
                    (json!({ "source": FOAF_SOURCE, "content": 3.5, "format": FORMAT }), "content"),
                    (json!({ "source": FOAF_SOURCE, "content": $valid, "format": null }), "format"),
                    (json!({ "source": FOAF_SOURCE, "content": $valid, "format": true }), "format"),
                ];
                for (value, argument) in cases {
                    let err = ParseRequest::from_json(&value).unwrap_err();
                    assert!(err.is_invalid_argument());
                    assert_eq!(err.argument(), Some(argument));
                }
            }

            #[test]
            fn parses_known_good_document() {
                let graph = parser().parse(FOAF_SOURCE, $valid, FORMAT).unwrap();
                assert_parsed_foaf_valid(&graph);
            }

            #[test]
            fn parses_loose_request() {
                let request = ParseRequest::from_json(&json!({
                    "source": FOAF_SOURCE,
                    "content": $valid,
                    "format": FORMAT,
                }))
                .unwrap();
                let graph = parser().parse_request(&request).unwrap();
                assert_parsed_foaf_valid(&graph);
            }

            #[test]
            fn malformed_document_is_parse_error() {
                let err = parser().parse(FOAF_SOURCE, $malformed, FORMAT).unwrap_err();
                assert!(err.is_parse_error(), "expected parse error, got {err}");
                assert!(matches!(err, Error::Parse(ParseError::Syntax { .. })));
            }

            #[test]
            fn unknown_format_is_parse_error() {
                let err = parser()
                    .parse(FOAF_SOURCE, "irrelevant-content", "no-such-format")
                    .unwrap_err();
                assert!(err.is_parse_error());
                assert!(!err.is_invalid_argument());
            }

            #[test]
            fn passes_conformance_suite() {
                let parser = parser();
                let report = ConformanceSuite::new(&parser, FORMAT)
                    .with_source(FOAF_SOURCE)
                    .with_valid($valid, foaf_expectations())
                    .with_malformed($malformed)
                    .run();
                assert!(report.is_success(), "{}", report);
                assert_eq!(report.passed.len(), 5);
            }
        }
    };
}

reader_conformance!(rdfxml, "rdfxml", FOAF_RDFXML, MALFORMED_RDFXML);
reader_conformance!(xml, "xml", FOAF_RDFXML, MALFORMED_RDFXML);
reader_conformance!(ntriples, "ntriples", FOAF_NTRIPLES, MALFORMED_NTRIPLES);
reader_conformance!(nt, "nt", FOAF_NTRIPLES, MALFORMED_NTRIPLES);
reader_conformance!(turtle, "turtle", FOAF_TURTLE, MALFORMED_TURTLE);
reader_conformance!(ttl, "ttl", FOAF_TURTLE, MALFORMED_TURTLE);
reader_conformance!(json, "json", FOAF_RDFJSON, MALFORMED_RDFJSON);
reader_conformance!(rdfjson, "rdfjson", FOAF_RDFJSON, MALFORMED_RDFJSON);

#[test]
fn formats_agree_on_ground_statements() {
    let parser = GraphParser::new();
    let graphs: Vec<_> = FOAF_FIXTURES
        .iter()
        .map(|(format, content)| (*format, parser.parse(FOAF_SOURCE, content, format).unwrap()))
        .collect();

    let (_, reference) = &graphs[0];
    let expected = ground_statements(reference);
    assert_eq!(expected.len(), FOAF_STATEMENTS - 3);
    for (format, graph) in &graphs[1..] {
        assert_eq!(ground_statements(graph), expected, "format {}", format);
        assert_eq!(graph.len(), reference.len(), "format {}", format);
    }
}

#[test]
fn blank_labels_are_fresh_per_parse() {
    let parser = GraphParser::new();
    for (format, content) in FOAF_FIXTURES {
        let graph = parser.parse(FOAF_SOURCE, content, format).unwrap();
        let blanks: Vec<_> = graph.subjects().filter(|s| s.is_blank()).collect();
        assert_eq!(blanks.len(), 1, "format {}", format);
        assert_eq!(blanks[0].value(), "genid1", "format {}", format);
    }
}

#[test]
fn malformed_xml_never_yields_a_graph() {
    let parser = GraphParser::new();
    for content in [
        "<rdf></xml>",
        "<rdf:RDF xmlns:rdf=\"http://www.w3.org/1999/02/22-rdf-syntax-ns#\">",
        "not xml at all <",
        "<?xml version=\"1.0\"?>",
        "   ",
        "<!-- c -->",
        "<rdf:RDF xmlns:rdf=\"http://www.w3.org/1999/02/22-rdf-syntax-ns#\"/>\
         <rdf:RDF xmlns:rdf=\"http://www.w3.org/1999/02/22-rdf-syntax-ns#\"/>",
    ] {
        let err = parser.parse(FOAF_SOURCE, content, "rdfxml").unwrap_err();
        assert!(err.is_parse_error(), "{content}: {err}");
    }
}
