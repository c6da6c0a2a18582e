//! Typed literals from every reader, resolved through a shared registry.

mod support;

use std::sync::Arc;

use fluree_graph_reader::{DatatypeRegistry, GraphParser, LiteralValue, Subject};
use pretty_assertions::assert_eq;

const SOURCE: &str = "http://example.org/doc";
const AGE: &str = "http://example.org/age";
const MONEY: &str = "http://example.org/types#money";

const TURTLE: &str = r#"@prefix ex: <http://example.org/> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
ex:joe ex:age 42 ;
    ex:price "9.99"^^<http://example.org/types#money> ."#;

const RDFXML: &str = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:ex="http://example.org/">
  <rdf:Description rdf:about="http://example.org/joe">
    <ex:age rdf:datatype="http://www.w3.org/2001/XMLSchema#integer">42</ex:age>
    <ex:price rdf:datatype="http://example.org/types#money">9.99</ex:price>
  </rdf:Description>
</rdf:RDF>"#;

const RDFJSON: &str = r#"{
  "http://example.org/joe": {
    "http://example.org/age": [
      { "type": "literal", "value": "42", "datatype": "http://www.w3.org/2001/XMLSchema#integer" }
    ],
    "http://example.org/price": [
      { "type": "literal", "value": "9.99", "datatype": "http://example.org/types#money" }
    ]
  }
}"#;

fn native(
    parser: &GraphParser,
    registry: &DatatypeRegistry,
    content: &str,
    format: &str,
    predicate: &str,
) -> Option<LiteralValue> {
    let graph = parser.parse(SOURCE, content, format).unwrap();
    let joe = Subject::iri("http://example.org/joe");
    let literal = graph.first_object(&joe, predicate)?.as_literal()?.clone();
    literal.native_value(registry)
}

#[test]
fn builtin_tags_resolve_in_every_format() {
    support::init_tracing();
    let parser = GraphParser::new();
    let registry = DatatypeRegistry::new();
    registry.register_builtins().unwrap();

    for (format, content) in [("turtle", TURTLE), ("rdfxml", RDFXML), ("json", RDFJSON)] {
        assert_eq!(
            native(&parser, &registry, content, format, AGE),
            Some(LiteralValue::Integer(42)),
            "format {}",
            format
        );
    }
}

#[test]
fn custom_datatype_round_trip() {
    let parser = GraphParser::new();
    let registry = DatatypeRegistry::new();
    let price = "http://example.org/price";

    // unregistered datatypes stay lexical
    assert_eq!(native(&parser, &registry, TURTLE, "ttl", price), None);

    registry.set(MONEY, "decimal").unwrap();
    assert_eq!(registry.class_for_datatype(MONEY).unwrap().as_deref(), Some("decimal"));
    assert_eq!(registry.datatype_for_class("decimal").unwrap().as_deref(), Some(MONEY));
    for (format, content) in [("ttl", TURTLE), ("xml", RDFXML), ("rdfjson", RDFJSON)] {
        assert_eq!(
            native(&parser, &registry, content, format, price),
            Some(LiteralValue::Decimal(Arc::from("9.99"))),
            "format {}",
            format
        );
    }

    assert_eq!(registry.delete(MONEY).unwrap().as_deref(), Some("decimal"));
    assert_eq!(registry.class_for_datatype(MONEY).unwrap(), None);
    assert_eq!(native(&parser, &registry, RDFJSON, "json", price), None);
}

#[test]
fn registry_shared_between_parsing_threads() {
    let registry = Arc::new(DatatypeRegistry::new());
    registry.register_builtins().unwrap();

    let handles: Vec<_> = [("turtle", TURTLE), ("rdfxml", RDFXML), ("json", RDFJSON)]
        .into_iter()
        .map(|(format, content)| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || native(&GraphParser::new(), &registry, content, format, AGE))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Some(LiteralValue::Integer(42)));
    }
}

#[test]
fn date_times_keep_their_timezone() {
    let parser = GraphParser::new();
    let registry = DatatypeRegistry::new();
    registry.register_builtins().unwrap();
    let born = "http://example.org/born";
    let content = r#"@prefix ex: <http://example.org/> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
ex:joe ex:born "2010-01-01T12:00:00Z"^^xsd:dateTime ;
    ex:seen "whenever"^^xsd:dateTime ."#;

    let value = native(&parser, &registry, content, "turtle", born).unwrap();
    let stamp = value.as_date_time().unwrap();
    assert_eq!(stamp.timezone().as_deref(), Some("Z"));
    assert_eq!(stamp.lexical(), "2010-01-01T12:00:00Z");

    // invalid lexical forms have no native value
    assert_eq!(native(&parser, &registry, content, "turtle", "http://example.org/seen"), None);
}
