//! Property-based tests for argument validation, cross-format agreement and
//! the datatype registry.

mod support;

use fluree_graph_ir::{DatatypeRegistry, Subject};
use fluree_graph_reader::{GraphParser, ParseRequest};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

const SUBJECTS: &str = "http://example.org/s/";
const PREDICATES: &str = "http://example.org/p/";
const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

#[derive(Debug, Clone)]
enum Object {
    Iri(String),
    Literal(String),
    LangLiteral(String, String),
}

#[derive(Debug, Clone)]
struct Statement {
    subject: String,
    predicate: String,
    object: Object,
}

fn local_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,7}"
}

/// Text that needs no escaping in any of the four syntaxes
fn literal_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ,.!?-]{0,16}"
}

fn object_strategy() -> impl Strategy<Value = Object> {
    prop_oneof![
        local_name().prop_map(Object::Iri),
        literal_text().prop_map(Object::Literal),
        (literal_text(), "[a-z]{2}").prop_map(|(text, lang)| Object::LangLiteral(text, lang)),
    ]
}

fn statement_strategy() -> impl Strategy<Value = Statement> {
    ("[a-c]", "[p-r]", object_strategy()).prop_map(|(subject, predicate, object)| Statement {
        subject,
        predicate,
        object,
    })
}

fn non_string_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        Just(json!([])),
        Just(json!({})),
    ]
}

// =============================================================================
// Renderers
// =============================================================================

fn term_nt(object: &Object) -> String {
    match object {
        Object::Iri(local) => format!("<{SUBJECTS}{local}>"),
        Object::Literal(text) => format!("\"{text}\""),
        Object::LangLiteral(text, lang) => format!("\"{text}\"@{lang}"),
    }
}

fn to_ntriples(statements: &[Statement]) -> String {
    statements
        .iter()
        .map(|st| {
            format!(
                "<{SUBJECTS}{}> <{PREDICATES}{}> {} .\n",
                st.subject,
                st.predicate,
                term_nt(&st.object)
            )
        })
        .collect()
}

fn to_turtle(statements: &[Statement]) -> String {
    let mut out = format!("@prefix s: <{SUBJECTS}> .\n@prefix p: <{PREDICATES}> .\n");
    for st in statements {
        let object = match &st.object {
            Object::Iri(local) => format!("s:{local}"),
            other => term_nt(other),
        };
        out.push_str(&format!("s:{} p:{} {} .\n", st.subject, st.predicate, object));
    }
    out
}

fn to_rdfxml(statements: &[Statement]) -> String {
    let mut out = format!("<rdf:RDF xmlns:rdf=\"{RDF_NS}\" xmlns:p=\"{PREDICATES}\">\n");
    for st in statements {
        let property = match &st.object {
            Object::Iri(local) => format!("<p:{} rdf:resource=\"{SUBJECTS}{local}\"/>", st.predicate),
            Object::Literal(text) => format!("<p:{0}>{1}</p:{0}>", st.predicate, text),
            Object::LangLiteral(text, lang) => {
                format!("<p:{0} xml:lang=\"{2}\">{1}</p:{0}>", st.predicate, text, lang)
            }
        };
        out.push_str(&format!(
            "  <rdf:Description rdf:about=\"{SUBJECTS}{}\">{property}</rdf:Description>\n",
            st.subject
        ));
    }
    out.push_str("</rdf:RDF>\n");
    out
}

fn to_rdfjson(statements: &[Statement]) -> String {
    let mut document = Map::new();
    for st in statements {
        let object = match &st.object {
            Object::Iri(local) => json!({ "type": "uri", "value": format!("{SUBJECTS}{local}") }),
            Object::Literal(text) => json!({ "type": "literal", "value": text }),
            Object::LangLiteral(text, lang) => {
                json!({ "type": "literal", "value": text, "lang": lang })
            }
        };
        let predicates = document
            .entry(format!("{SUBJECTS}{}", st.subject))
            .or_insert_with(|| json!({}));
        if let Some(predicates) = predicates.as_object_mut() {
            let objects = predicates
                .entry(format!("{PREDICATES}{}", st.predicate))
                .or_insert_with(|| json!([]));
            if let Some(objects) = objects.as_array_mut() {
                objects.push(object);
            }
        }
    }
    Value::Object(document).to_string()
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn non_string_argument_is_invalid(field_index in 0usize..3, bad in non_string_value()) {
        let fields = ["source", "content", "format"];
        let mut request = json!({
            "source": "http://example.org/doc",
            "content": "<urn:a> <urn:p> <urn:b> .",
            "format": "nt",
        });
        request[fields[field_index]] = bad;

        let err = ParseRequest::from_json(&request).unwrap_err();
        prop_assert!(err.is_invalid_argument());
        prop_assert_eq!(err.argument(), Some(fields[field_index]));
    }

    #[test]
    fn empty_argument_wins_over_unknown_format(content in "[a-z ]{0,20}", format in "[a-z-]{1,12}") {
        let parser = GraphParser::new();
        let err = parser.parse("", &content, &format).unwrap_err();
        prop_assert_eq!(err.argument(), Some("source"));
    }

    #[test]
    fn formats_agree(statements in prop::collection::vec(statement_strategy(), 1..8)) {
        let parser = GraphParser::new();
        let source = "http://example.org/doc";
        let documents = [
            ("ntriples", to_ntriples(&statements)),
            ("turtle", to_turtle(&statements)),
            ("rdfxml", to_rdfxml(&statements)),
            ("json", to_rdfjson(&statements)),
        ];

        let mut graphs = Vec::new();
        for (format, content) in &documents {
            let graph = parser.parse(source, content, format);
            prop_assert!(graph.is_ok(), "{} rejected {:?}: {:?}", format, content, graph.as_ref().err());
            if let Ok(graph) = graph {
                graphs.push((*format, graph));
            }
        }

        let (_, reference) = &graphs[0];
        prop_assert_eq!(reference.len(), statements.len());
        for st in &statements {
            let subject = Subject::iri(format!("{SUBJECTS}{}", st.subject));
            let predicate = format!("{PREDICATES}{}", st.predicate);
            for (format, graph) in &graphs[1..] {
                prop_assert_eq!(
                    graph.objects_of(&subject, &predicate),
                    reference.objects_of(&subject, &predicate),
                    "format {}", format
                );
            }
        }
    }

    #[test]
    fn registry_set_is_idempotent(local in "[a-zA-Z]{1,12}", tag in "[A-Z][A-Za-z]{0,10}") {
        let registry = DatatypeRegistry::new();
        let datatype = format!("xsd:{local}");
        let expanded = format!("http://www.w3.org/2001/XMLSchema#{local}");

        registry.set(&datatype, &tag).unwrap();
        let first = (
            registry.class_for_datatype(&datatype).unwrap(),
            registry.datatype_for_class(&tag).unwrap(),
        );
        registry.set(&datatype, &tag).unwrap();
        let second = (
            registry.class_for_datatype(&expanded).unwrap(),
            registry.datatype_for_class(&tag).unwrap(),
        );
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first, (Some(tag.clone()), Some(expanded.clone())));
        prop_assert_eq!(registry.len(), 1);

        prop_assert_eq!(registry.delete(&expanded).unwrap(), Some(tag.clone()));
        prop_assert_eq!(registry.class_for_datatype(&datatype).unwrap(), None);
        prop_assert_eq!(registry.datatype_for_class(&tag).unwrap(), None);
    }
}

#[test]
fn foaf_fixture_holds_in_every_format() {
    support::init_tracing();
    let parser = GraphParser::new();
    for (format, content) in support::FOAF_FIXTURES {
        let graph = parser.parse(support::FOAF_SOURCE, content, format).unwrap();
        support::assert_parsed_foaf_valid(&graph);
    }
}
