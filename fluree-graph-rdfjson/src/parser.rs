//! RDF/JSON parser that emits to GraphSink.
//!
//! An RDF/JSON document nests object descriptions under predicates under
//! subjects:
//!
//! ```json
//! { "http://example.org/s": {
//!     "http://example.org/p": [
//!       { "type": "literal", "value": "v", "lang": "en" }
//!     ] } }
//! ```
//!
//! Subjects starting with `_:` are blank nodes. Objects carry a `type` of
//! `uri`, `bnode` or `literal`; literals may add `lang` or `datatype`.

use fluree_graph_ir::{iri, Datatype, GraphSink, Literal, TermId};
use serde::Deserialize;
use serde_json::Value;
use tracing::trace;

use crate::error::{RdfJsonError, Result};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum NodeType {
    Uri,
    Bnode,
    Literal,
}

/// One entry of a predicate's object array
#[derive(Debug, Deserialize)]
struct ObjectSpec {
    #[serde(rename = "type")]
    kind: NodeType,
    value: String,
    #[serde(default)]
    lang: Option<String>,
    #[serde(default)]
    datatype: Option<String>,
}

/// Parse an RDF/JSON document into GraphSink events.
///
/// Relative IRIs resolve against `base`.
pub fn parse_rdfjson<S: GraphSink>(input: &str, sink: &mut S, base: Option<&str>) -> Result<()> {
    let document: Value = serde_json::from_str(input)?;
    to_graph_events(&document, sink, base)
}

/// Walk an already-decoded RDF/JSON value.
pub fn to_graph_events<S: GraphSink>(
    document: &Value,
    sink: &mut S,
    base: Option<&str>,
) -> Result<()> {
    let subjects = document
        .as_object()
        .ok_or_else(|| RdfJsonError::structure("$", "expected an object keyed by subject"))?;

    for (subject_key, predicates) in subjects {
        let path = format!("$[{subject_key:?}]");
        trace!(subject = %subject_key, "rdf/json subject");
        let subject = match subject_key.strip_prefix("_:") {
            Some(label) => sink.term_blank(Some(non_empty(label, &path, "blank node label")?)),
            None => {
                let iri = resolve(base, non_empty(subject_key, &path, "subject")?)?;
                sink.term_iri(&iri)
            }
        };

        let predicates = predicates
            .as_object()
            .ok_or_else(|| RdfJsonError::structure(&path, "expected an object keyed by predicate"))?;

        for (predicate_key, objects) in predicates {
            let path = format!("{path}[{predicate_key:?}]");
            if predicate_key.starts_with("_:") {
                return Err(RdfJsonError::structure(&path, "predicate cannot be a blank node"));
            }
            let predicate_iri = resolve(base, non_empty(predicate_key, &path, "predicate")?)?;
            let predicate = sink.term_iri(&predicate_iri);

            let objects = objects
                .as_array()
                .ok_or_else(|| RdfJsonError::structure(&path, "expected an array of objects"))?;

            for (index, object) in objects.iter().enumerate() {
                let path = format!("{path}[{index}]");
                let spec = ObjectSpec::deserialize(object)
                    .map_err(|e| RdfJsonError::structure(&path, e.to_string()))?;
                let object = object_term(spec, sink, base, &path)?;
                sink.emit_triple(subject, predicate, object)?;
            }
        }
    }
    Ok(())
}

fn object_term<S: GraphSink>(
    spec: ObjectSpec,
    sink: &mut S,
    base: Option<&str>,
    path: &str,
) -> Result<TermId> {
    match spec.kind {
        NodeType::Uri => {
            let iri = resolve(base, &spec.value)?;
            Ok(sink.term_iri(&iri))
        }
        NodeType::Bnode => {
            let label = spec.value.strip_prefix("_:").unwrap_or(&spec.value);
            Ok(sink.term_blank(Some(non_empty(label, path, "blank node label")?)))
        }
        NodeType::Literal => {
            let datatype = spec
                .datatype
                .as_deref()
                .map(|dt| resolve(base, dt).map(Datatype::from_iri))
                .transpose()?;
            let lang = spec.lang.as_deref().filter(|lang| !lang.is_empty());
            let literal = Literal::new(&spec.value, datatype, lang)?;
            Ok(sink.term_literal(literal))
        }
    }
}

fn non_empty<'a>(value: &'a str, path: &str, what: &str) -> Result<&'a str> {
    if value.is_empty() {
        Err(RdfJsonError::structure(path, format!("{what} cannot be empty")))
    } else {
        Ok(value)
    }
}

fn resolve(base: Option<&str>, reference: &str) -> Result<String> {
    if iri::is_absolute(reference) {
        return Ok(reference.to_string());
    }
    base.and_then(|base| iri::resolve(base, reference))
        .ok_or_else(|| {
            RdfJsonError::IriResolution(format!(
                "cannot resolve <{reference}> without an absolute base"
            ))
        })
}
