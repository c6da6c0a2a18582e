//! Shared fixtures for fluree-graph-reader integration tests.
//!
//! The FOAF profile below is written once per format; every rendering holds
//! the same ten statements.

// Not every test crate uses every fixture.
#![allow(dead_code)]

use fluree_graph_ir::{Graph, Subject, Term};
use fluree_graph_reader::conformance::Expectations;
use fluree_vocab::{foaf, rdf};

// =============================================================================
// Identifiers
// =============================================================================

/// Source identifier every fixture is parsed from
pub const FOAF_SOURCE: &str = "http://www.example.com/joe/foaf.rdf";

pub const JOE: &str = "http://www.example.com/joe#me";
pub const JOE_HOMEPAGE: &str = "http://www.example.com/joe/";

// =============================================================================
// Known-good documents
// =============================================================================

pub const FOAF_RDFXML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:foaf="http://xmlns.com/foaf/0.1/">
  <foaf:PersonalProfileDocument rdf:about="">
    <foaf:maker rdf:resource="http://www.example.com/joe#me"/>
    <foaf:primaryTopic rdf:resource="http://www.example.com/joe#me"/>
  </foaf:PersonalProfileDocument>
  <foaf:Person rdf:about="http://www.example.com/joe#me">
    <foaf:name>Joe Bloggs</foaf:name>
    <foaf:title>Mr</foaf:title>
    <foaf:homepage rdf:resource="../joe/"/>
    <foaf:currentProject>
      <foaf:Project>
        <foaf:name>Joe's Current Project</foaf:name>
      </foaf:Project>
    </foaf:currentProject>
  </foaf:Person>
</rdf:RDF>
"#;

pub const FOAF_TURTLE: &str = r#"@prefix foaf: <http://xmlns.com/foaf/0.1/> .
@prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .

<> a foaf:PersonalProfileDocument ;
   foaf:maker <http://www.example.com/joe#me> ;
   foaf:primaryTopic <http://www.example.com/joe#me> .

<http://www.example.com/joe#me> a foaf:Person ;
    foaf:name "Joe Bloggs" ;
    foaf:title "Mr" ;
    foaf:homepage <./> ;
    foaf:currentProject [
        a foaf:Project ;
        foaf:name "Joe's Current Project"
    ] .
"#;

pub const FOAF_NTRIPLES: &str = r#"<http://www.example.com/joe/foaf.rdf> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://xmlns.com/foaf/0.1/PersonalProfileDocument> .
<http://www.example.com/joe/foaf.rdf> <http://xmlns.com/foaf/0.1/maker> <http://www.example.com/joe#me> .
<http://www.example.com/joe/foaf.rdf> <http://xmlns.com/foaf/0.1/primaryTopic> <http://www.example.com/joe#me> .
<http://www.example.com/joe#me> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://xmlns.com/foaf/0.1/Person> .
<http://www.example.com/joe#me> <http://xmlns.com/foaf/0.1/name> "Joe Bloggs" .
<http://www.example.com/joe#me> <http://xmlns.com/foaf/0.1/title> "Mr" .
<http://www.example.com/joe#me> <http://xmlns.com/foaf/0.1/homepage> <http://www.example.com/joe/> .
<http://www.example.com/joe#me> <http://xmlns.com/foaf/0.1/currentProject> _:project .
_:project <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://xmlns.com/foaf/0.1/Project> .
_:project <http://xmlns.com/foaf/0.1/name> "Joe's Current Project" .
"#;

pub const FOAF_RDFJSON: &str = r#"{
  "http://www.example.com/joe/foaf.rdf": {
    "http://www.w3.org/1999/02/22-rdf-syntax-ns#type": [
      { "type": "uri", "value": "http://xmlns.com/foaf/0.1/PersonalProfileDocument" }
    ],
    "http://xmlns.com/foaf/0.1/maker": [ { "type": "uri", "value": "http://www.example.com/joe#me" } ],
    "http://xmlns.com/foaf/0.1/primaryTopic": [ { "type": "uri", "value": "http://www.example.com/joe#me" } ]
  },
  "http://www.example.com/joe#me": {
    "http://www.w3.org/1999/02/22-rdf-syntax-ns#type": [ { "type": "uri", "value": "http://xmlns.com/foaf/0.1/Person" } ],
    "http://xmlns.com/foaf/0.1/name": [ { "type": "literal", "value": "Joe Bloggs" } ],
    "http://xmlns.com/foaf/0.1/title": [ { "type": "literal", "value": "Mr" } ],
    "http://xmlns.com/foaf/0.1/homepage": [ { "type": "uri", "value": "http://www.example.com/joe/" } ],
    "http://xmlns.com/foaf/0.1/currentProject": [ { "type": "bnode", "value": "_:project" } ]
  },
  "_:project": {
    "http://www.w3.org/1999/02/22-rdf-syntax-ns#type": [ { "type": "uri", "value": "http://xmlns.com/foaf/0.1/Project" } ],
    "http://xmlns.com/foaf/0.1/name": [ { "type": "literal", "value": "Joe's Current Project" } ]
  }
}"#;

/// Number of statements in every FOAF rendering
pub const FOAF_STATEMENTS: usize = 10;

/// (format name, known-good document) for every built-in reader
pub const FOAF_FIXTURES: [(&str, &str); 4] = [
    ("rdfxml", FOAF_RDFXML),
    ("ntriples", FOAF_NTRIPLES),
    ("turtle", FOAF_TURTLE),
    ("json", FOAF_RDFJSON),
];

// =============================================================================
// Malformed documents
// =============================================================================

pub const MALFORMED_RDFXML: &str = "<rdf></xml>";

pub const MALFORMED_TURTLE: &str = r#"@prefix foaf: <http://xmlns.com/foaf/0.1/> .
<http://www.example.com/joe#me> foaf:name "Joe Bloggs" ;
    foaf:currentProject [ foaf:name "unterminated"
"#;

pub const MALFORMED_NTRIPLES: &str =
    "<http://www.example.com/joe#me> <http://xmlns.com/foaf/0.1/name> \"Joe Bloggs\"\n";

pub const MALFORMED_RDFJSON: &str = r#"{
  "http://www.example.com/joe#me": {
    "http://xmlns.com/foaf/0.1/name": [ { "type": "literal", "value": "Joe Bloggs" }
"#;

// =============================================================================
// Assertions
// =============================================================================

/// What the conformance suite looks for in every FOAF rendering
pub fn foaf_expectations() -> Expectations {
    Expectations {
        subject: Subject::iri(JOE),
        literal: (foaf::NAME.to_string(), Term::string("Joe Bloggs")),
        resource: (foaf::HOMEPAGE.to_string(), Term::iri(JOE_HOMEPAGE)),
        blank: (
            foaf::CURRENT_PROJECT.to_string(),
            foaf::NAME.to_string(),
            Term::string("Joe's Current Project"),
        ),
    }
}

/// Check the statements every FOAF rendering must produce
pub fn assert_parsed_foaf_valid(graph: &Graph) {
    let joe = Subject::iri(JOE);

    assert_eq!(graph.len(), FOAF_STATEMENTS);
    assert_eq!(graph.objects_of(&joe, rdf::TYPE), &[Term::iri(foaf::PERSON)]);
    assert_eq!(graph.objects_of(&joe, foaf::NAME), &[Term::string("Joe Bloggs")]);
    assert_eq!(
        graph.objects_of(&joe, foaf::HOMEPAGE),
        &[Term::iri(JOE_HOMEPAGE)]
    );

    let project = graph.objects_of(&joe, foaf::CURRENT_PROJECT);
    assert_eq!(project.len(), 1);
    assert!(project[0].is_blank(), "currentProject should be a blank node");
    let project = project[0].to_subject().expect("blank node subject");
    assert_eq!(
        graph.objects_of(&project, foaf::NAME),
        &[Term::string("Joe's Current Project")]
    );

    let doc = Subject::iri(FOAF_SOURCE);
    assert_eq!(
        graph.objects_of(&doc, "http://xmlns.com/foaf/0.1/primaryTopic"),
        &[Term::iri(JOE)]
    );
}

/// Statements without blank nodes, as sorted N-Triples lines
pub fn ground_statements(graph: &Graph) -> Vec<String> {
    let mut lines: Vec<String> = graph
        .iter()
        .filter(|triple| triple.is_ground())
        .map(|triple| triple.to_string())
        .collect();
    lines.sort();
    lines
}

/// Send reader logs to the test harness (`RUST_LOG=debug` to see them)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
