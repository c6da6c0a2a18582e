//! RDF datatype representation
//!
//! A datatype is always an expanded IRI. Literals without a datatype (plain
//! strings and language-tagged strings) carry `None` instead of a default
//! `xsd:string`, so the graph keeps exactly what the source document said.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Common XSD and RDF datatype IRIs (re-exported from vocab crate)
pub mod iri {
    pub use fluree_vocab::rdf::{
        JSON as RDF_JSON, LANG_STRING as RDF_LANG_STRING, XML_LITERAL as RDF_XML_LITERAL,
    };
    pub use fluree_vocab::xsd::{
        ANY_URI as XSD_ANY_URI, BOOLEAN as XSD_BOOLEAN, DATE as XSD_DATE,
        DATE_TIME as XSD_DATE_TIME, DECIMAL as XSD_DECIMAL, DOUBLE as XSD_DOUBLE,
        INTEGER as XSD_INTEGER, LONG as XSD_LONG, STRING as XSD_STRING,
    };
}

/// RDF literal datatype (always an expanded IRI)
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Datatype(Arc<str>);

impl Datatype {
    /// Create a datatype from an expanded IRI
    pub fn from_iri(iri: impl AsRef<str>) -> Self {
        Datatype(Arc::from(iri.as_ref()))
    }

    /// xsd:string
    pub fn xsd_string() -> Self {
        Self::from_iri(iri::XSD_STRING)
    }

    /// xsd:boolean
    pub fn xsd_boolean() -> Self {
        Self::from_iri(iri::XSD_BOOLEAN)
    }

    /// xsd:integer
    pub fn xsd_integer() -> Self {
        Self::from_iri(iri::XSD_INTEGER)
    }

    /// xsd:long
    pub fn xsd_long() -> Self {
        Self::from_iri(iri::XSD_LONG)
    }

    /// xsd:double
    pub fn xsd_double() -> Self {
        Self::from_iri(iri::XSD_DOUBLE)
    }

    /// xsd:decimal
    pub fn xsd_decimal() -> Self {
        Self::from_iri(iri::XSD_DECIMAL)
    }

    /// xsd:date
    pub fn xsd_date() -> Self {
        Self::from_iri(iri::XSD_DATE)
    }

    /// xsd:dateTime
    pub fn xsd_date_time() -> Self {
        Self::from_iri(iri::XSD_DATE_TIME)
    }

    /// rdf:XMLLiteral - produced by `rdf:parseType="Literal"`
    pub fn rdf_xml_literal() -> Self {
        Self::from_iri(iri::RDF_XML_LITERAL)
    }

    /// rdf:JSON
    pub fn rdf_json() -> Self {
        Self::from_iri(iri::RDF_JSON)
    }

    /// Get the IRI of this datatype
    pub fn as_iri(&self) -> &str {
        &self.0
    }

    /// Check if this is the xsd:string datatype
    pub fn is_xsd_string(&self) -> bool {
        self.as_iri() == iri::XSD_STRING
    }

    /// Check if this is the rdf:langString datatype
    pub fn is_lang_string(&self) -> bool {
        self.as_iri() == iri::RDF_LANG_STRING
    }

    /// Check if this is a numeric type (integer family, double, decimal)
    pub fn is_numeric(&self) -> bool {
        fluree_vocab::xsd::is_integer_family(self.as_iri())
            || matches!(self.as_iri(), iri::XSD_DOUBLE | iri::XSD_DECIMAL)
    }
}

impl std::fmt::Display for Datatype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_iri())
    }
}
