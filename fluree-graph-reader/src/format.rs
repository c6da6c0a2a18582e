//! Built-in serialization formats and their names

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// A serialization with a reader shipped in this workspace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    #[serde(rename = "rdfxml")]
    RdfXml,
    #[serde(rename = "ntriples")]
    NTriples,
    #[serde(rename = "turtle")]
    Turtle,
    #[serde(rename = "json")]
    RdfJson,
}

impl Format {
    pub const ALL: [Format; 4] = [
        Format::RdfXml,
        Format::NTriples,
        Format::Turtle,
        Format::RdfJson,
    ];

    /// Canonical format name
    pub fn name(self) -> &'static str {
        match self {
            Format::RdfXml => "rdfxml",
            Format::NTriples => "ntriples",
            Format::Turtle => "turtle",
            Format::RdfJson => "json",
        }
    }

    /// Every name the format is registered under, canonical name first
    pub fn names(self) -> &'static [&'static str] {
        match self {
            Format::RdfXml => &["rdfxml", "xml"],
            Format::NTriples => &["ntriples", "nt"],
            Format::Turtle => &["turtle", "ttl"],
            Format::RdfJson => &["json", "rdfjson"],
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Format::RdfXml => "application/rdf+xml",
            Format::NTriples => "application/n-triples",
            Format::Turtle => "text/turtle",
            Format::RdfJson => "application/rdf+json",
        }
    }

    /// Look a format up by any of its names, ignoring ASCII case
    pub fn from_name(name: &str) -> Option<Format> {
        Format::ALL.into_iter().find(|format| {
            format
                .names()
                .iter()
                .any(|candidate| candidate.eq_ignore_ascii_case(name))
        })
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::from_name(s).ok_or_else(|| ParseError::UnsupportedFormat(s.to_string()))
    }
}
