//! Datatype registry
//!
//! Bidirectional mapping between a datatype IRI and a native-type tag. A host
//! populates the registry before parsing; readers never touch it. Literals are
//! resolved to native values on demand with [`crate::Literal::native_value`].
//!
//! The forward map (datatype → tag) and the reverse map (tag → datatype) are
//! updated independently:
//!
//! - `set` overwrites the forward entry and repoints the reverse entry of the
//!   new tag. A reverse entry for a previously mapped tag is left stale.
//! - `delete` removes the forward entry and the reverse entry keyed by the tag
//!   it mapped to, even when that reverse entry now points at another datatype.

use crate::error::{GraphError, Result};
use fluree_vocab::{xsd, Namespaces};
use parking_lot::RwLock;
use std::collections::HashMap;

/// Built-in native type tags understood by [`crate::LiteralValue::from_lexical`]
pub mod native {
    pub const STRING: &str = "string";
    pub const BOOLEAN: &str = "boolean";
    pub const INTEGER: &str = "integer";
    pub const DOUBLE: &str = "double";
    pub const DECIMAL: &str = "decimal";
    pub const JSON: &str = "json";
    pub const DATE: &str = "date";
    pub const DATE_TIME: &str = "dateTime";
}

/// XSD datatypes registered by [`DatatypeRegistry::register_builtins`]
const BUILTINS: &[(&str, &str)] = &[
    (xsd::STRING, native::STRING),
    (xsd::BOOLEAN, native::BOOLEAN),
    (xsd::INTEGER, native::INTEGER),
    (xsd::DOUBLE, native::DOUBLE),
    (xsd::DECIMAL, native::DECIMAL),
    (fluree_vocab::rdf::JSON, native::JSON),
    (xsd::DATE, native::DATE),
    (xsd::DATE_TIME, native::DATE_TIME),
];

#[derive(Debug, Default)]
struct Maps {
    by_datatype: HashMap<String, String>,
    by_tag: HashMap<String, String>,
}

/// Thread-safe datatype ↔ native tag registry
///
/// Datatype arguments are normalized through the registry's [`Namespaces`],
/// so `xsd:dateTime` and its expanded IRI address the same entry. Tag
/// arguments are matched exactly.
///
/// ```
/// use fluree_graph_ir::DatatypeRegistry;
///
/// let registry = DatatypeRegistry::new();
/// registry.set("xsd:dateTime", "DateTimeTag").unwrap();
///
/// assert_eq!(
///     registry.class_for_datatype("xsd:dateTime").unwrap().as_deref(),
///     Some("DateTimeTag")
/// );
/// assert_eq!(
///     registry.datatype_for_class("DateTimeTag").unwrap().as_deref(),
///     Some("http://www.w3.org/2001/XMLSchema#dateTime")
/// );
/// ```
#[derive(Debug)]
pub struct DatatypeRegistry {
    namespaces: Namespaces,
    maps: RwLock<Maps>,
}

impl DatatypeRegistry {
    /// Create an empty registry that expands datatypes with the default prefixes
    pub fn new() -> Self {
        Self::with_namespaces(Namespaces::with_defaults())
    }

    /// Create an empty registry that expands datatypes with `namespaces`
    pub fn with_namespaces(namespaces: Namespaces) -> Self {
        Self {
            namespaces,
            maps: RwLock::new(Maps::default()),
        }
    }

    /// Namespaces used to normalize datatype arguments
    pub fn namespaces(&self) -> &Namespaces {
        &self.namespaces
    }

    /// Map the XSD (and `rdf:JSON`) datatypes to the built-in native tags
    pub fn register_builtins(&self) -> Result<()> {
        for (datatype, tag) in BUILTINS {
            self.set(datatype, tag)?;
        }
        Ok(())
    }

    /// Map `datatype` to `tag`, returning the tag it was previously mapped to.
    pub fn set(&self, datatype: &str, tag: &str) -> Result<Option<String>> {
        let datatype = self.normalize("datatype", datatype)?;
        require("class", tag)?;

        let mut maps = self.maps.write();
        let previous = maps.by_datatype.insert(datatype.clone(), tag.to_string());
        maps.by_tag.insert(tag.to_string(), datatype.clone());
        tracing::debug!(%datatype, tag, "datatype mapping set");
        Ok(previous)
    }

    /// Native tag registered for `datatype`, if any
    pub fn class_for_datatype(&self, datatype: &str) -> Result<Option<String>> {
        let datatype = self.normalize("datatype", datatype)?;
        Ok(self.maps.read().by_datatype.get(&datatype).cloned())
    }

    /// Datatype IRI registered for `tag`, if any (exact match, no expansion)
    pub fn datatype_for_class(&self, tag: &str) -> Result<Option<String>> {
        require("class", tag)?;
        Ok(self.maps.read().by_tag.get(tag).cloned())
    }

    /// Remove the mapping for `datatype`, returning the tag it mapped to.
    ///
    /// The reverse entry for that tag is removed unconditionally.
    pub fn delete(&self, datatype: &str) -> Result<Option<String>> {
        let datatype = self.normalize("datatype", datatype)?;

        let mut maps = self.maps.write();
        let removed = maps.by_datatype.remove(&datatype);
        if let Some(tag) = &removed {
            maps.by_tag.remove(tag);
            tracing::debug!(%datatype, tag = tag.as_str(), "datatype mapping deleted");
        }
        Ok(removed)
    }

    /// Number of datatypes with a registered tag
    pub fn len(&self) -> usize {
        self.maps.read().by_datatype.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.read().by_datatype.is_empty()
    }

    fn normalize(&self, argument: &'static str, datatype: &str) -> Result<String> {
        require(argument, datatype)?;
        Ok(self.namespaces.expand(datatype))
    }
}

impl Default for DatatypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn require(argument: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(GraphError::empty_argument(argument));
    }
    Ok(())
}
