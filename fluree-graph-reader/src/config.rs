//! Parser configuration

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use fluree_graph_ir::DEFAULT_BLANK_PREFIX;

use crate::error::{Error, Result};

/// Configuration for a [`GraphParser`](crate::GraphParser)
///
/// Deserializable from JSON; every field is optional there.
///
/// ```
/// use fluree_graph_reader::ParserConfig;
/// use serde_json::json;
///
/// let config = ParserConfig::from_json(&json!({
///     "blank_node_prefix": "b",
///     "prefixes": { "ex": "http://example.org/" }
/// }))
/// .unwrap();
/// assert_eq!(config.blank_node_prefix, "b");
/// assert_eq!(config.max_content_bytes, None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParserConfig {
    /// Prefix for generated blank node labels (`genid1`, `genid2`, ...)
    pub blank_node_prefix: String,

    /// Content longer than this many bytes is rejected before parsing
    pub max_content_bytes: Option<usize>,

    /// Extra prefix bindings, layered over the defaults
    pub prefixes: BTreeMap<String, String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            blank_node_prefix: DEFAULT_BLANK_PREFIX.to_string(),
            max_content_bytes: None,
            prefixes: BTreeMap::new(),
        }
    }
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blank_node_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.blank_node_prefix = prefix.into();
        self
    }

    pub fn with_max_content_bytes(mut self, limit: usize) -> Self {
        self.max_content_bytes = Some(limit);
        self
    }

    /// Bind `prefix` to `namespace` for documents that use it undeclared
    pub fn with_prefix(mut self, prefix: impl Into<String>, namespace: impl Into<String>) -> Self {
        self.prefixes.insert(prefix.into(), namespace.into());
        self
    }

    /// Deserialize and validate a JSON configuration object
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        let config: ParserConfig = serde_json::from_value(value.clone())
            .map_err(|e| Error::invalid_argument("config", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.blank_node_prefix.is_empty() {
            return Err(Error::invalid_argument(
                "blank_node_prefix",
                "must be a non-empty string",
            ));
        }
        if let Some((prefix, _)) = self.prefixes.iter().find(|(_, ns)| ns.is_empty()) {
            return Err(Error::invalid_argument(
                "prefixes",
                format!("namespace for '{}' is empty", prefix),
            ));
        }
        Ok(())
    }
}
