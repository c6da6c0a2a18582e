use fluree_graph_ir::GraphError;

/// Error type for RDF/JSON parsing
#[derive(Debug, thiserror::Error)]
pub enum RdfJsonError {
    /// Content is not JSON at all
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Valid JSON that does not have the RDF/JSON shape
    #[error("Invalid RDF/JSON structure at {path}: {message}")]
    Structure { path: String, message: String },

    /// Relative IRI with no absolute base to resolve against
    #[error("IRI resolution error: {0}")]
    IriResolution(String),

    /// Statement rejected by the graph
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Result type for RDF/JSON operations
pub type Result<T> = std::result::Result<T, RdfJsonError>;

impl RdfJsonError {
    pub(crate) fn structure(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Structure {
            path: path.into(),
            message: message.into(),
        }
    }
}
