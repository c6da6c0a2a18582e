//! Error types for graph construction and datatype registration

/// Error type for graph model operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A caller-supplied argument violated a documented precondition
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: String,
    },

    /// A statement that cannot be represented (literal subject, non-IRI predicate, empty key)
    #[error("invalid statement: {0}")]
    InvalidStatement(String),

    /// A literal carrying both a datatype and a language tag
    #[error("invalid literal \"{lexical}\": {reason}")]
    InvalidLiteral { lexical: String, reason: String },
}

/// Result type for graph model operations
pub type Result<T> = std::result::Result<T, GraphError>;

impl GraphError {
    /// Create an invalid-argument error for an empty string argument
    pub fn empty_argument(argument: &'static str) -> Self {
        Self::InvalidArgument {
            argument,
            reason: "should be a string and cannot be empty".to_string(),
        }
    }

    /// Create an invalid-statement error
    pub fn statement(message: impl Into<String>) -> Self {
        Self::InvalidStatement(message.into())
    }
}
