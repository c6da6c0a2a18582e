//! Error types for Turtle and N-Triples parsing

use fluree_graph_ir::GraphError;

/// Error type for Turtle / N-Triples parsing operations
#[derive(Debug, thiserror::Error)]
pub enum TurtleError {
    /// Lexer error (invalid token)
    #[error("Lexer error at position {position}: {message}")]
    Lexer { position: usize, message: String },

    /// Parser error (unexpected token or invalid structure)
    #[error("Parse error at line {line}, column {column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    /// IRI resolution error (relative IRI without an absolute base)
    #[error("IRI resolution error: {0}")]
    IriResolution(String),

    /// Prefix neither declared in the document nor known to the host
    #[error("Undefined prefix: {0}")]
    UndefinedPrefix(String),

    /// Statement rejected by the graph (literal subject, empty identity)
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Result type for Turtle operations
pub type Result<T> = std::result::Result<T, TurtleError>;

impl TurtleError {
    /// Create a parse error at a byte position of `source`
    pub fn parse(source: &str, position: usize, message: impl Into<String>) -> Self {
        let (line, column) = crate::lex::line_col(source, position);
        Self::Parse {
            line,
            column,
            message: message.into(),
        }
    }
}
