//! Error types for graph parsing

use thiserror::Error;

/// Content could not be turned into a graph.
///
/// Carries a human-readable diagnostic only; the reader's own error type
/// never crosses this boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No reader is registered under the requested format name
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The reader rejected the content
    #[error("failed to parse {format}: {message}")]
    Syntax {
        /// Format name the reader is registered under
        format: String,
        /// Reader diagnostic
        message: String,
    },
}

impl ParseError {
    /// Wrap a reader failure as a syntax error for `format`
    pub fn syntax(format: impl Into<String>, error: impl std::fmt::Display) -> Self {
        ParseError::Syntax {
            format: format.into(),
            message: error.to_string(),
        }
    }
}

/// Error type for `GraphParser` operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Caller input violated a precondition; detected before any parsing
    #[error("invalid argument '{argument}': {reason}")]
    InvalidArgument {
        /// Name of the offending argument (`source`, `content`, `format`, ...)
        argument: &'static str,
        reason: String,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    pub fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(self, Error::Parse(_))
    }

    /// Name of the rejected argument, if this is an `InvalidArgument`
    pub fn argument(&self) -> Option<&'static str> {
        match self {
            Error::InvalidArgument { argument, .. } => Some(*argument),
            Error::Parse(_) => None,
        }
    }
}

/// Result type for `GraphParser` operations
pub type Result<T> = std::result::Result<T, Error>;
