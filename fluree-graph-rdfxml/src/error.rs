//! Error types for RDF/XML parsing

use fluree_graph_ir::GraphError;

/// Error type for RDF/XML parsing operations
#[derive(Debug, thiserror::Error)]
pub enum RdfXmlError {
    /// Document is not well-formed XML
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed attribute list
    #[error("XML attribute error: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// Well-formed XML that is not valid RDF/XML
    #[error("RDF/XML error at byte {position}: {message}")]
    Syntax { position: usize, message: String },

    /// Element or attribute prefix without an `xmlns` declaration in scope
    #[error("Undefined namespace prefix: {0}")]
    UndefinedPrefix(String),

    /// Relative IRI with no absolute base to resolve against
    #[error("IRI resolution error: {0}")]
    IriResolution(String),

    /// Statement rejected by the graph
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Result type for RDF/XML operations
pub type Result<T> = std::result::Result<T, RdfXmlError>;
