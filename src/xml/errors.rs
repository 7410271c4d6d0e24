//! Error types for the Document Tree

use thiserror::Error;

/// Errors raised while building, parsing or writing a Document Tree
#[derive(Debug, Clone, PartialEq, Error)]
pub enum XmlError {
    /// Document text is not well-formed
    #[error("Invalid XML: {0}")]
    Parse(String),

    /// Children and inner text were mixed on one node
    #[error("Invalid state on <{node}>: {reason}")]
    InvalidState { node: String, reason: &'static str },

    /// A required child element is absent
    #[error("Missing required element <{child}> in <{parent}>")]
    MissingChild { parent: String, child: String },

    /// A required attribute is absent
    #[error("Missing required attribute '{attribute}' on <{element}>")]
    MissingAttribute { element: String, attribute: String },

    /// An attribute name was added twice to the same node
    #[error("Duplicate attribute '{0}'")]
    DuplicateAttribute(String),

    /// Serialization failed
    #[error("XML write failed: {0}")]
    Write(String),
}
