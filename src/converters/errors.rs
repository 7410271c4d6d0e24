//! Error types for map loading and saving
//!
//! Every failure aborts the whole load: a map is either fully built with all
//! references resolved, or no map is returned.

use crate::models::ModelError;
use crate::xml::XmlError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapperError {
    /// Document text or tree structure is unusable
    #[error("Invalid document: {0}")]
    Format(#[from] XmlError),

    /// No `version` entry in the document metadata
    #[error("Did not find map version")]
    MissingVersion,

    /// No loader is registered for this version
    #[error("Map version '{0}' is not supported")]
    UnsupportedVersion(String),

    /// An element is present but its content cannot be interpreted
    #[error("Malformed <{element}>: {reason}")]
    Malformed { element: String, reason: String },

    /// A colour or symbol id does not resolve within the map
    #[error("Unresolved reference: {0}")]
    Reference(#[from] ModelError),

    /// The format names a feature with no reader or writer yet
    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),
}

impl MapperError {
    pub fn malformed(element: &str, reason: impl Into<String>) -> Self {
        MapperError::Malformed {
            element: element.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MapperError>;
