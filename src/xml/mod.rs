//! Document Tree
//!
//! A small, generic attributed-element tree used as the intermediate form
//! between raw document text and the map model. It mirrors the subset of XML
//! the map format needs: element names, ordered unique attributes, and either
//! child elements or inner text (never both).
//!
//! # Architecture
//!
//! ```text
//! Document text
//!   ↓ [parse with roxmltree]
//! XmlDocument { metadata, root: XmlNode }
//!   ↓ [write with quick-xml]
//! Document text
//! ```
//!
//! Document-level metadata (at minimum the format version) travels as a
//! `<?meta ...?>` processing instruction ahead of the root element, so the
//! root element itself stays a plain domain node.

pub mod errors;
pub mod node;
pub mod parse;
pub mod write;

pub use errors::XmlError;
pub use node::{XmlAttribute, XmlAttributes, XmlDocument, XmlNode, XmlNodes};
pub use parse::parse_document;
pub use write::write_document;

/// Processing-instruction target that carries document metadata
pub const METADATA_TARGET: &str = "meta";
