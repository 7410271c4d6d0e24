//! Versioned map marshalling
//!
//! Documents carry a `version` metadata entry. Loading dispatches on it to
//! the matching reader; saving always uses the current writer. Readers for
//! older versions are kept so that every file written by an earlier release
//! still loads.

pub mod errors;
pub mod values;
pub mod version_1;

pub use errors::{MapperError, Result};

use crate::models::Map;
use crate::xml::{XmlDocument, XmlNode};

/// Version stamped on every saved document
pub const CURRENT_VERSION: &str = version_1::VERSION;

type Loader = fn(&XmlNode) -> Result<Map>;

/// Reader registered for a version tag
fn loader_for(version: &str) -> Option<Loader> {
    match version {
        version_1::VERSION => Some(version_1::load_map),
        _ => None,
    }
}

/// Parse document text into a map
pub fn load(text: &str) -> Result<Map> {
    let doc = XmlDocument::parse(text)?;
    load_document(&doc)
}

/// Build a map from an already parsed document
pub fn load_document(doc: &XmlDocument) -> Result<Map> {
    let version = doc.metadata.get("version").ok_or(MapperError::MissingVersion)?;
    let loader = loader_for(version).ok_or_else(|| MapperError::UnsupportedVersion(version.to_string()))?;

    let map = loader(&doc.root)?;

    log::info!(
        "Loaded map '{}' (v{}): {} colours, {} symbols, {} instances",
        map.title,
        version,
        map.colours.len(),
        map.symbols.len(),
        map.instances.len()
    );

    Ok(map)
}

/// Write a map with the current version's writer
pub fn save(map: &Map) -> Result<XmlDocument> {
    let root = version_1::save_map(map)?;

    let mut doc = XmlDocument::new(root);
    doc.metadata.add("version", CURRENT_VERSION)?;

    log::info!("Saved map '{}' as version {}", map.title, CURRENT_VERSION);
    Ok(doc)
}

/// Write a map straight to document text
pub fn save_to_string(map: &Map) -> Result<String> {
    Ok(save(map)?.to_xml_string()?)
}
