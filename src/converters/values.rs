//! Scalar encodings shared by the versioned readers and writers

use super::errors::{MapperError, Result};
use crate::models::{Vec2, TRANSPARENT_ID};
use crate::xml::XmlNode;
use std::str::FromStr;
use uuid::Uuid;

/// Stored text for the Transparent colour reference
pub const TRANSPARENT: &str = "Transparent";

fn parse_value<T: FromStr>(element: &str, what: &str, text: &str) -> Result<T> {
    text.trim()
        .parse::<T>()
        .map_err(|_| MapperError::malformed(element, format!("invalid {} '{}'", what, text)))
}

/// Typed attribute value
pub fn attr<T: FromStr>(node: &XmlNode, name: &str) -> Result<T> {
    let text = node.require_attribute(name)?;
    parse_value(&node.name, name, text)
}

/// Typed attribute value, or `default` when absent
pub fn attr_or<T: FromStr>(node: &XmlNode, name: &str, default: T) -> Result<T> {
    match node.attributes().get(name) {
        Some(text) => parse_value(&node.name, name, text),
        None => Ok(default),
    }
}

/// Boolean attribute, accepting any letter case
pub fn bool_attr(node: &XmlNode, name: &str) -> Result<bool> {
    let text = node.require_attribute(name)?;
    parse_bool(&node.name, name, text)
}

fn parse_bool(element: &str, what: &str, text: &str) -> Result<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(MapperError::malformed(element, format!("invalid {} '{}'", what, text))),
    }
}

pub fn uuid_attr(node: &XmlNode, name: &str) -> Result<Uuid> {
    let text = node.require_attribute(name)?;
    Uuid::parse_str(text.trim())
        .map_err(|_| MapperError::malformed(&node.name, format!("invalid {} '{}'", name, text)))
}

/// Typed inner text of the named child
pub fn child_text<T: FromStr>(node: &XmlNode, child: &str) -> Result<T> {
    let leaf = node.require_child(child)?;
    parse_value(&leaf.name, "value", leaf.inner_text())
}

/// Id held as inner text of the named child
pub fn child_uuid(node: &XmlNode, child: &str) -> Result<Uuid> {
    let leaf = node.require_child(child)?;
    Uuid::parse_str(leaf.inner_text().trim())
        .map_err(|_| MapperError::malformed(&leaf.name, format!("invalid id '{}'", leaf.inner_text())))
}

/// Colour reference: "Transparent" or a colour id
pub fn colour_ref(leaf: &XmlNode) -> Result<Uuid> {
    let text = leaf.inner_text().trim();
    if text == TRANSPARENT {
        return Ok(TRANSPARENT_ID);
    }
    Uuid::parse_str(text).map_err(|_| MapperError::malformed(&leaf.name, format!("invalid colour reference '{}'", text)))
}

pub fn child_colour_ref(node: &XmlNode, child: &str) -> Result<Uuid> {
    colour_ref(node.require_child(child)?)
}

/// `x`/`y` attributes of a point element
pub fn point(node: &XmlNode) -> Result<Vec2> {
    Ok(Vec2::new(attr(node, "x")?, attr(node, "y")?))
}

pub fn child_point(node: &XmlNode, child: &str) -> Result<Vec2> {
    point(node.require_child(child)?)
}

pub fn format_f32(value: f32) -> String {
    value.to_string()
}

pub fn format_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

pub fn format_colour_ref(id: Uuid) -> String {
    if id == TRANSPARENT_ID {
        TRANSPARENT.to_string()
    } else {
        id.to_string()
    }
}
