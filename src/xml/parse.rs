//! Document text → Document Tree
//!
//! Uses roxmltree for well-formedness checking and DOM access, then copies
//! the element structure into [`XmlNode`]s. A node whose content is text only
//! is collapsed into that node's inner text, whitespace included; whitespace
//! between elements is formatting and is dropped.

use super::errors::XmlError;
use super::node::{XmlAttributes, XmlDocument, XmlNode};
use super::METADATA_TARGET;
use quick_xml::escape::unescape;

/// Parse document text into an [`XmlDocument`]
pub fn parse_document(text: &str) -> Result<XmlDocument, XmlError> {
    let doc = roxmltree::Document::parse(text).map_err(|e| XmlError::Parse(e.to_string()))?;

    let mut metadata = XmlAttributes::new();
    for node in doc.root().children() {
        if let Some(pi) = node.pi() {
            if pi.target == METADATA_TARGET {
                parse_pseudo_attributes(pi.value.unwrap_or_default(), &mut metadata)?;
            }
        }
    }

    let root = parse_node(doc.root_element())?;

    log::debug!(
        "Parsed document: root <{}>, {} metadata entries",
        root.name,
        metadata.len()
    );

    Ok(XmlDocument { metadata, root })
}

fn parse_node(node: roxmltree::Node<'_, '_>) -> Result<XmlNode, XmlError> {
    let mut out = XmlNode::new(node.tag_name().name());

    for attr in node.attributes() {
        out.add_attribute(attr.name(), attr.value())?;
    }

    let elements: Vec<roxmltree::Node<'_, '_>> = node.children().filter(|c| c.is_element()).collect();

    if elements.is_empty() {
        let text: String = node
            .children()
            .filter(|c| c.is_text())
            .filter_map(|c| c.text())
            .collect();

        if !text.is_empty() {
            out.set_inner_text(text)?;
        }
        return Ok(out);
    }

    for child in elements {
        out.add_child(parse_node(child)?)?;
    }

    Ok(out)
}

/// Read `name="value"` pairs from a processing-instruction body
fn parse_pseudo_attributes(body: &str, into: &mut XmlAttributes) -> Result<(), XmlError> {
    let mut rest = body.trim_start();

    while !rest.is_empty() {
        let eq = rest
            .find('=')
            .ok_or_else(|| XmlError::Parse(format!("malformed metadata near '{}'", rest)))?;
        let name = rest[..eq].trim();
        if name.is_empty() {
            return Err(XmlError::Parse("metadata entry without a name".to_string()));
        }

        let after = rest[eq + 1..].trim_start();
        let quote = after
            .chars()
            .next()
            .filter(|c| *c == '"' || *c == '\'')
            .ok_or_else(|| XmlError::Parse(format!("metadata value for '{}' is not quoted", name)))?;
        let close = after[1..]
            .find(quote)
            .ok_or_else(|| XmlError::Parse(format!("unterminated metadata value for '{}'", name)))?;

        let raw = &after[1..1 + close];
        let value = unescape(raw).map_err(|e| XmlError::Parse(e.to_string()))?;
        into.add(name, value.into_owned())?;

        rest = after[close + 2..].trim_start();
    }

    Ok(())
}
