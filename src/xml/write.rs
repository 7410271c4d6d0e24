//! Document Tree → document text
//!
//! Walks the tree with a quick-xml writer: attributes go on the start tag,
//! inner text is only emitted for childless nodes, and empty childless
//! nodes are written as self-closing elements. Attribute values also encode
//! line breaks and tabs as character references, since a parser normalizes
//! literal ones to spaces.

use super::errors::XmlError;
use super::node::{XmlDocument, XmlNode};
use super::METADATA_TARGET;
use quick_xml::escape::escape;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::QName;
use quick_xml::Writer;
use std::borrow::Cow;
use std::io::Write;

/// Serialize an [`XmlDocument`] to UTF-8 text
pub fn write_document(doc: &XmlDocument) -> Result<String, XmlError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(write_error)?;

    if !doc.metadata.is_empty() {
        let body = doc
            .metadata
            .iter()
            .map(|attr| format!("{}=\"{}\"", attr.name, escape_attribute(attr.value.as_str())))
            .collect::<Vec<_>>()
            .join(" ");

        writer
            .write_event(Event::PI(BytesText::from_escaped(format!("{} {}", METADATA_TARGET, body))))
            .map_err(write_error)?;
    }

    write_node(&mut writer, &doc.root)?;

    String::from_utf8(writer.into_inner()).map_err(|e| XmlError::Write(e.to_string()))
}

fn write_node<W: Write>(writer: &mut Writer<W>, node: &XmlNode) -> Result<(), XmlError> {
    let mut start = BytesStart::new(node.name.as_str());
    for attr in node.attributes().iter() {
        start.push_attribute(Attribute {
            key: QName(attr.name.as_bytes()),
            value: Cow::Owned(escape_attribute(attr.value.as_str()).into_bytes()),
        });
    }

    if node.children().is_empty() {
        let text = node.inner_text();
        if text.is_empty() {
            return writer.write_event(Event::Empty(start)).map_err(write_error);
        }

        writer.write_event(Event::Start(start)).map_err(write_error)?;
        writer.write_event(Event::Text(BytesText::new(text))).map_err(write_error)?;
        return writer
            .write_event(Event::End(BytesEnd::new(node.name.as_str())))
            .map_err(write_error);
    }

    writer.write_event(Event::Start(start)).map_err(write_error)?;
    for child in node.children() {
        write_node(writer, child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(node.name.as_str())))
        .map_err(write_error)
}

/// Markup escaping plus character references for `\n`, `\r` and `\t`
fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in escape(value).chars() {
        match c {
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            '\t' => out.push_str("&#9;"),
            c => out.push(c),
        }
    }
    out
}

fn write_error(e: quick_xml::Error) -> XmlError {
    XmlError::Write(e.to_string())
}
