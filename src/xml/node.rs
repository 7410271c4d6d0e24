//! Document Tree node types

use super::errors::XmlError;

/// A single name/value attribute
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XmlAttribute {
    pub name: String,
    pub value: String,
}

impl XmlAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Ordered attribute collection with unique names
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct XmlAttributes(Vec<XmlAttribute>);

impl XmlAttributes {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append an attribute, rejecting a name that is already present
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) -> Result<(), XmlError> {
        let name = name.into();
        if self.exists(&name) {
            return Err(XmlError::DuplicateAttribute(name));
        }
        self.0.push(XmlAttribute::new(name, value));
        Ok(())
    }

    /// Replace the value of an existing attribute, or append it
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        match self.0.iter_mut().find(|a| a.name == name) {
            Some(attr) => attr.value = value.into(),
            None => self.0.push(XmlAttribute::new(name, value)),
        }
    }

    /// Value of the first attribute with this name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.iter().find(|a| a.name == name).map(|a| a.value.as_str())
    }

    pub fn exists(&self, name: &str) -> bool {
        self.0.iter().any(|a| a.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, XmlAttribute> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Ordered child-node collection
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct XmlNodes(Vec<XmlNode>);

impl XmlNodes {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// First child with this element name
    pub fn get(&self, name: &str) -> Option<&XmlNode> {
        self.0.iter().find(|n| n.name == name)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.0.iter().any(|n| n.name == name)
    }

    pub fn push(&mut self, node: XmlNode) {
        self.0.push(node);
    }

    pub fn first(&self) -> Option<&XmlNode> {
        self.0.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, XmlNode> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<XmlNode> for XmlNodes {
    fn from_iter<I: IntoIterator<Item = XmlNode>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a XmlNodes {
    type Item = &'a XmlNode;
    type IntoIter = std::slice::Iter<'a, XmlNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// An element with attributes and either children or inner text
///
/// The two content kinds are mutually exclusive: once a node holds inner
/// text it refuses children, and once it holds children it refuses inner
/// text. Both violations surface as [`XmlError::InvalidState`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct XmlNode {
    pub name: String,
    attributes: XmlAttributes,
    children: XmlNodes,
    inner_text: Option<String>,
}

impl XmlNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Leaf node holding only inner text
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inner_text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn attributes(&self) -> &XmlAttributes {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut XmlAttributes {
        &mut self.attributes
    }

    pub fn add_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) -> Result<(), XmlError> {
        self.attributes.add(name, value)
    }

    /// Attribute value, or `MissingAttribute`
    pub fn require_attribute(&self, name: &str) -> Result<&str, XmlError> {
        self.attributes.get(name).ok_or_else(|| XmlError::MissingAttribute {
            element: self.name.clone(),
            attribute: name.to_string(),
        })
    }

    pub fn children(&self) -> &XmlNodes {
        &self.children
    }

    /// Replace all children; fails while inner text is present
    pub fn set_children(&mut self, children: XmlNodes) -> Result<(), XmlError> {
        if self.inner_text.is_some() {
            return Err(XmlError::InvalidState {
                node: self.name.clone(),
                reason: "cannot set children when there is inner text",
            });
        }
        self.children = children;
        Ok(())
    }

    /// Append a child; fails while inner text is present
    pub fn add_child(&mut self, child: XmlNode) -> Result<(), XmlError> {
        if self.inner_text.is_some() {
            return Err(XmlError::InvalidState {
                node: self.name.clone(),
                reason: "cannot add a child when there is inner text",
            });
        }
        self.children.push(child);
        Ok(())
    }

    /// First child with this name, or `MissingChild`
    pub fn require_child(&self, name: &str) -> Result<&XmlNode, XmlError> {
        self.children.get(name).ok_or_else(|| XmlError::MissingChild {
            parent: self.name.clone(),
            child: name.to_string(),
        })
    }

    /// Inner text, empty when none was set
    pub fn inner_text(&self) -> &str {
        self.inner_text.as_deref().unwrap_or_default()
    }

    pub fn has_inner_text(&self) -> bool {
        self.inner_text.is_some()
    }

    /// Set inner text; fails while the node has children
    pub fn set_inner_text(&mut self, text: impl Into<String>) -> Result<(), XmlError> {
        if !self.children.is_empty() {
            return Err(XmlError::InvalidState {
                node: self.name.clone(),
                reason: "cannot set inner text when there are children",
            });
        }
        self.inner_text = Some(text.into());
        Ok(())
    }
}

/// A root node plus document-level metadata
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct XmlDocument {
    pub metadata: XmlAttributes,
    pub root: XmlNode,
}

impl XmlDocument {
    pub fn new(root: XmlNode) -> Self {
        Self {
            metadata: XmlAttributes::new(),
            root,
        }
    }

    /// Parse document text into a tree
    pub fn parse(text: &str) -> Result<Self, XmlError> {
        super::parse::parse_document(text)
    }

    /// Serialize the tree back to document text
    pub fn to_xml_string(&self) -> Result<String, XmlError> {
        super::write::write_document(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_inner_text_with_children_fails() {
        let mut node = XmlNode::new("Style");
        node.add_child(XmlNode::with_text("Width", "1")).unwrap();

        let result = node.set_inner_text("oops");
        assert!(matches!(result, Err(XmlError::InvalidState { .. })));
        assert_eq!(node.inner_text(), "");
    }

    #[test]
    fn test_add_child_with_inner_text_fails() {
        let mut node = XmlNode::with_text("Colour", "Transparent");

        let result = node.add_child(XmlNode::new("Width"));
        assert!(matches!(result, Err(XmlError::InvalidState { .. })));
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_set_children_with_inner_text_fails() {
        let mut node = XmlNode::with_text("Symbol", "abc");
        let children: XmlNodes = vec![XmlNode::new("A")].into_iter().collect();

        assert!(matches!(node.set_children(children), Err(XmlError::InvalidState { .. })));
    }

    #[test]
    fn test_lookup_returns_first_match() {
        let mut node = XmlNode::new("Points");
        let mut first = XmlNode::new("Point");
        first.add_attribute("x", "1").unwrap();
        let mut second = XmlNode::new("Point");
        second.add_attribute("x", "2").unwrap();
        node.add_child(first).unwrap();
        node.add_child(second).unwrap();

        let found = node.require_child("Point").unwrap();
        assert_eq!(found.attributes().get("x"), Some("1"));
        assert!(node.children().exists("Point"));
        assert!(!node.children().exists("Centre"));
    }

    #[test]
    fn test_duplicate_attribute_rejected() {
        let mut attrs = XmlAttributes::new();
        attrs.add("id", "1").unwrap();

        assert_eq!(attrs.add("id", "2"), Err(XmlError::DuplicateAttribute("id".to_string())));
        attrs.set("id", "3");
        assert_eq!(attrs.get("id"), Some("3"));
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn test_missing_attribute_error_names_element() {
        let node = XmlNode::new("Colour");
        let err = node.require_attribute("hex").unwrap_err();
        assert_eq!(err.to_string(), "Missing required attribute 'hex' on <Colour>");
    }
}
