//! Parsed node tree.

use crate::attributes::AttributeMap;

/// Top-level sequence of sibling nodes produced by one parse.
pub type Forest = Vec<Node>;

/// Node in the parsed forest.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum Node {
    /// A tag from the vocabulary.
    Element(Element),
    /// Text that was not hoisted into an element's `text`.
    Text(String),
}

impl Node {
    /// The element, if this node is one.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// The text, if this node is a text node.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Element(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// Element node.
///
/// `attributes` is `None` when the tag had no attribute fragment at all, and
/// `Some` (possibly empty) when it did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct Element {
    /// Tag name.
    pub tag: String,
    /// Whether the tag was written as `<tag/>`.
    pub self_close: bool,
    /// Parsed attribute fragment.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub attributes: Option<AttributeMap>,
    /// Text immediately following the opening tag.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub text: Option<String>,
    /// Child nodes (always empty for self-closing elements).
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with the given tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            self_close: false,
            attributes: None,
            text: None,
            children: Vec::new(),
        }
    }

    /// Create a self-closing element with the given tag.
    #[must_use]
    pub fn self_closing(tag: impl Into<String>) -> Self {
        let mut element = Self::new(tag);
        element.self_close = true;
        element
    }

    /// Set attributes.
    #[must_use]
    pub fn with_attributes(mut self, attributes: AttributeMap) -> Self {
        self.attributes = Some(attributes);
        self
    }

    /// Set text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set children.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Get an attribute value by key.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.as_ref()?.get(key).map(String::as_str)
    }

    /// Child elements, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }
}

/// Children are dropped from a flat worklist so that tearing down a deeply
/// nested tree does not recurse once per level.
impl Drop for Element {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(node) = pending.pop() {
            if let Node::Element(mut element) = node {
                pending.append(&mut element.children);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let element = Element::new("div")
            .with_attributes(AttributeMap::from([("id".to_owned(), "main".to_owned())]))
            .with_text("Hello")
            .with_children(vec![
                Element::self_closing("span").into(),
                Node::Text("tail".to_owned()),
            ]);

        assert_eq!(element.tag, "div");
        assert!(!element.self_close);
        assert_eq!(element.attribute("id"), Some("main"));
        assert_eq!(element.attribute("missing"), None);
        assert_eq!(element.text.as_deref(), Some("Hello"));
        assert_eq!(element.child_elements().count(), 1);
        assert_eq!(element.children[1].as_text(), Some("tail"));
    }

    #[test]
    fn test_drop_deep_chain() {
        let mut element = Element::new("div").with_text("x");
        for _ in 0..200_000 {
            element = Element::new("div").with_children(vec![element.into()]);
        }
        drop(element);
    }

    #[test]
    fn test_attribute_without_map() {
        assert_eq!(Element::self_closing("br").attribute("id"), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_element() {
        let node: Node = Element::new("div")
            .with_attributes(AttributeMap::from([("id".to_owned(), "main".to_owned())]))
            .with_text("Hello")
            .with_children(vec![Element::self_closing("span").into()])
            .into();

        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "tag": "div",
                "selfClose": false,
                "attributes": { "id": "main" },
                "text": "Hello",
                "children": [
                    { "tag": "span", "selfClose": true, "children": [] }
                ]
            })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_text_node() {
        let json = serde_json::to_value(Node::Text("hi".to_owned())).unwrap();
        assert_eq!(json, serde_json::json!("hi"));
    }
}
