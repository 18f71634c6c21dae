//! Generic XML parse tree.
//!
//! The parser does not work on quick-xml events directly: markup is first read
//! into a tree of [`XmlNode`]s, which the parser then maps onto elements.

mod reader;

pub use reader::{read_file, read_str};

/// An element of a generic XML parse tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNode {
    /// The tag name, as written in the document.
    pub tag: String,
    /// Attributes in document order, with entities resolved.
    pub attributes: Vec<(String, String)>,
    /// Character data before the first child element, if any.
    pub text: Option<String>,
    /// Child elements.
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    /// Creates a node without attributes, text or children.
    pub fn new(tag: impl Into<String>) -> Self {
        XmlNode {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// The trimmed leading text, or `None` if it is missing or whitespace only.
    pub fn leading_text(&self) -> Option<&str> {
        self.text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_text() {
        let mut node = XmlNode::new("a");
        assert_eq!(node.leading_text(), None);
        node.text = Some(" \n\t".to_string());
        assert_eq!(node.leading_text(), None);
        node.text = Some("  x y ".to_string());
        assert_eq!(node.leading_text(), Some("x y"));
    }
}
