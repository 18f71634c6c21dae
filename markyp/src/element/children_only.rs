//! Elements with children but no properties.

use std::borrow::Cow;

use super::{HasChildren, Markup, Node, Variant};
use crate::formatter::{format_element_sequence, xml_format_element};

/// Element that has children only, rendered as `<name>…</name>`.
#[derive(Debug, Clone)]
pub struct ChildrenOnlyElement {
    name: Cow<'static, str>,
    children: Vec<Node>,
    inline: bool,
}

impl ChildrenOnlyElement {
    /// Creates an element without children.
    pub fn new() -> Self {
        Self::from_children(Vec::new())
    }

    /// Creates an element with the given children.
    pub fn from_children(children: Vec<Node>) -> Self {
        ChildrenOnlyElement {
            name: Cow::Borrowed(Variant::ChildrenOnly.type_name()),
            children,
            inline: false,
        }
    }

    /// Overrides the element name.
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    /// Places the children on one line.
    pub fn inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    /// Appends a child.
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends several children.
    pub fn with_children<I, C>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }
}

impl Default for ChildrenOnlyElement {
    fn default() -> Self {
        Self::new()
    }
}

impl HasChildren for ChildrenOnlyElement {
    fn children(&self) -> &[Node] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }
}

impl Markup for ChildrenOnlyElement {
    fn element_name(&self) -> &str {
        &self.name
    }

    fn markup(&self) -> String {
        format!(
            "<{name}>{}</{name}>",
            format_element_sequence(&self.children, self.inline),
            name = self.name
        )
    }

    fn inline_children(&self) -> bool {
        self.inline
    }

    fn child_nodes(&self) -> Option<&[Node]> {
        Some(&self.children)
    }
}

/// A bare sequence of nodes without opening and closing tags.
///
/// Children are joined with newlines, without the leading and trailing
/// newline wrapped elements get.
#[derive(Debug, Clone)]
pub struct ElementSequence {
    name: Cow<'static, str>,
    children: Vec<Node>,
}

impl ElementSequence {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::from_children(Vec::new())
    }

    /// Creates a sequence of the given nodes.
    pub fn from_children(children: Vec<Node>) -> Self {
        ElementSequence {
            name: Cow::Borrowed(Variant::Sequence.type_name()),
            children,
        }
    }

    /// Overrides the element name. It is never rendered but used by parser
    /// rules.
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    /// Appends a node.
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends several nodes.
    pub fn with_children<I, C>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }
}

impl Default for ElementSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl HasChildren for ElementSequence {
    fn children(&self) -> &[Node] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }
}

impl Markup for ElementSequence {
    fn element_name(&self) -> &str {
        &self.name
    }

    fn markup(&self) -> String {
        self.children
            .iter()
            .filter(|node| !node.is_skip())
            .map(xml_format_element)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn child_nodes(&self) -> Option<&[Node]> {
        Some(&self.children)
    }
}
