//! Elements with properties and content between an opening and a closing tag.

use std::borrow::Cow;

use super::{HasChildren, HasProperties, Markup, Node, Variant};
use crate::constants::CLASS_PROPERTY;
use crate::formatter::{format_element_sequence, format_properties, xml_escape};
use crate::property::{Properties, PropertyValue};

/// General element with both properties and children.
///
/// Children are placed on new lines and text children are XML-escaped.
#[derive(Debug, Clone)]
pub struct Element {
    name: Cow<'static, str>,
    properties: Properties,
    children: Vec<Node>,
    inline: bool,
}

impl Element {
    /// Creates an element without properties or children.
    pub fn new() -> Self {
        Self::from_parts(Vec::new(), Properties::new())
    }

    /// Creates an element from its children and properties.
    pub fn from_parts(children: Vec<Node>, properties: Properties) -> Self {
        Element {
            name: Cow::Borrowed(Variant::Element.type_name()),
            properties,
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

    /// Sets a property.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Sets several properties.
    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties.extend(properties);
        self
    }

    /// Sets the `class` property, overwriting any previous value.
    pub fn class(self, class: impl Into<String>) -> Self {
        self.with_property(CLASS_PROPERTY, class.into())
    }
}

impl Default for Element {
    fn default() -> Self {
        Self::new()
    }
}

impl HasProperties for Element {
    fn properties(&self) -> &Properties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }
}

impl HasChildren for Element {
    fn children(&self) -> &[Node] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }
}

impl Markup for Element {
    fn element_name(&self) -> &str {
        &self.name
    }

    fn markup(&self) -> String {
        format!(
            "<{name} {}>{}</{name}>",
            format_properties(&self.properties),
            format_element_sequence(&self.children, self.inline),
            name = self.name
        )
    }

    fn inline_children(&self) -> bool {
        self.inline
    }

    fn property_map(&self) -> Option<&Properties> {
        Some(&self.properties)
    }

    fn child_nodes(&self) -> Option<&[Node]> {
        Some(&self.children)
    }
}

/// Element with properties and a single string, which is XML-escaped when
/// rendered.
#[derive(Debug, Clone)]
pub struct StringElement {
    name: Cow<'static, str>,
    properties: Properties,
    value: Option<String>,
}

impl StringElement {
    /// Creates an element holding the given string.
    pub fn new(value: impl Into<String>) -> Self {
        Self::from_parts(Some(value.into()), Properties::new())
    }

    /// Creates an element from an optional string and properties.
    ///
    /// A missing string renders as empty content.
    pub fn from_parts(value: Option<String>, properties: Properties) -> Self {
        StringElement {
            name: Cow::Borrowed(Variant::String.type_name()),
            properties,
            value,
        }
    }

    /// Overrides the element name.
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets a property.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Sets several properties.
    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties.extend(properties);
        self
    }

    /// Sets the `class` property, overwriting any previous value.
    pub fn class(self, class: impl Into<String>) -> Self {
        self.with_property(CLASS_PROPERTY, class.into())
    }

    /// The string content.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Replaces the string content.
    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }
}

impl HasProperties for StringElement {
    fn properties(&self) -> &Properties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }
}

impl Markup for StringElement {
    fn element_name(&self) -> &str {
        &self.name
    }

    fn markup(&self) -> String {
        let value = self.value.as_deref().map(xml_escape).unwrap_or_default();
        format!(
            "<{name} {}>{}</{name}>",
            format_properties(&self.properties),
            value,
            name = self.name
        )
    }

    fn property_map(&self) -> Option<&Properties> {
        Some(&self.properties)
    }

    fn text_value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}
