//! The any-tag fallback element.

use crate::element::{HasChildren, HasProperties, Markup, Node};
use crate::constants::{CLASS_PROPERTY, ELEMENT_TAG_PROPERTY};
use crate::error::{Error, Result};
use crate::factory::ElementFactory;
use crate::formatter::{format_element_sequence, format_properties};
use crate::property::{fold_class_override, Properties, PropertyValue};

/// Element that can represent any tag in a markup document.
///
/// The parser builds these for tags without a registered rule. The tag name,
/// properties and children are all kept intact, so the element renders back
/// to the markup it was parsed from.
#[derive(Debug, Clone)]
pub struct AnyElement {
    tag: String,
    properties: Properties,
    children: Vec<Node>,
    inline: bool,
}

impl AnyElement {
    /// Creates an element with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self::from_parts(tag, Vec::new(), Properties::new())
    }

    /// Creates an element from its tag, children and properties.
    pub fn from_parts(tag: impl Into<String>, children: Vec<Node>, properties: Properties) -> Self {
        AnyElement {
            tag: tag.into(),
            properties,
            children,
            inline: false,
        }
    }

    /// The tag the element renders with.
    pub fn tag(&self) -> &str {
        &self.tag
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

    /// Sets a property.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Sets the `class` property, overwriting any previous value.
    pub fn class(self, class: impl Into<String>) -> Self {
        self.with_property(CLASS_PROPERTY, class.into())
    }
}

impl HasProperties for AnyElement {
    fn properties(&self) -> &Properties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }
}

impl HasChildren for AnyElement {
    fn children(&self) -> &[Node] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }
}

impl Markup for AnyElement {
    fn element_name(&self) -> &str {
        &self.tag
    }

    fn markup(&self) -> String {
        format!(
            "<{tag} {}>{}</{tag}>",
            format_properties(&self.properties),
            format_element_sequence(&self.children, self.inline),
            tag = self.tag
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

/// Factory for [`AnyElement`].
///
/// The tag is taken from (and removed from) the `element_tag` property.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyFactory;

impl AnyFactory {
    /// Name of the factory.
    pub const NAME: &'static str = "AnyElement";
}

impl ElementFactory for AnyFactory {
    fn element_name(&self) -> &str {
        Self::NAME
    }

    fn create(&self, children: Vec<Node>, mut properties: Properties) -> Result<Box<dyn Markup>> {
        fold_class_override(&mut properties);
        let tag = match properties.shift_remove(ELEMENT_TAG_PROPERTY) {
            Some(PropertyValue::Str(tag)) => tag,
            Some(_) => {
                return Err(Error::factory(
                    Self::NAME,
                    format!("{} must be a string", ELEMENT_TAG_PROPERTY),
                ))
            }
            None => {
                return Err(Error::factory(
                    Self::NAME,
                    format!("missing {} property", ELEMENT_TAG_PROPERTY),
                ))
            }
        };
        Ok(Box::new(AnyElement::from_parts(tag, children, properties)))
    }
}
