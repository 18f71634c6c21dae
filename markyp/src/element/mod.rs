//! Element model.
//!
//! Every element implements [`Markup`], the "renders to markup" capability.
//! Elements with properties additionally implement [`HasProperties`], those
//! with children [`HasChildren`]. The built-in shapes are:
//!
//! - [`ChildrenOnlyElement`]: children, no properties
//! - [`Element`]: properties and children
//! - [`EmptyElement`], [`SelfClosedElement`], [`StandaloneElement`]:
//!   properties, no children
//! - [`StringElement`]: properties and a single string
//! - [`ElementSequence`]: bare children without a wrapping tag
//!
//! [`ComputedElement`] is the lazy counterpart whose properties and children
//! are calculated when the markup is created.

mod children_only;
mod computed;
mod empty;
mod variant;
mod wrapped;

pub use children_only::{ChildrenOnlyElement, ElementSequence};
pub use computed::ComputedElement;
pub use empty::{EmptyElement, SelfClosedElement, StandaloneElement};
pub use variant::{Shape, Variant};
pub use wrapped::{Element, StringElement};

use std::any::Any;
use std::fmt;

use crate::formatter::xml_format_element;
use crate::property::{Properties, PropertyValue};

/// Object-safety helpers every [`Markup`] type gets for free.
///
/// Implemented for all `Clone` markup types; there is no need to implement it
/// by hand.
pub trait MarkupObject {
    /// Clones the element into a new box.
    fn clone_markup(&self) -> Box<dyn Markup>;
    /// Returns the element as `Any`, for downcasting.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Markup + Clone + 'static> MarkupObject for T {
    fn clone_markup(&self) -> Box<dyn Markup> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// An element that can render itself, including all its children, to markup.
pub trait Markup: fmt::Debug + MarkupObject {
    /// The tag name the element renders with.
    fn element_name(&self) -> &str;

    /// Renders the element to a markup string.
    ///
    /// The result is derived from the current state of the element every time.
    fn markup(&self) -> String;

    /// Whether children are rendered on one line, space separated.
    fn inline_children(&self) -> bool {
        false
    }

    /// The stored properties, for elements that have them.
    fn property_map(&self) -> Option<&Properties> {
        None
    }

    /// The stored children, for elements that have them.
    fn child_nodes(&self) -> Option<&[Node]> {
        None
    }

    /// The string content of single-string elements.
    fn text_value(&self) -> Option<&str> {
        None
    }
}

impl Clone for Box<dyn Markup> {
    fn clone(&self) -> Self {
        (**self).clone_markup()
    }
}

/// Structural equality: same type, name, properties, children and text.
///
/// Elements that expose neither properties nor children are compared by
/// their markup.
impl<'a> PartialEq for dyn Markup + 'a {
    fn eq(&self, other: &Self) -> bool {
        if self.as_any().type_id() != other.as_any().type_id()
            || self.element_name() != other.element_name()
        {
            return false;
        }
        if self.property_map().is_none() && self.child_nodes().is_none() {
            return self.text_value() == other.text_value() && self.markup() == other.markup();
        }
        self.property_map() == other.property_map()
            && self.child_nodes() == other.child_nodes()
            && self.text_value() == other.text_value()
    }
}

impl fmt::Display for dyn Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.markup())
    }
}

/// A child in an element's child sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A nested element.
    Element(Box<dyn Markup>),
    /// A text node, XML-escaped on render.
    Text(String),
    /// A placeholder that is left out of the output.
    Skip,
}

impl Node {
    /// Returns true if this is the skip placeholder.
    pub fn is_skip(&self) -> bool {
        matches!(self, Node::Skip)
    }

    /// Returns the element, if this is an element node.
    pub fn as_element(&self) -> Option<&dyn Markup> {
        match self {
            Node::Element(e) => Some(&**e),
            _ => None,
        }
    }

    /// Returns the text, if this is a text node.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Downcasts an element node to a concrete element type.
    pub fn downcast_ref<T: Markup + 'static>(&self) -> Option<&T> {
        self.as_element()?.as_any().downcast_ref::<T>()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&xml_format_element(self))
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<Box<dyn Markup>> for Node {
    fn from(element: Box<dyn Markup>) -> Self {
        Node::Element(element)
    }
}

impl<T: Markup + 'static> From<T> for Node {
    fn from(element: T) -> Self {
        Node::Element(Box::new(element))
    }
}

/// Elements that carry a property map.
pub trait HasProperties {
    /// The element properties.
    fn properties(&self) -> &Properties;

    /// Mutable access to the element properties.
    fn properties_mut(&mut self) -> &mut Properties;

    /// Returns the property with the given name.
    fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.properties().get(key)
    }

    /// Sets a property, replacing any previous value.
    fn set(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>)
    where
        Self: Sized,
    {
        self.properties_mut().insert(key.into(), value.into());
    }

    /// Removes a property, keeping the order of the remaining ones.
    fn remove(&mut self, key: &str) -> Option<PropertyValue> {
        self.properties_mut().shift_remove(key)
    }
}

/// Elements that carry a sequence of child nodes.
pub trait HasChildren {
    /// The child nodes.
    fn children(&self) -> &[Node];

    /// Mutable access to the child nodes.
    fn children_mut(&mut self) -> &mut Vec<Node>;

    /// Appends a child.
    fn push(&mut self, child: impl Into<Node>)
    where
        Self: Sized,
    {
        self.children_mut().push(child.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equality() {
        let a = Element::new().with_child("x").with_property("id", "1");
        let b = Element::new().with_child("x").with_property("id", "1");
        assert_eq!(Node::from(a.clone()), Node::from(b));

        let renamed = a.clone().named("Other");
        assert_ne!(Node::from(a.clone()), Node::from(renamed));

        // Same name, different type.
        let children_only = ChildrenOnlyElement::new().named("Element");
        let element = Element::new();
        assert_ne!(Node::from(children_only), Node::from(element));
    }

    #[test]
    fn test_property_order_is_irrelevant_for_equality() {
        let a = EmptyElement::new().with_property("a", "1").with_property("b", "2");
        let b = EmptyElement::new().with_property("b", "2").with_property("a", "1");
        assert_eq!(Node::from(a), Node::from(b));
    }

    #[test]
    fn test_boxed_clone() {
        let original = Element::new().with_child("x");
        let boxed: Box<dyn Markup> = Box::new(original.clone());
        let copy = boxed.clone();
        assert!(copy == boxed);
        assert_eq!(copy.markup(), original.markup());
    }

    #[test]
    fn test_downcast() {
        let node = Node::from(StringElement::new("hi"));
        let string = node.downcast_ref::<StringElement>().unwrap();
        assert_eq!(string.value(), Some("hi"));
        assert!(node.downcast_ref::<Element>().is_none());
    }

    #[test]
    fn test_display() {
        let boxed: Box<dyn Markup> = Box::new(SelfClosedElement::new());
        assert_eq!(boxed.to_string(), "<SelfClosedElement />");
        assert_eq!(Node::from("a<b").to_string(), "a&lt;b");
    }
}
