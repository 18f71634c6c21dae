//! Elements whose properties and children are calculated at render time.

use std::fmt;

use super::{Markup, Node};
use crate::formatter::{format_element_sequence, format_properties};
use crate::property::Properties;

/// Base for elements that calculate their own properties and children only
/// when the markup is created.
///
/// Every type implementing this trait (plus `Debug` and `Clone`) is a
/// [`Markup`] element rendered as `<name {properties}>{children}</name>`.
///
/// ```
/// use markyp::{ComputedElement, Markup, Node};
///
/// #[derive(Debug, Clone)]
/// struct Counter(u32);
///
/// impl ComputedElement for Counter {
///     fn element_name(&self) -> &str {
///         "counter"
///     }
///
///     fn element_children(&self) -> Option<Vec<Node>> {
///         Some((0..self.0).map(|i| Node::from(i.to_string())).collect())
///     }
/// }
///
/// assert_eq!(Counter(2).markup(), "<counter >\n0\n1\n</counter>");
/// ```
pub trait ComputedElement {
    /// The tag name of the element.
    fn element_name(&self) -> &str;

    /// Whether the children go on the same line as the element.
    fn inline_children(&self) -> bool {
        false
    }

    /// The properties of the element, if it has any.
    fn element_properties(&self) -> Option<Properties> {
        None
    }

    /// The children of the element, if it has any.
    fn element_children(&self) -> Option<Vec<Node>> {
        None
    }
}

impl<T> Markup for T
where
    T: ComputedElement + fmt::Debug + Clone + 'static,
{
    fn element_name(&self) -> &str {
        ComputedElement::element_name(self)
    }

    fn markup(&self) -> String {
        let name = ComputedElement::element_name(self);
        let properties = self
            .element_properties()
            .map(|props| format_properties(&props))
            .unwrap_or_default();
        let children = self
            .element_children()
            .map(|children| {
                format_element_sequence(&children, ComputedElement::inline_children(self))
            })
            .unwrap_or_default();
        format!("<{name} {properties}>{children}</{name}>")
    }

    fn inline_children(&self) -> bool {
        ComputedElement::inline_children(self)
    }
}
