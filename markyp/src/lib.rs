//! markyp - markup documents as typed element trees
//!
//! This library lets you build markup (XML, HTML-like) documents in code,
//! render them to text, and parse markup text back into element trees.
//!
//! # Overview
//!
//! A document is a tree of elements implementing [`Markup`]. Children are
//! [`Node`]s: nested elements, plain text (escaped when rendered), or
//! [`Node::Skip`] for content that should not render at all. Properties are
//! kept in insertion order and render as XML attributes.
//!
//! The [`Parser`] maps parsed XML nodes onto elements through a rule table of
//! [`ElementFactory`]s. Tags without a rule become [`AnyElement`]s, so any
//! well-formed document can be read and written back.
//!
//! # Example
//!
//! ```
//! use markyp::{Element, Markup, Node, Parser, StringElement, Variant};
//!
//! let page = Element::new()
//!     .named("div")
//!     .class("note")
//!     .with_child(StringElement::new("a < b").named("p"));
//! let markup = page.markup();
//! assert_eq!(markup, "<div class=\"note\">\n<p >a &lt; b</p>\n</div>");
//!
//! let parser = Parser::with_rules([
//!     ("div", Variant::Element.factory().named("div")),
//!     ("p", Variant::String.factory().named("p")),
//! ])
//! .unwrap();
//! let parsed = parser.parse_str(&markup).unwrap();
//! assert_eq!(parsed.markup(), markup);
//! assert_eq!(&*parsed, &page as &dyn Markup);
//! ```

pub mod constants;
pub mod element;
pub mod error;
pub mod factory;
pub mod formatter;
pub mod join;
pub mod parser;
pub mod property;
pub mod xml;

// Re-export commonly used types
pub use constants::*;
pub use element::{
    ChildrenOnlyElement, ComputedElement, Element, ElementSequence, EmptyElement, HasChildren,
    HasProperties, Markup, MarkupObject, Node, SelfClosedElement, Shape, StandaloneElement,
    StringElement, Variant,
};
pub use error::{Error, Result};
pub use factory::{factory_fn, ElementFactory, FactoryRef, FnFactory, VariantFactory};
pub use formatter::{
    format_element_sequence, format_element_sequence_with, format_properties,
    format_properties_with, format_property, xml_escape, xml_format_element,
};
pub use join::{join, join_elements, join_with, Join};
pub use parser::{AnyElement, AnyFactory, Converter, Parser, ParserRule, Rule};
pub use property::{fold_class_override, properties, Properties, PropertyValue};
pub use xml::XmlNode;
