//! Element factories.
//!
//! A factory builds an element from a child list and a property map. The
//! parser resolves one per tag and calls it for every node it converts.

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

use crate::element::{
    ChildrenOnlyElement, Element, ElementSequence, EmptyElement, Markup, Node, SelfClosedElement,
    Shape, StandaloneElement, StringElement, Variant,
};
use crate::error::{Error, Result};
use crate::property::{fold_class_override, Properties};

/// Shared handle to a factory.
pub type FactoryRef = Rc<dyn ElementFactory>;

/// Constructor-like capability that turns children and properties into an
/// element.
pub trait ElementFactory {
    /// The name the factory is registered under when no tag is given.
    fn element_name(&self) -> &str;

    /// Builds an element.
    fn create(&self, children: Vec<Node>, properties: Properties) -> Result<Box<dyn Markup>>;
}

impl fmt::Debug for dyn ElementFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ElementFactory")
            .field(&self.element_name())
            .finish()
    }
}

/// Factory for one of the built-in variants.
///
/// A `class_` property is folded into `class` before the element is built,
/// and the input is checked against the variant's [`Shape`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantFactory {
    variant: Variant,
    name: Cow<'static, str>,
}

impl VariantFactory {
    /// Creates a factory producing elements named after the variant.
    pub fn new(variant: Variant) -> Self {
        VariantFactory {
            variant,
            name: Cow::Borrowed(variant.type_name()),
        }
    }

    /// Makes the factory produce elements with the given name.
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    /// The variant this factory builds.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    fn reject(&self, reason: &str) -> Error {
        Error::factory(&*self.name, reason)
    }
}

impl Variant {
    /// Returns a factory for this variant.
    pub fn factory(self) -> VariantFactory {
        VariantFactory::new(self)
    }
}

impl ElementFactory for VariantFactory {
    fn element_name(&self) -> &str {
        &self.name
    }

    fn create(&self, children: Vec<Node>, mut properties: Properties) -> Result<Box<dyn Markup>> {
        fold_class_override(&mut properties);
        let shape = self.variant.shape();

        if !shape.contains(Shape::PROPERTIES) && !properties.is_empty() {
            return Err(self.reject("element does not accept properties"));
        }

        let mut children: Vec<Node> = children.into_iter().filter(|c| !c.is_skip()).collect();
        if !shape.intersects(Shape::CHILDREN | Shape::TEXT) && !children.is_empty() {
            return Err(self.reject("element does not accept children"));
        }

        let name = self.name.clone();
        let element: Box<dyn Markup> = match self.variant {
            Variant::ChildrenOnly => {
                Box::new(ChildrenOnlyElement::from_children(children).named(name))
            }
            Variant::Element => Box::new(Element::from_parts(children, properties).named(name)),
            Variant::Empty => Box::new(EmptyElement::from_properties(properties).named(name)),
            Variant::SelfClosed => {
                Box::new(SelfClosedElement::from_properties(properties).named(name))
            }
            Variant::Standalone => {
                Box::new(StandaloneElement::from_properties(properties).named(name))
            }
            Variant::String => {
                let value = match children.pop() {
                    None => None,
                    Some(Node::Text(text)) if children.is_empty() => Some(text),
                    Some(_) => return Err(self.reject("element accepts a single string only")),
                };
                Box::new(StringElement::from_parts(value, properties).named(name))
            }
            Variant::Sequence => Box::new(ElementSequence::from_children(children).named(name)),
        };
        Ok(element)
    }
}

/// Factory backed by a closure.
pub struct FnFactory<F> {
    name: String,
    build: F,
}

impl<F> ElementFactory for FnFactory<F>
where
    F: Fn(Vec<Node>, Properties) -> Result<Box<dyn Markup>>,
{
    fn element_name(&self) -> &str {
        &self.name
    }

    fn create(&self, children: Vec<Node>, properties: Properties) -> Result<Box<dyn Markup>> {
        (self.build)(children, properties)
    }
}

/// Creates a factory from a name and a closure.
///
/// ```
/// use markyp::{factory_fn, Element, ElementFactory, Markup, Properties};
///
/// let div = factory_fn("div", |children, props| {
///     Ok(Box::new(Element::from_parts(children, props).named("div").inline(true)))
/// });
/// let element = div.create(vec!["hi".into()], Properties::new()).unwrap();
/// assert_eq!(element.markup(), "<div >hi</div>");
/// ```
pub fn factory_fn<F>(name: impl Into<String>, build: F) -> FnFactory<F>
where
    F: Fn(Vec<Node>, Properties) -> Result<Box<dyn Markup>>,
{
    FnFactory {
        name: name.into(),
        build,
    }
}
