//! Markup parser.
//!
//! The parser reads markup into a generic [`XmlNode`] tree and maps every node
//! onto an element through a tag name to [`ElementFactory`] rule table:
//!
//! - a bare factory handles tags matching its [`element_name`](ElementFactory::element_name)
//! - a [`ParserRule`] (or `(tag, factory)` pair) handles the given tag
//!
//! Tags without a rule become [`AnyElement`]s, so the tag name, properties and
//! children of every node are kept intact.

mod any;

pub use any::{AnyElement, AnyFactory};

use std::fmt;
use std::path::Path;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::constants::{ELEMENT_TAG_PROPERTY, QUOTE_ENTITY};
use crate::element::{Markup, Node};
use crate::error::{Error, Result};
use crate::factory::{ElementFactory, FactoryRef};
use crate::property::{Properties, PropertyValue};
use crate::xml::{self, XmlNode};

/// Transform applied to the factory, children and properties of every node
/// right before the element is created.
pub type Converter = Box<dyn Fn(FactoryRef, Vec<Node>, Properties) -> (FactoryRef, Vec<Node>, Properties)>;

/// A tag name and the factory that handles it.
#[derive(Clone)]
pub struct ParserRule {
    /// The tag the rule applies to.
    pub tag_name: String,
    /// The factory to use for the tag.
    pub factory: FactoryRef,
}

impl ParserRule {
    /// Creates a rule for the given tag.
    pub fn new(tag_name: impl Into<String>, factory: impl ElementFactory + 'static) -> Self {
        ParserRule {
            tag_name: tag_name.into(),
            factory: Rc::new(factory),
        }
    }
}

/// A rule accepted by [`Parser::add_rules`].
#[derive(Clone)]
pub enum Rule {
    /// Factory registered under its own element name.
    Factory(FactoryRef),
    /// Factory registered under an explicit tag.
    Tagged(ParserRule),
}

impl Rule {
    /// Resolves the rule into a table entry, validating the tag.
    fn into_entry(self) -> Result<(String, FactoryRef)> {
        let (tag, factory) = match self {
            Rule::Factory(factory) => (factory.element_name().to_string(), factory),
            Rule::Tagged(rule) => (rule.tag_name, rule.factory),
        };
        if !is_xml_name(&tag) {
            return Err(Error::InvalidRule(format!(
                "{:?} (factory {}) is not a valid tag name",
                tag,
                factory.element_name()
            )));
        }
        Ok((tag, factory))
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Factory(factory) => f.debug_tuple("Factory").field(factory).finish(),
            Rule::Tagged(rule) => f
                .debug_tuple("Tagged")
                .field(&rule.tag_name)
                .field(&rule.factory)
                .finish(),
        }
    }
}

impl<F: ElementFactory + 'static> From<F> for Rule {
    fn from(factory: F) -> Self {
        Rule::Factory(Rc::new(factory))
    }
}

impl From<FactoryRef> for Rule {
    fn from(factory: FactoryRef) -> Self {
        Rule::Factory(factory)
    }
}

impl From<ParserRule> for Rule {
    fn from(rule: ParserRule) -> Self {
        Rule::Tagged(rule)
    }
}

impl<S, F> From<(S, F)> for Rule
where
    S: Into<String>,
    F: ElementFactory + 'static,
{
    fn from((tag, factory): (S, F)) -> Self {
        Rule::Tagged(ParserRule::new(tag, factory))
    }
}

/// Returns whether `name` can be used as an XML tag name.
fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '-' | '.' | '_' | ':'))
}

/// Markup parser with a tag name to element factory rule table.
///
/// Rule tables and the converter belong to one parser instance; factories are
/// shared through `Rc`, so a parser stays on the thread that built it.
pub struct Parser {
    rules: FxHashMap<String, FactoryRef>,
    fallback: FactoryRef,
    converter: Option<Converter>,
}

impl Parser {
    /// Creates a parser without rules.
    pub fn new() -> Self {
        Parser {
            rules: FxHashMap::default(),
            fallback: Rc::new(AnyFactory),
            converter: None,
        }
    }

    /// Creates a parser with the given rules.
    pub fn with_rules<I>(rules: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Rule>,
    {
        let mut parser = Parser::new();
        parser.add_rules(rules)?;
        Ok(parser)
    }

    /// Adds rules to the parser, replacing existing rules for the same tags.
    ///
    /// Every rule is validated first; on error the rule table is unchanged.
    pub fn add_rules<I>(&mut self, rules: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Rule>,
    {
        let entries = rules
            .into_iter()
            .map(|rule| rule.into().into_entry())
            .collect::<Result<Vec<_>>>()?;
        for (tag, factory) in entries {
            log::debug!("rule <{}> -> {}", tag, factory.element_name());
            self.rules.insert(tag, factory);
        }
        Ok(())
    }

    /// Replaces all rules of the parser.
    ///
    /// On error the previous rules are kept.
    pub fn set_rules<I>(&mut self, rules: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Rule>,
    {
        let mut replacement = Parser::new();
        replacement.add_rules(rules)?;
        self.rules = replacement.rules;
        Ok(())
    }

    /// Removes every rule.
    pub fn clear_rules(&mut self) {
        log::debug!("clearing {} rule(s)", self.rules.len());
        self.rules.clear();
    }

    /// Returns the factory registered for a tag.
    pub fn rule(&self, tag: &str) -> Option<&FactoryRef> {
        self.rules.get(tag)
    }

    /// Number of registered rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Installs the converter applied to every node before construction.
    ///
    /// The converter receives the resolved factory, the converted children and
    /// the node properties (including `element_tag` for unregistered tags) and
    /// returns the values the element is built from.
    pub fn set_converter<F>(&mut self, converter: F)
    where
        F: Fn(FactoryRef, Vec<Node>, Properties) -> (FactoryRef, Vec<Node>, Properties) + 'static,
    {
        self.converter = Some(Box::new(converter));
    }

    /// Removes the converter.
    pub fn clear_converter(&mut self) {
        self.converter = None;
    }

    /// Returns whether a converter is installed.
    pub fn has_converter(&self) -> bool {
        self.converter.is_some()
    }

    /// Recursively converts a parse tree node into an element hierarchy.
    pub fn convert(&self, node: &XmlNode) -> Result<Box<dyn Markup>> {
        let mut properties = self.properties_of(node);
        let factory = match self.rules.get(&node.tag) {
            Some(factory) => factory.clone(),
            None => {
                properties.insert(
                    ELEMENT_TAG_PROPERTY.to_string(),
                    PropertyValue::Str(node.tag.clone()),
                );
                self.fallback.clone()
            }
        };
        let children = self.children_of(node)?;

        let (factory, children, properties) = match &self.converter {
            Some(converter) => converter(factory, children, properties),
            None => (factory, children, properties),
        };

        log::trace!(
            "converting <{}> with {} ({} children)",
            node.tag,
            factory.element_name(),
            children.len()
        );
        factory.create(children, properties)
    }

    /// Parses an XML string.
    pub fn parse_str(&self, text: &str) -> Result<Box<dyn Markup>> {
        let root = xml::read_str(text)?;
        self.convert(&root)
    }

    /// Parses the XML file at the given path.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<Box<dyn Markup>> {
        let root = xml::read_file(path)?;
        self.convert(&root)
    }

    /// Child elements when there is no leading text, otherwise the trimmed
    /// text as the only child.
    fn children_of(&self, node: &XmlNode) -> Result<Vec<Node>> {
        match node.leading_text() {
            Some(text) => Ok(vec![Node::Text(text.to_string())]),
            None => node
                .children
                .iter()
                .map(|child| self.convert(child).map(Node::Element))
                .collect(),
        }
    }

    /// Attributes as string properties, with `"` replaced by its entity so the
    /// values stay well-formed when rendered between double quotes.
    fn properties_of(&self, node: &XmlNode) -> Properties {
        node.attributes
            .iter()
            .map(|(key, value)| {
                (
                    key.clone(),
                    PropertyValue::Str(value.replace('"', QUOTE_ENTITY)),
                )
            })
            .collect()
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<&String> = self.rules.keys().collect();
        tags.sort();
        f.debug_struct("Parser")
            .field("rules", &tags)
            .field("converter", &self.converter.is_some())
            .finish()
    }
}
