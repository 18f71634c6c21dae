//! Generic element formatters.
//!
//! These are the string primitives every element variant renders through.
//! Property values are written verbatim; only text children are escaped.

use std::borrow::Cow;

use quick_xml::escape::partial_escape;

use crate::element::Node;
use crate::property::{Properties, PropertyValue};

/// Formats a single property as `name="value"`.
///
/// A [`PropertyValue::Flag`] yields just `name`, which allows flag attributes
/// such as `disabled` in HTML. Booleans are written as `true` / `false`.
pub fn format_property(name: &str, value: &PropertyValue) -> String {
    match value {
        PropertyValue::Flag => name.to_string(),
        _ => format!("{}=\"{}\"", name, value),
    }
}

/// Formats a property map with [`format_property`], space separated.
pub fn format_properties(properties: &Properties) -> String {
    format_properties_with(properties, format_property)
}

/// Formats a property map with a custom per-property formatter.
pub fn format_properties_with<F>(properties: &Properties, formatter: F) -> String
where
    F: Fn(&str, &PropertyValue) -> String,
{
    properties
        .iter()
        .map(|(name, value)| formatter(name, value))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Escapes `<`, `>` and `&`. Quotes pass through unchanged.
pub fn xml_escape(text: &str) -> Cow<'_, str> {
    partial_escape(text)
}

/// Formats a node, escaping text nodes.
pub fn xml_format_element(node: &Node) -> String {
    match node {
        Node::Element(element) => element.markup(),
        Node::Text(text) => xml_escape(text).into_owned(),
        Node::Skip => String::new(),
    }
}

/// Formats a sequence of nodes with [`xml_format_element`].
///
/// Skipped nodes are dropped. Inline sequences are joined with a space;
/// otherwise every node goes on its own line and the result starts and ends
/// with a newline.
pub fn format_element_sequence(nodes: &[Node], inline: bool) -> String {
    format_element_sequence_with(nodes, xml_format_element, inline)
}

/// Formats a sequence of nodes with a custom element formatter.
pub fn format_element_sequence_with<F>(nodes: &[Node], formatter: F, inline: bool) -> String
where
    F: Fn(&Node) -> String,
{
    let parts: Vec<String> = nodes
        .iter()
        .filter(|node| !node.is_skip())
        .map(formatter)
        .collect();

    if parts.is_empty() {
        return String::new();
    }

    if inline {
        parts.join(" ")
    } else {
        format!("\n{}\n", parts.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Element, HasChildren};
    use crate::property::properties;
    use pretty_assertions::assert_eq;

    fn te() -> Element {
        Element::new().named("TE")
    }

    #[test]
    fn test_format_property() {
        for value in ["", " ", "foo", "foo, bar"] {
            assert_eq!(
                format_property("prop_name", &value.into()),
                format!("prop_name=\"{}\"", value)
            );
        }
        for value in (0..99).step_by(7) {
            assert_eq!(
                format_property("prop_name", &PropertyValue::from(value)),
                format!("prop_name=\"{}\"", value)
            );
        }
        assert_eq!(
            format_property("prop_name", &true.into()),
            "prop_name=\"true\""
        );
        assert_eq!(
            format_property("prop_name", &false.into()),
            "prop_name=\"false\""
        );
        assert_eq!(format_property("prop_name", &PropertyValue::Flag), "prop_name");
    }

    #[test]
    fn test_property_values_are_not_escaped() {
        assert_eq!(format_property("a", &"<&>".into()), "a=\"<&>\"");
    }

    #[test]
    fn test_format_properties() {
        let props = properties([
            ("foo", PropertyValue::from("foo")),
            ("bar", "bar".into()),
            ("int", 19990526.into()),
            ("float", 2008.0521.into()),
            ("true", true.into()),
            ("false", false.into()),
            ("none", PropertyValue::Flag),
        ]);
        let formatted = "foo=\"foo\" bar=\"bar\" int=\"19990526\" float=\"2008.0521\" true=\"true\" false=\"false\" none";

        assert_eq!(format_properties(&props), formatted);
        assert_eq!(format_properties_with(&props, format_property), formatted);
        assert_eq!(
            format_properties_with(&props, |name, value| format!("{}={}", name, value)),
            "foo=foo bar=bar int=19990526 float=2008.0521 true=true false=false none="
        );
        assert_eq!(format_properties(&Properties::new()), "");
    }

    #[test]
    fn test_xml_format_element() {
        assert_eq!(
            xml_format_element(&Node::from("<&>\"'¢£¥€©®")),
            "&lt;&amp;&gt;\"'¢£¥€©®"
        );
        let element = te().with_child("<&>").with_property("arg", "arg");
        assert_eq!(
            xml_format_element(&Node::from(element)),
            "<TE arg=\"arg\">\n&lt;&amp;&gt;\n</TE>"
        );
        assert_eq!(xml_format_element(&Node::Skip), "");
    }

    #[test]
    fn test_format_element_sequence() {
        let mut inner = te().with_child("foo-inner");
        inner.push(Node::Skip);
        inner.push(te().with_child("foo-inner-inner"));

        let elements = vec![
            Node::Skip,
            te().with_child("foo-1")
                .with_child(inner)
                .with_child(Node::Skip)
                .with_child("foo-2")
                .into(),
            "bar".into(),
            Node::Skip,
            te().with_property("baz", "baz").into(),
            Node::Skip,
        ];

        assert_eq!(
            format_element_sequence(&elements, true),
            "<TE >\nfoo-1\n<TE >\nfoo-inner\n<TE >\nfoo-inner-inner\n</TE>\n</TE>\nfoo-2\n</TE> bar <TE baz=\"baz\"></TE>"
        );
        assert_eq!(
            format_element_sequence(&elements, false),
            "\n<TE >\nfoo-1\n<TE >\nfoo-inner\n<TE >\nfoo-inner-inner\n</TE>\n</TE>\nfoo-2\n</TE>\nbar\n<TE baz=\"baz\"></TE>\n"
        );
    }

    #[test]
    fn test_format_element_sequence_custom_formatter() {
        let nodes = vec![Node::from("<markup></markup>")];
        let raw = |node: &Node| match node {
            Node::Text(text) => text.clone(),
            other => xml_format_element(other),
        };
        assert_eq!(
            format_element_sequence_with(&nodes, raw, false),
            "\n<markup></markup>\n"
        );
        assert_eq!(
            format_element_sequence(&nodes, true),
            "&lt;markup&gt;&lt;/markup&gt;"
        );
    }

    #[test]
    fn test_format_element_sequence_empty() {
        assert_eq!(format_element_sequence(&[], false), "");
        assert_eq!(format_element_sequence(&[], true), "");
        assert_eq!(format_element_sequence(&[Node::Skip], false), "");
    }

    #[test]
    fn test_single_child_is_wrapped_in_newlines() {
        assert_eq!(format_element_sequence(&[Node::from("x")], false), "\nx\n");
        assert_eq!(format_element_sequence(&[Node::from("x")], true), "x");
    }
}
