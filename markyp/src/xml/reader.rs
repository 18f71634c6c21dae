//! Reads markup into a generic [`XmlNode`] tree.
//!
//! This reader uses quick-xml's streaming API with a node stack. Only the text
//! before the first child element of a node is kept; tails, comments,
//! processing instructions and doctypes are dropped.
//!
//! Line endings in text are normalized to `\n`. Literal tabs and line breaks
//! in attribute values become spaces; character references are kept.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use quick_xml::escape::{resolve_xml_entity, unescape};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::XmlNode;
use crate::error::{Error, Result};

/// Reads the root element of an XML string.
pub fn read_str(xml: &str) -> Result<XmlNode> {
    let mut reader = Reader::from_str(xml);
    // Keep whitespace; the converter decides what counts as text.
    reader.config_mut().trim_text_start = false;
    reader.config_mut().trim_text_end = false;
    read_document(&mut reader)
}

/// Reads the root element of an XML file.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<XmlNode> {
    let file = File::open(path)?;
    let mut reader = Reader::from_reader(BufReader::new(file));
    reader.config_mut().trim_text_start = false;
    reader.config_mut().trim_text_end = false;
    read_document(&mut reader)
}

fn read_document<R: BufRead>(reader: &mut Reader<R>) -> Result<XmlNode> {
    let mut stack: Vec<XmlNode> = Vec::new();
    let mut root: Option<XmlNode> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                let node = read_start(e, reader)?;
                ensure_single_root(&stack, &root)?;
                stack.push(node);
            }
            Event::Empty(ref e) => {
                let node = read_start(e, reader)?;
                ensure_single_root(&stack, &root)?;
                attach(&mut stack, &mut root, node);
            }
            Event::End(_) => {
                let node = stack
                    .pop()
                    .ok_or_else(|| Error::Parse("unexpected closing tag".to_string()))?;
                attach(&mut stack, &mut root, node);
            }
            Event::Text(e) => {
                let text = e.xml_content().map_err(|e| Error::Parse(e.to_string()))?;
                push_text(&mut stack, &text)?;
            }
            Event::CData(e) => {
                let text = e.xml_content().map_err(|e| Error::Parse(e.to_string()))?;
                push_text(&mut stack, &text)?;
            }
            Event::GeneralRef(e) => {
                let name = e.decode().map_err(|e| Error::Parse(e.to_string()))?;
                let resolved = resolve_reference(&name)?;
                push_text(&mut stack, &resolved)?;
            }
            Event::Eof => break,
            Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(Error::Parse(format!("unclosed element <{}>", open.tag)));
    }
    root.ok_or_else(|| Error::Parse("no root element found".to_string()))
}

/// Reads an element's name and attributes.
fn read_start<R: BufRead>(e: &BytesStart, reader: &Reader<R>) -> Result<XmlNode> {
    let tag = reader
        .decoder()
        .decode(e.name().as_ref())
        .map_err(|e| Error::Parse(e.to_string()))?
        .to_string();

    let mut node = XmlNode::new(tag);
    for attr_result in e.attributes() {
        let attr = attr_result.map_err(|e| Error::Parse(format!("Attribute error: {}", e)))?;
        let key = reader
            .decoder()
            .decode(attr.key.as_ref())
            .map_err(|e| Error::Parse(e.to_string()))?
            .to_string();
        let raw = reader
            .decoder()
            .decode(&attr.value)
            .map_err(|e| Error::Parse(e.to_string()))?;
        let value = unescape(&normalize_attribute_whitespace(&raw))
            .map_err(|e| Error::Parse(e.to_string()))?
            .into_owned();
        node.attributes.push((key, value));
    }

    log::trace!("read <{}> with {} attribute(s)", node.tag, node.attributes.len());
    Ok(node)
}

/// Replaces literal tabs and line breaks in a raw attribute value with
/// spaces. A `\r\n` pair becomes a single space.
fn normalize_attribute_whitespace(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['\t', '\n', '\r']) {
        return Cow::Borrowed(raw);
    }
    Cow::Owned(
        raw.replace("\r\n", " ")
            .replace(['\t', '\n', '\r'], " "),
    )
}

fn ensure_single_root(stack: &[XmlNode], root: &Option<XmlNode>) -> Result<()> {
    if stack.is_empty() && root.is_some() {
        return Err(Error::Parse("junk after document element".to_string()));
    }
    Ok(())
}

/// Adds a finished node to its parent, or makes it the root.
fn attach(stack: &mut [XmlNode], root: &mut Option<XmlNode>, node: XmlNode) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => *root = Some(node),
    }
}

/// Appends character data to the leading text of the open element.
fn push_text(stack: &mut [XmlNode], text: &str) -> Result<()> {
    match stack.last_mut() {
        Some(current) if current.children.is_empty() => {
            current.text.get_or_insert_with(String::new).push_str(text);
            Ok(())
        }
        // Tail text after a child element.
        Some(_) => Ok(()),
        None if text.trim().is_empty() => Ok(()),
        None => Err(Error::Parse("text outside the root element".to_string())),
    }
}

/// Resolves a named or numeric character reference.
fn resolve_reference(name: &str) -> Result<String> {
    if let Some(resolved) = resolve_xml_entity(name) {
        return Ok(resolved.to_string());
    }

    if let Some(rest) = name.strip_prefix('#') {
        let code = match rest.strip_prefix('x').or_else(|| rest.strip_prefix('X')) {
            Some(hex) => u32::from_str_radix(hex, 16),
            None => rest.parse::<u32>(),
        }
        .map_err(|_| Error::Parse(format!("invalid character reference &{};", name)))?;
        let ch = char::from_u32(code)
            .ok_or_else(|| Error::Parse(format!("invalid code point {} in &{};", code, name)))?;
        return Ok(ch.to_string());
    }

    Err(Error::Parse(format!("undefined entity &{};", name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_simple_xml() {
        let root = read_str(r#"<root><child>text</child></root>"#).unwrap();
        assert_eq!(root.tag, "root");
        assert_eq!(root.text, None);
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].tag, "child");
        assert_eq!(root.children[0].text.as_deref(), Some("text"));
    }

    #[test]
    fn test_read_attributes_in_order() {
        let root = read_str(r#"<root id="foo" class="bar" a="&lt;&quot;">content</root>"#).unwrap();
        assert_eq!(
            root.attributes,
            vec![
                ("id".to_string(), "foo".to_string()),
                ("class".to_string(), "bar".to_string()),
                ("a".to_string(), "<\"".to_string()),
            ]
        );
    }

    #[test]
    fn test_whitespace_is_kept() {
        let root = read_str("<root>\n  hello  \n</root>").unwrap();
        assert_eq!(root.text.as_deref(), Some("\n  hello  \n"));
        assert_eq!(root.leading_text(), Some("hello"));
    }

    #[test]
    fn test_references_are_resolved() {
        let root = read_str("<root>a &lt; b &amp; c &#65;&#x42;</root>").unwrap();
        assert_eq!(root.text.as_deref(), Some("a < b & c AB"));
    }

    #[test]
    fn test_line_endings_are_normalized() {
        let root = read_str("<root>x\r\ny\rz</root>").unwrap();
        assert_eq!(root.text.as_deref(), Some("x\ny\nz"));

        let root = read_str("<root><![CDATA[a\r\nb]]></root>").unwrap();
        assert_eq!(root.text.as_deref(), Some("a\nb"));
    }

    #[test]
    fn test_attribute_whitespace_is_normalized() {
        let root = read_str("<a t=\"x\ny\tz\" u=\"1\r\n2\" v=\"p&#10;q\"/>").unwrap();
        assert_eq!(
            root.attributes,
            vec![
                ("t".to_string(), "x y z".to_string()),
                ("u".to_string(), "1 2".to_string()),
                ("v".to_string(), "p\nq".to_string()),
            ]
        );
    }

    #[test]
    fn test_cdata_is_text() {
        let root = read_str("<root><![CDATA[<raw>]]></root>").unwrap();
        assert_eq!(root.text.as_deref(), Some("<raw>"));
    }

    #[test]
    fn test_tail_text_is_dropped() {
        let root = read_str("<root>lead<a/>tail<b>inner</b>more</root>").unwrap();
        assert_eq!(root.text.as_deref(), Some("lead"));
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[1].text.as_deref(), Some("inner"));
    }

    #[test]
    fn test_comments_and_declarations_are_ignored() {
        let root = read_str("<?xml version=\"1.0\"?>\n<!-- c --><root><!-- inner --></root>\n")
            .unwrap();
        assert_eq!(root.tag, "root");
        assert!(root.children.is_empty());
        assert_eq!(root.text, None);
    }

    #[test]
    fn test_empty_element() {
        let root = read_str("<root><empty /></root>").unwrap();
        assert_eq!(root.children[0].tag, "empty");
        assert!(root.children[0].children.is_empty());
    }

    #[test]
    fn test_malformed_input_fails() {
        assert!(read_str("").is_err());
        assert!(read_str("<a><b></a>").is_err());
        assert!(read_str("<a>").is_err());
        assert!(read_str("<a/><b/>").is_err());
        assert!(read_str("<a/>junk").is_err());
        assert!(read_str("<a>&bogus;</a>").is_err());
    }

    #[test]
    fn test_read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<doc lang=\"en\"><p>x</p></doc>").unwrap();
        let root = read_file(file.path()).unwrap();
        assert_eq!(root.tag, "doc");
        assert_eq!(root.children[0].text.as_deref(), Some("x"));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_file("/definitely/not/here.xml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
