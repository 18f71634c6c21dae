//! Example: build a small page in code and read it back
//!
//! Builds a document with a computed element and joined sections, prints its
//! markup, then parses the markup again with a rule table and prints the
//! result. With a file argument, the file is parsed instead.
//!
//! Usage: cargo run --example page [input.xml]

use std::env;

use markyp::{
    join_elements, ChildrenOnlyElement, ComputedElement, Element, Markup, Node, Parser,
    Properties, SelfClosedElement, StringElement, Variant,
};

/// A list whose items are computed when the markup is created.
#[derive(Debug, Clone)]
struct ItemList {
    items: Vec<&'static str>,
}

impl ComputedElement for ItemList {
    fn element_name(&self) -> &str {
        "ul"
    }

    fn element_properties(&self) -> Option<Properties> {
        Some(markyp::properties([("count", self.items.len() as i64)]))
    }

    fn element_children(&self) -> Option<Vec<Node>> {
        Some(
            self.items
                .iter()
                .map(|item| StringElement::new(*item).named("li").into())
                .collect(),
        )
    }
}

fn build_page() -> ChildrenOnlyElement {
    let sections: Vec<Node> = ["Introduction", "Usage", "License"]
        .iter()
        .map(|title| {
            Element::new()
                .named("section")
                .class("chapter")
                .with_child(StringElement::new(*title).named("h2"))
                .into()
        })
        .collect();
    let rule: Node = SelfClosedElement::new().named("hr").into();

    ChildrenOnlyElement::new()
        .named("page")
        .with_child(ItemList {
            items: vec!["fast", "small", "typed"],
        })
        .with_children(join_elements(sections, rule))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let parser = Parser::with_rules([
        ("page", Variant::ChildrenOnly.factory().named("page")),
        ("section", Variant::Element.factory().named("section")),
        ("h2", Variant::String.factory().named("h2")),
        ("li", Variant::String.factory().named("li")),
        ("hr", Variant::SelfClosed.factory().named("hr")),
    ])?;

    let parsed = match env::args().nth(1) {
        Some(path) => {
            eprintln!("Parsing: {}", path);
            parser.parse_file(path)?
        }
        None => {
            let page = build_page();
            println!("{}", page.markup());
            eprintln!("Parsing the generated markup...");
            parser.parse_str(&page.markup())?
        }
    };

    // `ul` has no rule, so it comes back as a generic element.
    println!("{}", parsed.markup());
    Ok(())
}
