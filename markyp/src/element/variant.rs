//! The closed set of built-in element shapes.

use bitflags::bitflags;

bitflags! {
    /// What a variant carries.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Shape: u8 {
        /// Has a property map.
        const PROPERTIES = 1;
        /// Has a child sequence.
        const CHILDREN = 1 << 1;
        /// Has a single string instead of children.
        const TEXT = 1 << 2;
    }
}

/// Built-in element variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// [`ChildrenOnlyElement`](super::ChildrenOnlyElement)
    ChildrenOnly,
    /// [`Element`](super::Element)
    Element,
    /// [`EmptyElement`](super::EmptyElement)
    Empty,
    /// [`SelfClosedElement`](super::SelfClosedElement)
    SelfClosed,
    /// [`StandaloneElement`](super::StandaloneElement)
    Standalone,
    /// [`StringElement`](super::StringElement)
    String,
    /// [`ElementSequence`](super::ElementSequence)
    Sequence,
}

impl Variant {
    /// All built-in variants.
    pub const ALL: [Variant; 7] = [
        Variant::ChildrenOnly,
        Variant::Element,
        Variant::Empty,
        Variant::SelfClosed,
        Variant::Standalone,
        Variant::String,
        Variant::Sequence,
    ];

    /// The variants that survive a render and parse round-trip.
    ///
    /// Standalone tags are never closed and sequences have no tag, so neither
    /// produces well-formed markup of its own.
    pub const CORE: [Variant; 5] = [
        Variant::ChildrenOnly,
        Variant::Element,
        Variant::Empty,
        Variant::SelfClosed,
        Variant::String,
    ];

    /// The type name, which is also the default element name.
    pub fn type_name(self) -> &'static str {
        match self {
            Variant::ChildrenOnly => "ChildrenOnlyElement",
            Variant::Element => "Element",
            Variant::Empty => "EmptyElement",
            Variant::SelfClosed => "SelfClosedElement",
            Variant::Standalone => "StandaloneElement",
            Variant::String => "StringElement",
            Variant::Sequence => "ElementSequence",
        }
    }

    /// Looks a variant up by type name.
    pub fn from_type_name(name: &str) -> Option<Variant> {
        Variant::ALL.into_iter().find(|v| v.type_name() == name)
    }

    /// The shape of the variant.
    pub fn shape(self) -> Shape {
        match self {
            Variant::ChildrenOnly => Shape::CHILDREN,
            Variant::Element => Shape::PROPERTIES | Shape::CHILDREN,
            Variant::Empty => Shape::PROPERTIES,
            Variant::SelfClosed => Shape::PROPERTIES,
            Variant::Standalone => Shape::PROPERTIES,
            Variant::String => Shape::PROPERTIES | Shape::TEXT,
            Variant::Sequence => Shape::CHILDREN,
        }
    }
}
