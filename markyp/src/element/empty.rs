//! Elements with properties but no children.

use std::borrow::Cow;

use super::{HasProperties, Markup, Variant};
use crate::constants::CLASS_PROPERTY;
use crate::formatter::format_properties;
use crate::property::{Properties, PropertyValue};

macro_rules! childless_element {
    ($(#[$doc:meta])* $ty:ident, $variant:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $ty {
            name: Cow<'static, str>,
            properties: Properties,
        }

        impl $ty {
            /// Creates an element without properties.
            pub fn new() -> Self {
                Self::from_properties(Properties::new())
            }

            /// Creates an element with the given properties.
            pub fn from_properties(properties: Properties) -> Self {
                $ty {
                    name: Cow::Borrowed($variant.type_name()),
                    properties,
                }
            }

            /// Overrides the element name.
            pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
                self.name = name.into();
                self
            }

            /// Sets a property.
            pub fn with_property(
                mut self,
                key: impl Into<String>,
                value: impl Into<PropertyValue>,
            ) -> Self {
                self.properties.insert(key.into(), value.into());
                self
            }

            /// Sets several properties.
            pub fn with_properties(mut self, properties: Properties) -> Self {
                self.properties.extend(properties);
                self
            }

            /// Sets the `class` property, overwriting any previous value.
            pub fn class(self, class: impl Into<String>) -> Self {
                self.with_property(CLASS_PROPERTY, class.into())
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self::new()
            }
        }

        impl HasProperties for $ty {
            fn properties(&self) -> &Properties {
                &self.properties
            }

            fn properties_mut(&mut self) -> &mut Properties {
                &mut self.properties
            }
        }
    };
}

childless_element!(
    /// Element with properties only, closed immediately: `<name ...></name>`.
    EmptyElement,
    Variant::Empty
);

childless_element!(
    /// Self-closed element: `<name .../>`.
    SelfClosedElement,
    Variant::SelfClosed
);

childless_element!(
    /// Element with an opening tag and no closing tag: `<name ...>`.
    StandaloneElement,
    Variant::Standalone
);

impl Markup for EmptyElement {
    fn element_name(&self) -> &str {
        &self.name
    }

    fn markup(&self) -> String {
        format!(
            "<{name} {}></{name}>",
            format_properties(&self.properties),
            name = self.name
        )
    }

    fn property_map(&self) -> Option<&Properties> {
        Some(&self.properties)
    }
}

impl Markup for SelfClosedElement {
    fn element_name(&self) -> &str {
        &self.name
    }

    fn markup(&self) -> String {
        format!("<{} {}/>", self.name, format_properties(&self.properties))
    }

    fn property_map(&self) -> Option<&Properties> {
        Some(&self.properties)
    }
}

impl Markup for StandaloneElement {
    fn element_name(&self) -> &str {
        &self.name
    }

    fn markup(&self) -> String {
        format!("<{} {}>", self.name, format_properties(&self.properties))
    }

    fn property_map(&self) -> Option<&Properties> {
        Some(&self.properties)
    }
}
