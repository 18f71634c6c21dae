//! Constants used throughout markyp.
//!
//! Reserved property keys and the entities the parser substitutes.

/// The literal `class` property.
pub const CLASS_PROPERTY: &str = "class";

/// Property key that factories fold into [`CLASS_PROPERTY`], overwriting it.
pub const CLASS_OVERRIDE_PROPERTY: &str = "class_";

/// Property the any-tag fallback receives its tag name through.
pub const ELEMENT_TAG_PROPERTY: &str = "element_tag";

/// Replacement for `"` in parsed attribute values.
pub const QUOTE_ENTITY: &str = "&quot;";
