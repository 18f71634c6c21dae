//! Element property values and property maps.

use std::fmt;

use indexmap::IndexMap;

use crate::constants::{CLASS_OVERRIDE_PROPERTY, CLASS_PROPERTY};

/// Insertion-ordered property name to value mapping.
///
/// Equality ignores order, rendering follows insertion order.
pub type Properties = IndexMap<String, PropertyValue>;

/// The value of a single element property.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// A string value, rendered as-is inside double quotes.
    Str(String),
    /// An integer value.
    Int(i64),
    /// A floating point value.
    Float(f64),
    /// A boolean value, rendered as `true` or `false`.
    Bool(bool),
    /// No value: the property is rendered as a bare flag attribute such as
    /// `disabled`.
    Flag,
}

impl PropertyValue {
    /// Returns true if this value is the flag marker.
    pub fn is_flag(&self) -> bool {
        matches!(self, PropertyValue::Flag)
    }

    /// Returns the string, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Str(s) => f.write_str(s),
            PropertyValue::Int(i) => write!(f, "{}", i),
            PropertyValue::Float(v) => write_float(f, *v),
            PropertyValue::Bool(true) => f.write_str("true"),
            PropertyValue::Bool(false) => f.write_str("false"),
            PropertyValue::Flag => Ok(()),
        }
    }
}

/// Writes a float the way Python's `str(float)` does.
fn write_float(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    if v.is_nan() {
        return f.write_str("nan");
    }
    if v.is_infinite() {
        return f.write_str(if v < 0.0 { "-inf" } else { "inf" });
    }

    // `{:e}` gives the shortest round-trip mantissa, e.g. "1.5e16".
    let scientific = format!("{:e}", v);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    if v != 0.0 && !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return write!(f, "{}e{}{:02}", mantissa, sign, exponent.abs());
    }

    let s = v.to_string();
    if s.contains('.') {
        f.write_str(&s)
    } else {
        write!(f, "{}.0", s)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Str(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Str(value)
    }
}

impl From<&String> for PropertyValue {
    fn from(value: &String) -> Self {
        PropertyValue::Str(value.clone())
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Int(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Int(value.into())
    }
}

impl From<u32> for PropertyValue {
    fn from(value: u32) -> Self {
        PropertyValue::Int(value.into())
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Float(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl<T: Into<PropertyValue>> From<Option<T>> for PropertyValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(PropertyValue::Flag, Into::into)
    }
}

/// Builds a [`Properties`] map from name-value pairs, keeping their order.
///
/// Later pairs overwrite earlier ones with the same name.
pub fn properties<I, K, V>(pairs: I) -> Properties
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<PropertyValue>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Moves a `class_` entry into the `class` property.
///
/// An existing `class` value is overwritten in place. A flag `class_` is
/// removed without touching `class`.
pub fn fold_class_override(props: &mut Properties) {
    if let Some(value) = props.shift_remove(CLASS_OVERRIDE_PROPERTY) {
        if !value.is_flag() {
            props.insert(CLASS_PROPERTY.to_string(), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_values() {
        assert_eq!(PropertyValue::from("foo").to_string(), "foo");
        assert_eq!(PropertyValue::from(19990526).to_string(), "19990526");
        assert_eq!(PropertyValue::from(2008.0521).to_string(), "2008.0521");
        assert_eq!(PropertyValue::from(2.0).to_string(), "2.0");
        assert_eq!(PropertyValue::from(-0.0).to_string(), "-0.0");
        assert_eq!(PropertyValue::from(true).to_string(), "true");
        assert_eq!(PropertyValue::from(false).to_string(), "false");
        assert_eq!(PropertyValue::Flag.to_string(), "");
    }

    #[test]
    fn test_display_float_forms() {
        let cases = [
            (1e20, "1e+20"),
            (1.5e16, "1.5e+16"),
            (1e16, "1e+16"),
            (1e15, "1000000000000000.0"),
            (123456.789, "123456.789"),
            (0.0001, "0.0001"),
            (0.00001, "1e-05"),
            (-2.5e-7, "-2.5e-07"),
            (1e300, "1e+300"),
            (f64::NAN, "nan"),
            (f64::INFINITY, "inf"),
            (f64::NEG_INFINITY, "-inf"),
        ];
        for (value, expected) in cases {
            assert_eq!(PropertyValue::from(value).to_string(), expected, "{:?}", value);
        }
    }

    #[test]
    fn test_option_maps_to_flag() {
        assert_eq!(PropertyValue::from(None::<&str>), PropertyValue::Flag);
        assert_eq!(
            PropertyValue::from(Some("x")),
            PropertyValue::Str("x".to_string())
        );
    }

    #[test]
    fn test_properties_last_write_wins() {
        let props = properties([("a", "1"), ("b", "2"), ("a", "3")]);
        assert_eq!(props.len(), 2);
        assert_eq!(props["a"], PropertyValue::from("3"));
        assert_eq!(props.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_fold_class_override() {
        let mut props = properties([("class", "no-test"), ("id", "x"), ("class_", "test")]);
        fold_class_override(&mut props);
        assert_eq!(props.get("class"), Some(&PropertyValue::from("test")));
        assert!(!props.contains_key("class_"));
        // Position of the existing key is kept.
        assert_eq!(props.keys().collect::<Vec<_>>(), vec!["class", "id"]);
    }

    #[test]
    fn test_fold_flag_class_override() {
        let mut props = properties([("class", PropertyValue::from("keep"))]);
        props.insert("class_".to_string(), PropertyValue::Flag);
        fold_class_override(&mut props);
        assert_eq!(props.get("class"), Some(&PropertyValue::from("keep")));
        assert_eq!(props.len(), 1);
    }
}
