//! Host property values
//!
//! Host UI bridges hand properties over as loosely typed primitives. A
//! [`PropValue`] carries one such value until the style layer converts it
//! into a typed field.
//!
//! # Example
//!
//! ```
//! use hexview_core::PropValue;
//!
//! let width = PropValue::from(2.5);
//! assert_eq!(width.as_f64(), Some(2.5));
//!
//! let color = PropValue::from("4294901760");
//! assert_eq!(color.as_f64(), Some(4294901760.0));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value type for host-to-Rust property transport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum PropValue {
    /// Missing value (`null`/`nil` on the host side)
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Any number; hosts do not distinguish integers from floats
    Number(f64),
    /// UTF-8 string
    String(String),
}

impl PropValue {
    pub fn is_null(&self) -> bool {
        matches!(self, PropValue::Null)
    }

    /// Extract as bool
    ///
    /// Numbers are truthy when non-zero, and the strings `"true"`/`"false"`
    /// and `"1"`/`"0"` are accepted.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(v) => Some(*v),
            PropValue::Number(v) => Some(*v != 0.0),
            PropValue::String(s) => match s.trim() {
                "true" | "1" => Some(true),
                "false" | "0" => Some(false),
                _ => None,
            },
            PropValue::Null => None,
        }
    }

    /// Extract as f64, parsing numeric strings
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PropValue::Number(v) => Some(*v),
            PropValue::String(s) => s.trim().parse().ok(),
            PropValue::Bool(_) | PropValue::Null => None,
        }
    }

}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Null => write!(f, "null"),
            PropValue::Bool(v) => write!(f, "{}", v),
            PropValue::Number(v) => write!(f, "{}", v),
            PropValue::String(v) => write!(f, "{:?}", v),
        }
    }
}

impl From<bool> for PropValue {
    fn from(v: bool) -> Self {
        PropValue::Bool(v)
    }
}

impl From<f64> for PropValue {
    fn from(v: f64) -> Self {
        PropValue::Number(v)
    }
}

impl From<f32> for PropValue {
    fn from(v: f32) -> Self {
        PropValue::Number(v as f64)
    }
}

impl From<i32> for PropValue {
    fn from(v: i32) -> Self {
        PropValue::Number(v as f64)
    }
}

impl From<i64> for PropValue {
    fn from(v: i64) -> Self {
        PropValue::Number(v as f64)
    }
}

impl From<u32> for PropValue {
    fn from(v: u32) -> Self {
        PropValue::Number(v as f64)
    }
}

impl From<String> for PropValue {
    fn from(v: String) -> Self {
        PropValue::String(v)
    }
}

impl From<&str> for PropValue {
    fn from(v: &str) -> Self {
        PropValue::String(v.to_string())
    }
}

impl<T: Into<PropValue>> From<Option<T>> for PropValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(PropValue::Null)
    }
}

impl From<serde_json::Value> for PropValue {
    /// Arrays and objects have no property meaning and become `Null`
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => PropValue::Null,
            serde_json::Value::Bool(v) => PropValue::Bool(v),
            serde_json::Value::Number(n) => n.as_f64().map_or(PropValue::Null, PropValue::Number),
            serde_json::Value::String(s) => PropValue::String(s),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                tracing::debug!("dropping structured prop value");
                PropValue::Null
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_strings_parse() {
        assert_eq!(PropValue::from(" 12.5 ").as_f64(), Some(12.5));
        assert_eq!(PropValue::from("abc").as_f64(), None);
        assert_eq!(PropValue::Null.as_f64(), None);
    }

    #[test]
    fn test_bool_coercions() {
        assert_eq!(PropValue::from(1).as_bool(), Some(true));
        assert_eq!(PropValue::from(0.0).as_bool(), Some(false));
        assert_eq!(PropValue::from("true").as_bool(), Some(true));
        assert_eq!(PropValue::from("yes").as_bool(), None);
    }

    #[test]
    fn test_from_json() {
        assert_eq!(PropValue::from(json!(null)), PropValue::Null);
        assert_eq!(PropValue::from(json!(3)), PropValue::Number(3.0));
        assert_eq!(PropValue::from(json!("x")), PropValue::from("x"));
        assert_eq!(PropValue::from(json!([1, 2])), PropValue::Null);
    }

    #[test]
    fn test_option_maps_none_to_null() {
        assert!(PropValue::from(None::<f64>).is_null());
        assert_eq!(PropValue::from(Some(true)), PropValue::Bool(true));
    }

    #[test]
    fn test_untagged_deserialize() {
        let values: Vec<PropValue> = serde_json::from_str(r#"[null, true, 4, "s"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                PropValue::Null,
                PropValue::Bool(true),
                PropValue::Number(4.0),
                PropValue::String("s".into()),
            ]
        );
    }
}
