//! Value enum for scalar cell values

use std::borrow::Cow;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// A scalar cell value: text or number.
///
/// Integers and floats are both treated as numeric when rows are compared.
///
/// # Example
///
/// ```
/// use cohort_lib::Value;
///
/// let name = Value::from("Frontend 14");
/// let students = Value::from(32);
/// let rate = Value::from(0.85);
/// assert!(students.is_numeric());
/// assert!(!name.is_numeric());
/// assert!(rate.is_numeric());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Text value.
    Text(String),
}

impl Value {
    /// Returns `true` for `Int` and `Float`.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// Returns the numeric value as `f64`, if numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            Value::Text(_) => None,
        }
    }

    /// Returns the text form used for string comparison and cell display.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Value::Text(s) => Cow::Borrowed(s),
            other => Cow::Owned(other.to_string()),
        }
    }

    /// Converts a JSON scalar into a value.
    ///
    /// Returns `None` for null, booleans, arrays and objects.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(s) => Some(Value::Text(s.clone())),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Value::Int)
                .or_else(|| n.as_f64().map(Value::Float)),
            _ => None,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Text(s) => f.write_str(s),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Value::from(14).to_string(), "14");
        assert_eq!(Value::from(2.5).to_string(), "2.5");
        assert_eq!(Value::from("기수").to_string(), "기수");
    }

    #[test]
    fn test_from_json_scalars_only() {
        assert_eq!(Value::from_json(&serde_json::json!(3)), Some(Value::Int(3)));
        assert_eq!(
            Value::from_json(&serde_json::json!(1.25)),
            Some(Value::Float(1.25))
        );
        assert_eq!(
            Value::from_json(&serde_json::json!("x")),
            Some(Value::Text("x".into()))
        );
        assert_eq!(Value::from_json(&serde_json::json!(null)), None);
        assert_eq!(Value::from_json(&serde_json::json!(true)), None);
        assert_eq!(Value::from_json(&serde_json::json!([1])), None);
    }
}
