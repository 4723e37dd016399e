//! Table row with a mandatory identifier

use std::collections::HashMap;
use std::fmt;

use super::Value;

/// Field key that holds the row identifier.
pub const ID_FIELD: &str = "id";

/// Unique, stable row identifier.
///
/// Selection tracks rows by the [`Display`](fmt::Display) form of the
/// identifier, so `Number(7)` and `Text("7")` refer to the same entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowId {
    /// Numeric identifier.
    Number(i64),
    /// String identifier.
    Text(String),
}

impl RowId {
    /// Returns the identifier as a cell value.
    pub fn to_value(&self) -> Value {
        match self {
            RowId::Number(n) => Value::Int(*n),
            RowId::Text(s) => Value::Text(s.clone()),
        }
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowId::Number(n) => write!(f, "{}", n),
            RowId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i32> for RowId {
    fn from(v: i32) -> Self {
        RowId::Number(v.into())
    }
}

impl From<i64> for RowId {
    fn from(v: i64) -> Self {
        RowId::Number(v)
    }
}

impl From<String> for RowId {
    fn from(v: String) -> Self {
        RowId::Text(v)
    }
}

impl From<&str> for RowId {
    fn from(v: &str) -> Self {
        RowId::Text(v.to_string())
    }
}

impl From<Value> for RowId {
    fn from(v: Value) -> Self {
        match v {
            Value::Int(n) => RowId::Number(n),
            Value::Float(f) => RowId::Text(f.to_string()),
            Value::Text(s) => RowId::Text(s),
        }
    }
}

/// A single table row.
///
/// Rows hold field values as a `HashMap<String, Value>`. The identifier is
/// always present and is mirrored under [`ID_FIELD`] so it can be shown and
/// sorted like any other column.
///
/// # Example
///
/// ```
/// use cohort_lib::{Row, Value};
///
/// let row = Row::new(3)
///     .set("course", "Frontend")
///     .set("term", 14);
///
/// assert_eq!(row.key(), "3");
/// assert_eq!(row.get("term"), Some(&Value::Int(14)));
/// assert_eq!(row.get("id"), Some(&Value::Int(3)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub(crate) id: RowId,
    pub(crate) fields: HashMap<String, Value>,
}

impl Row {
    /// Creates a row with the given identifier and no other fields.
    pub fn new(id: impl Into<RowId>) -> Self {
        let id = id.into();
        let mut fields = HashMap::new();
        fields.insert(ID_FIELD.to_string(), id.to_value());
        Self { id, fields }
    }

    /// Returns the row identifier.
    pub fn id(&self) -> &RowId {
        &self.id
    }

    /// Returns the stringified identifier used as the selection key.
    pub fn key(&self) -> String {
        self.id.to_string()
    }

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `true` if the row has a value for the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields, including the identifier.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    /// Sets a field value (builder pattern).
    ///
    /// Setting [`ID_FIELD`] replaces the identifier.
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Inserts a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        let field = field.into();
        let value = value.into();
        if field == ID_FIELD {
            self.id = RowId::from(value);
            self.fields.insert(field, self.id.to_value());
        } else {
            self.fields.insert(field, value);
        }
    }
}
