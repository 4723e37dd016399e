//! Custom serialization for Row.
//!
//! Rows read from and write to flat JSON objects. The `"id"` key is required
//! and must be a number or a string; it converts the same way as
//! [`RowId::from`] on a [`Value`], so a fractional id becomes its text form.
//! Other keys keep only scalar values: null, booleans, arrays and objects are
//! dropped and treated as absent.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::Error as _;
use serde::de::MapAccess;
use serde::de::Visitor;
use serde::ser::SerializeMap;

use super::ID_FIELD;
use super::Row;
use super::RowId;
use super::Value;

// =============================================================================
// Serialization
// =============================================================================

impl Serialize for Row {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

// =============================================================================
// Deserialization
// =============================================================================

impl<'de> Deserialize<'de> for Row {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RowVisitor)
    }
}

struct RowVisitor;

impl<'de> Visitor<'de> for RowVisitor {
    type Value = Row;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map representing a table row with an \"id\" key")
    }

    fn visit_map<M>(self, mut map: M) -> Result<Row, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut id: Option<RowId> = None;
        let mut fields: HashMap<String, Value> = HashMap::new();

        while let Some(key) = map.next_key::<String>()? {
            let raw: serde_json::Value = map.next_value()?;

            if key == ID_FIELD {
                let value = Value::from_json(&raw)
                    .ok_or_else(|| M::Error::custom("row \"id\" must be a number or string"))?;
                id = Some(RowId::from(value));
                continue;
            }

            if let Some(value) = Value::from_json(&raw) {
                fields.insert(key, value);
            }
        }

        let id = id.ok_or_else(|| M::Error::missing_field(ID_FIELD))?;
        fields.insert(ID_FIELD.to_string(), id.to_value());
        Ok(Row { id, fields })
    }
}
