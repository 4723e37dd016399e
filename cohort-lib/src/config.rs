//! Table definition loaded from JSON.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::error::DefinitionError;
use crate::model::{Column, Row};

/// Static table configuration plus its initial rows.
///
/// # Example
///
/// ```
/// use cohort_lib::TableDefinition;
///
/// let definition = TableDefinition::from_json_str(r#"{
///     "columns": [
///         { "label": "No.", "key": "id", "sortable": true },
///         { "label": "Course", "key": "course" }
///     ],
///     "selectable": true,
///     "rows": [ { "id": 1, "course": "Frontend" } ]
/// }"#).unwrap();
///
/// assert_eq!(definition.columns.len(), 2);
/// assert!(definition.sort_keys.is_empty());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableDefinition {
    /// Columns in display order.
    pub columns: Vec<Column>,
    /// Show the checkbox column.
    #[serde(default)]
    pub selectable: bool,
    /// Sortable field keys. Empty means "use the column flags".
    #[serde(default)]
    pub sort_keys: Vec<String>,
    /// Initial rows.
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl TableDefinition {
    /// Parse a definition from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, DefinitionError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a definition from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, DefinitionError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load a definition from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DefinitionError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }
}
