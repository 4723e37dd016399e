//! Column descriptors for table display.

use serde::Deserialize;
use serde::Serialize;

/// Column configuration.
///
/// Columns define the header label, the row field each cell reads, and
/// whether the column offers a sort control. Column order is header and cell
/// order.
///
/// # Examples
///
/// ```
/// use cohort_lib::Column;
///
/// let columns = vec![
///     Column::new("No.", "id").sortable(),
///     Column::new("Course", "course"),
///     Column::new("Term", "term").sortable(),
/// ];
/// assert!(columns[0].sortable);
/// assert!(!columns[1].sortable);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Header text shown to the user.
    pub label: String,
    /// Row field this column reads.
    pub key: String,
    /// Whether this column is sortable.
    #[serde(default)]
    pub sortable: bool,
}

impl Column {
    /// Create a new, non-sortable column.
    pub fn new(label: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            key: key.into(),
            sortable: false,
        }
    }

    /// Make the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }
}
