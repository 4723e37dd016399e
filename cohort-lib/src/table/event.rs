//! Change notifications emitted by table operations.

use super::Direction;

/// What a table operation changed.
///
/// Callers that mirror sort or selection in their own state can merge these
/// instead of diffing views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// Rows were re-sorted. `deselected` lists IDs dropped from the selection.
    Sorted {
        key: String,
        direction: Direction,
        deselected: Vec<String>,
    },
    /// A page navigation request ran. `deselected` lists IDs dropped from the
    /// selection.
    PageChanged {
        page: usize,
        deselected: Vec<String>,
    },
    /// Row checkboxes changed.
    SelectionChanged {
        added: Vec<String>,
        removed: Vec<String>,
    },
    /// The row collection was replaced and all state re-seeded.
    RowsReplaced { count: usize },
}
