//! Selection state for table rows.
//!
//! Selection uses stringified row IDs, so it stays stable when rows are
//! reordered.

use std::collections::HashSet;

use crate::collate::natural_cmp;

/// ID-based multi-selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: HashSet<String>,
}

impl Selection {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all selected IDs, in natural order.
    pub fn selected(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.selected.iter().cloned().collect();
        ids.sort_by(|a, b| natural_cmp(a, b));
        ids
    }

    /// Check if an ID is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Get the number of selected IDs.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Clear all selection.
    /// Returns the IDs that were deselected.
    pub fn clear(&mut self) -> Vec<String> {
        let mut removed: Vec<_> = self.selected.drain().collect();
        removed.sort_by(|a, b| natural_cmp(a, b));
        removed
    }

    /// Add or remove a single ID.
    /// Returns `true` if the selection changed.
    pub fn set(&mut self, id: &str, checked: bool) -> bool {
        if checked {
            self.selected.insert(id.to_string())
        } else {
            self.selected.remove(id)
        }
    }

    /// Add or remove every ID in `ids`.
    /// Returns the IDs whose state changed.
    pub fn set_all<I, S>(&mut self, ids: I, checked: bool) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ids.into_iter()
            .filter(|id| self.set(id.as_ref(), checked))
            .map(|id| id.as_ref().to_string())
            .collect()
    }
}
