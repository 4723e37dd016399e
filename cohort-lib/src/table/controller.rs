//! Table controller state and operations.

use std::fmt;

use crate::config::TableDefinition;
use crate::model::{Column, Row, RowId};

use super::event::TableEvent;
use super::pagination::Pagination;
use super::selection::Selection;
use super::sort::{self, SortState};
use super::view::TableView;

/// Sort, pagination and selection state over a row collection.
///
/// Rows are sorted by identifier (ascending, natural order) on construction
/// and on every [`set_rows`](Self::set_rows). No operation panics or fails:
/// page requests clamp, unknown sort keys are ignored.
#[derive(Clone)]
pub struct TableController {
    columns: Vec<Column>,
    sort_keys: Vec<String>,
    selectable: bool,
    rows: Vec<Row>,
    sort: SortState,
    pagination: Pagination,
    selection: Selection,
}

impl fmt::Debug for TableController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableController")
            .field("columns", &self.columns.len())
            .field("rows", &self.rows.len())
            .field("sort", &self.sort)
            .field("page", &self.pagination.current())
            .field("selected", &self.selection.len())
            .finish()
    }
}

impl TableController {
    /// Create a controller over `rows`.
    ///
    /// Sortable keys default to the columns flagged
    /// [`sortable`](Column::sortable); use [`sort_keys`](Self::sort_keys) to
    /// supply them independently.
    pub fn new(columns: Vec<Column>, rows: Vec<Row>) -> Self {
        let mut table = Self {
            columns,
            sort_keys: Vec::new(),
            selectable: false,
            rows,
            sort: SortState::default(),
            pagination: Pagination::default(),
            selection: Selection::new(),
        };
        table.seed();
        table
    }

    /// Create a controller from a loaded table definition.
    pub fn from_definition(definition: TableDefinition) -> Self {
        Self::new(definition.columns, definition.rows)
            .selectable(definition.selectable)
            .sort_keys(definition.sort_keys)
    }

    /// Show or hide the checkbox column.
    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Set the sortable field keys.
    ///
    /// A key that names no column stays inert: [`sort_by`](Self::sort_by)
    /// ignores it and no header offers it. An empty list falls back to the
    /// column flags.
    pub fn sort_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sort_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Get column definitions.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Get all rows in their current sorted order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Get the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether the checkbox column is shown.
    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    /// Get the current sort state.
    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    /// Get the current page (1-indexed).
    pub fn current_page(&self) -> usize {
        self.pagination.current()
    }

    /// Get the number of pages (minimum 1).
    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages(self.rows.len())
    }

    /// Get the selection state.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Check if a row ID is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.is_selected(id)
    }

    /// Check whether `key` accepts sort requests.
    ///
    /// The key must name a column and be listed as sortable.
    pub fn is_sortable(&self, key: &str) -> bool {
        let Some(column) = self.columns.iter().find(|c| c.key == key) else {
            return false;
        };
        if self.sort_keys.is_empty() {
            column.sortable
        } else {
            self.sort_keys.iter().any(|k| k == key)
        }
    }

    /// Rows on the current page.
    pub fn page_rows(&self) -> &[Row] {
        &self.rows[self.pagination.range(self.rows.len())]
    }

    /// Derive the read-only view for rendering.
    pub fn view(&self) -> TableView<'_> {
        TableView::new(self)
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Replace the row collection.
    ///
    /// Re-sorts by identifier ascending, returns to page 1 and clears the
    /// selection, whatever the prior state.
    pub fn set_rows(&mut self, rows: Vec<Row>) -> TableEvent {
        self.rows = rows;
        self.seed();
        log::debug!("[table] rows replaced ({} rows)", self.rows.len());
        TableEvent::RowsReplaced {
            count: self.rows.len(),
        }
    }

    /// Sort by a field key.
    ///
    /// Repeating the active key flips the direction; a different key starts
    /// descending. Returns `None` without touching any state if `key` is not
    /// sortable. The current page is kept; the selection is cleared.
    pub fn sort_by(&mut self, key: &str) -> Option<TableEvent> {
        if !self.is_sortable(key) {
            log::trace!("[table] ignoring sort on non-sortable key {:?}", key);
            return None;
        }

        let direction = self.sort.next_direction(key);
        let rows = std::mem::take(&mut self.rows);
        self.rows = sort::stable_sort_by(rows, &mut |a: &Row, b: &Row| {
            sort::compare_field(a, b, key, direction)
        });
        self.sort = SortState {
            key: Some(key.to_string()),
            direction,
        };
        let deselected = self.selection.clear();

        log::debug!("[table] sorted by {} {:?}", key, direction);
        Some(TableEvent::Sorted {
            key: key.to_string(),
            direction,
            deselected,
        })
    }

    /// Move by `delta` pages, clamped to the valid range.
    ///
    /// The selection is cleared even when the page does not change.
    pub fn go_to_page(&mut self, delta: isize) -> TableEvent {
        let changed = self.pagination.step(delta, self.rows.len());
        let deselected = self.selection.clear();
        let page = self.pagination.current();

        if changed {
            log::debug!("[table] page {} of {}", page, self.total_pages());
        } else {
            log::trace!("[table] page request {:+} clamped at {}", delta, page);
        }
        TableEvent::PageChanged { page, deselected }
    }

    /// Go to the previous page.
    pub fn prev_page(&mut self) -> TableEvent {
        self.go_to_page(-1)
    }

    /// Go to the next page.
    pub fn next_page(&mut self) -> TableEvent {
        self.go_to_page(1)
    }

    /// Check or uncheck every row on the current page.
    ///
    /// Rows on other pages keep their state.
    pub fn toggle_all_on_page(&mut self, checked: bool) -> TableEvent {
        let range = self.pagination.range(self.rows.len());
        let changed = self
            .selection
            .set_all(self.rows[range].iter().map(Row::key), checked);

        log::debug!(
            "[table] {} {} rows on page {}",
            if checked { "checked" } else { "unchecked" },
            changed.len(),
            self.pagination.current()
        );
        selection_event(changed, checked)
    }

    /// Check or uncheck one row by identifier.
    pub fn toggle_row(&mut self, id: &RowId, checked: bool) -> TableEvent {
        self.toggle_key(&id.to_string(), checked)
    }

    /// Check or uncheck one row by stringified identifier.
    pub fn toggle_key(&mut self, key: &str, checked: bool) -> TableEvent {
        let changed = if self.selection.set(key, checked) {
            vec![key.to_string()]
        } else {
            Vec::new()
        };
        log::trace!("[table] row {} checked={}", key, checked);
        selection_event(changed, checked)
    }

    // -------------------------------------------------------------------------
    // Internal
    // -------------------------------------------------------------------------

    fn seed(&mut self) {
        self.rows.sort_by(sort::compare_ids);
        self.sort = SortState::default();
        self.pagination.reset();
        self.selection.clear();
    }
}

fn selection_event(changed: Vec<String>, checked: bool) -> TableEvent {
    if checked {
        TableEvent::SelectionChanged {
            added: changed,
            removed: Vec::new(),
        }
    } else {
        TableEvent::SelectionChanged {
            added: Vec::new(),
            removed: changed,
        }
    }
}

