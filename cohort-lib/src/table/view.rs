//! Derived, read-only table view.

use crate::model::{Column, Row};

use super::controller::TableController;
use super::sort::Direction;

/// Header sort control state for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    /// Column is the active sort, ascending.
    Ascending,
    /// Column is the active sort, descending.
    Descending,
    /// Column is sortable but not active.
    Neutral,
}

impl SortIndicator {
    /// Glyph shown next to the header label.
    ///
    /// Inactive columns show the ascending arrow.
    pub fn glyph(self) -> &'static str {
        match self {
            SortIndicator::Ascending | SortIndicator::Neutral => "▲",
            SortIndicator::Descending => "▼",
        }
    }
}

/// Everything a renderer needs for one frame of the table.
///
/// Borrowed from a [`TableController`] via
/// [`view`](TableController::view); it cannot outlive or modify it.
#[derive(Debug, Clone)]
pub struct TableView<'a> {
    /// Column definitions, in display order.
    pub columns: &'a [Column],
    /// Whether the checkbox column is shown.
    pub selectable: bool,
    /// Rows on the current page, in sorted order.
    pub visible_rows: &'a [Row],
    /// Blank rows needed to pad the page to full height.
    pub filler_rows: usize,
    /// Every visible row is checked (false for an empty page).
    pub all_on_page_selected: bool,
    /// Current page (1-indexed).
    pub current_page: usize,
    /// Number of pages (minimum 1).
    pub total_pages: usize,
    /// Active sort key.
    pub sort_key: Option<&'a str>,
    /// Active sort direction.
    pub sort_direction: Direction,
    table: &'a TableController,
}

impl<'a> TableView<'a> {
    pub(super) fn new(table: &'a TableController) -> Self {
        let visible_rows = table.page_rows();
        let page_size = super::PAGE_SIZE;
        let all_on_page_selected = !visible_rows.is_empty()
            && visible_rows.iter().all(|row| table.is_selected(&row.key()));

        Self {
            columns: table.columns(),
            selectable: table.is_selectable(),
            visible_rows,
            filler_rows: page_size.saturating_sub(visible_rows.len()),
            all_on_page_selected,
            current_page: table.current_page(),
            total_pages: table.total_pages(),
            sort_key: table.sort().key.as_deref(),
            sort_direction: table.sort().direction,
            table,
        }
    }

    /// Check if a row is checked.
    pub fn is_selected(&self, row: &Row) -> bool {
        self.table.is_selected(&row.key())
    }

    /// All checked IDs, in natural order.
    pub fn selected_ids(&self) -> Vec<String> {
        self.table.selection().selected()
    }

    /// Sort control state for a column, or `None` if it offers no sort.
    pub fn indicator(&self, column: &Column) -> Option<SortIndicator> {
        if !self.table.is_sortable(&column.key) {
            return None;
        }
        Some(match (self.sort_key, self.sort_direction) {
            (Some(key), Direction::Asc) if key == column.key => SortIndicator::Ascending,
            (Some(key), Direction::Desc) if key == column.key => SortIndicator::Descending,
            _ => SortIndicator::Neutral,
        })
    }

    /// Whether the previous-page control is enabled.
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// Whether the next-page control is enabled.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}
