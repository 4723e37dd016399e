//! Table controller - sorting, pagination and multi-row selection.
//!
//! The controller owns three state slices over an immutable row set:
//! - Sort state (active field key and direction)
//! - Pagination state (1-indexed page, fixed page size)
//! - Selection state (stringified row identifiers)
//!
//! Every operation mutates through `&mut self` and returns an optional
//! [`TableEvent`]. The read-only [`TableView`] is derived on demand.
//!
//! # Example
//!
//! ```
//! use cohort_lib::{Column, Direction, Row, TableController};
//!
//! let columns = vec![
//!     Column::new("No.", "id"),
//!     Column::new("Term", "term").sortable(),
//! ];
//! let rows = (1..=25).map(|i| Row::new(i).set("term", i % 4)).collect();
//!
//! let mut table = TableController::new(columns, rows).selectable(true);
//! table.sort_by("term");
//! table.next_page();
//! table.toggle_all_on_page(true);
//!
//! let view = table.view();
//! assert_eq!(view.sort_direction, Direction::Desc);
//! assert_eq!(view.current_page, 2);
//! assert!(view.all_on_page_selected);
//! ```

mod controller;
mod event;
mod pagination;
mod selection;
mod sort;
mod view;

pub use controller::TableController;
pub use event::TableEvent;
pub use pagination::Pagination;
pub use selection::Selection;
pub use sort::{Direction, SortState};
pub use view::{SortIndicator, TableView};

/// Rows shown per page.
pub const PAGE_SIZE: usize = 10;
