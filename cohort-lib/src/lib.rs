//! Cohort admin table library
//!
//! State layer for a paginated, sortable, multi-select data table, plus the
//! enrollment form that sits beside it in the admin UI.

pub mod collate;
pub mod config;
pub mod enrollment;
pub mod error;
pub mod model;
pub mod render;
pub mod table;

pub use config::TableDefinition;
pub use model::{Column, Row, RowId, Value};
pub use table::{Direction, PAGE_SIZE, SortIndicator, TableController, TableEvent, TableView};
