//! Table data model: scalar values, rows and column descriptors.

mod column;
mod row;
mod row_serde;
mod value;

pub use column::Column;
pub use row::{ID_FIELD, Row, RowId};
pub use value::Value;
