//! Error types

mod definition;
mod enrollment;

pub use definition::*;
pub use enrollment::*;
