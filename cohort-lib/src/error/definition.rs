//! DefinitionError for loading table definitions

/// Error type for loading a [`TableDefinition`](crate::TableDefinition).
#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
    /// The definition file could not be read.
    #[error("failed to read table definition: {0}")]
    Io(#[from] std::io::Error),

    /// The definition is not valid JSON or does not match the expected shape.
    #[error("invalid table definition: {0}")]
    Json(#[from] serde_json::Error),
}
