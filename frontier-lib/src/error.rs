//! Error types

use std::path::PathBuf;

/// Errors that can occur while loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not valid JSON or has the wrong shape.
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two categories share an id.
    #[error("Duplicate category: {id}")]
    DuplicateCategory { id: String },

    /// Two rows resolve to the same key.
    #[error("Duplicate row key: {key}")]
    DuplicateRow { key: String },
}
