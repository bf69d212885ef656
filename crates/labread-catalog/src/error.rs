use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate term '{0}' (names are compared case-insensitively)")]
    DuplicateTerm(String),

    #[error("duplicate range entry for '{0}'")]
    DuplicateRange(String),

    #[error("term name must not be blank")]
    BlankTerm,

    #[error("invalid typical range for '{term}': [{low}, {high}]")]
    InvalidRange { term: String, low: f64, high: f64 },

    #[error("table parsing failed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
