//! Error types for the csvprof library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for profiling operations.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Error reading, creating or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A value the classifier accepted as numeric failed to parse during aggregation.
    ///
    /// This means the classifier and aggregator disagree on the missing-value
    /// filter or the number grammar. It is a bug, not a property of the data.
    #[error("data inconsistency: value {value:?} in a number column does not parse as a number")]
    DataInconsistency { value: String },

    /// An error raised while profiling a specific column.
    #[error("column '{column}': {source}")]
    Column {
        column: String,
        #[source]
        source: Box<ProfileError>,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ProfileError {
    /// Attach the name of the column being profiled.
    pub fn in_column(self, column: impl Into<String>) -> Self {
        ProfileError::Column {
            column: column.into(),
            source: Box::new(self),
        }
    }

    /// Returns true if this error (or the error it wraps) is a data inconsistency.
    pub fn is_data_inconsistency(&self) -> bool {
        match self {
            ProfileError::DataInconsistency { .. } => true,
            ProfileError::Column { source, .. } => source.is_data_inconsistency(),
            _ => false,
        }
    }
}

/// Result type alias for profiling operations.
pub type Result<T> = std::result::Result<T, ProfileError>;
