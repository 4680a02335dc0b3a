// src/error.rs

//! Error types shared by the stores and the add-recipe workflow

use std::path::PathBuf;
use thiserror::Error;

/// Recoverable store errors, returned to the caller to decide presentation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The recipe identifier is not a non-negative integer
    #[error("Recipe ID format invalid: {0:?}")]
    InvalidId(String),

    /// The identifier is well formed but names no recipe
    #[error("Recipe ID out of bounds: {id} (store holds {len} recipes)")]
    OutOfRange { id: String, len: usize },

    /// No session is registered under this identifier
    #[error("Session not found: {0}")]
    SessionNotFound(String),
}

/// Failures reading or writing the recipe snapshot file
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to read snapshot {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse snapshot {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize recipes: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write snapshot {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors decoding an upload form into a recipe submission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Form field {field} must be a non-negative integer, got {value:?}")]
    InvalidCount { field: &'static str, value: String },

    #[error("Form field {field} exceeds the limit of {limit} entries (got {count})")]
    TooManyEntries {
        field: &'static str,
        count: usize,
        limit: usize,
    },
}

/// Outcome errors of the add-recipe workflow
#[derive(Debug, Error)]
pub enum PublishError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Form(#[from] FormError),

    /// The recipe was added in memory but the snapshot write failed, so it
    /// may not survive a restart
    #[error("Recipe {id} was added but not persisted: {source}")]
    NotPersisted {
        id: String,
        #[source]
        source: SnapshotError,
    },
}

impl PublishError {
    /// Identifier of the recipe that was committed despite the error, if any
    pub fn committed_id(&self) -> Option<&str> {
        match self {
            PublishError::NotPersisted { id, .. } => Some(id),
            _ => None,
        }
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_messages() {
        let err = StoreError::OutOfRange {
            id: "7".to_string(),
            len: 3,
        };
        assert_eq!(
            err.to_string(),
            "Recipe ID out of bounds: 7 (store holds 3 recipes)"
        );
        assert_eq!(
            StoreError::SessionNotFound("abc".to_string()).to_string(),
            "Session not found: abc"
        );
    }

    #[test]
    fn test_committed_id() {
        let err = PublishError::NotPersisted {
            id: "4".to_string(),
            source: SnapshotError::Write {
                path: PathBuf::from("/nonexistent/recipes.json"),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            },
        };
        assert_eq!(err.committed_id(), Some("4"));

        let err = PublishError::from(StoreError::InvalidId("x".to_string()));
        assert_eq!(err.committed_id(), None);
    }
}
