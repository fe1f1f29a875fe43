//! # Store Error Types
//!
//! Error types for repository operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  MemStorage operation                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Categorized, carries entity context        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in apps/api) ← Logged, reduced to {"message": "..."}        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  HTTP 4xx / 5xx                                                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Repository operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Unique constraint violation.
    ///
    /// ## When This Occurs
    /// - Registering a username that is already taken
    #[error("Duplicate {field}: '{value}' already exists")]
    UniqueViolation { field: String, value: String },

    /// A top download points at media that does not exist.
    ///
    /// This is a data integrity failure, not a recoverable lookup miss.
    #[error("Media {media_id} not found for top download {top_download_id}")]
    DanglingReference {
        top_download_id: i32,
        media_id: i32,
    },

    /// Seed data is internally inconsistent.
    #[error("Invalid seed data: {0}")]
    InvalidSeed(String),

    /// The id sequence for an entity has reached `i32::MAX`.
    #[error("No {0} ids left")]
    IdsExhausted(&'static str),
}

impl StoreError {
    /// Creates a UniqueViolation error.
    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        StoreError::UniqueViolation {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Result type for repository operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StoreError::duplicate("username", "alice").to_string(),
            "Duplicate username: 'alice' already exists"
        );
        assert_eq!(
            StoreError::DanglingReference {
                top_download_id: 1,
                media_id: 42
            }
            .to_string(),
            "Media 42 not found for top download 1"
        );
        assert_eq!(
            StoreError::IdsExhausted("Media").to_string(),
            "No Media ids left"
        );
    }
}
