//! Error types for building Query DSL documents.
//!
//! Render failures are deterministic functions of the node's configuration:
//! a required field was left empty, or a nested node failed and the error
//! bubbled up unchanged through its parent.

use thiserror::Error;

/// The error type returned by every `build` operation.
#[derive(Error, Debug)]
pub enum BuildError {
    /// A node was rendered with a required field left empty.
    #[error("{clause}: {message}")]
    Validation {
        /// The clause type that failed (e.g. `knn`, `sort`).
        clause: &'static str,
        /// A human-readable explanation.
        message: String,
    },

    /// An aggregation was rendered without a terms/avg/max/min body.
    #[error("aggregation {name} has no sub-aggregation")]
    EmptyAggregation {
        /// The aggregation name.
        name: String,
    },

    /// The rendered value could not be serialized to JSON text.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BuildError {
    /// Creates a validation error for the given clause.
    pub fn validation(clause: &'static str, message: impl Into<String>) -> Self {
        BuildError::Validation {
            clause,
            message: message.into(),
        }
    }
}

/// Result type alias for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;
