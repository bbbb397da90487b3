//! Terms bucket aggregation.

use serde::Serialize;
use serde_json::{Value, json};

use crate::clause::Clause;
use crate::error::Result;

/// Bucket count used when the requested size is out of range.
pub const DEFAULT_BUCKET_SIZE: i64 = 10;

/// One bucket per unique value of `field`.
#[derive(Debug, Clone, Serialize)]
pub struct TermsAggregation {
    field: String,
    size: i64,
}

impl TermsAggregation {
    /// Creates a terms aggregation returning up to `size` buckets.
    ///
    /// Returns `None` if `field` is empty. A `size` below 1 falls back to
    /// [`DEFAULT_BUCKET_SIZE`].
    pub fn new(field: impl Into<String>, size: i64) -> Option<Self> {
        let field = field.into();
        if field.is_empty() {
            tracing::debug!("terms aggregation rejected: empty field");
            return None;
        }
        let size = if size < 1 {
            tracing::trace!(
                "terms aggregation on '{}': size {} out of range, using {}",
                field,
                size,
                DEFAULT_BUCKET_SIZE
            );
            DEFAULT_BUCKET_SIZE
        } else {
            size
        };
        Some(Self { field, size })
    }

    /// Returns the bucket size that will be requested.
    pub fn size(&self) -> i64 {
        self.size
    }
}

impl Clause for TermsAggregation {
    fn build(&self) -> Result<Value> {
        Ok(json!({ "terms": serde_json::to_value(self)? }))
    }
}
