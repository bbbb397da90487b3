//! Sort clauses for the search request.

use std::fmt;

use serde_json::{Value, json};

use crate::clause::Clause;
use crate::error::{BuildError, Result};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending (`asc`).
    Asc,
    /// Descending (`desc`).
    Desc,
}

impl SortOrder {
    /// Returns the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<SortOrder> for String {
    fn from(order: SortOrder) -> Self {
        order.as_str().to_string()
    }
}

/// Sorts results by one field.
///
/// Renders `{"field": {"order": "asc"}}`.
#[derive(Debug, Clone)]
pub struct SortQuery {
    field: String,
    order: String,
}

impl SortQuery {
    /// Creates a sort on `field` in the given order.
    pub fn new(field: impl Into<String>, order: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            order: order.into(),
        }
    }

    /// Ascending sort on `field`.
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortOrder::Asc)
    }

    /// Descending sort on `field`.
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortOrder::Desc)
    }
}

impl Clause for SortQuery {
    fn build(&self) -> Result<Value> {
        if self.field.is_empty() || self.order.is_empty() {
            return Err(BuildError::validation("sort", "name and order must be set"));
        }
        Ok(json!({ self.field.as_str(): { "order": self.order } }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_shape() {
        let sort = SortQuery::new("field", "asc");
        assert_eq!(sort.build().unwrap(), json!({"field": {"order": "asc"}}));
    }

    #[test]
    fn test_sort_order_enum() {
        assert_eq!(
            SortQuery::desc("last_updated").build().unwrap(),
            json!({"last_updated": {"order": "desc"}})
        );
        assert_eq!(SortOrder::Asc.to_string(), "asc");
    }

    #[test]
    fn test_empty_name_fails() {
        let err = SortQuery::new("", "asc").build().unwrap_err();
        assert!(matches!(err, BuildError::Validation { clause: "sort", .. }));
    }

    #[test]
    fn test_empty_order_fails() {
        let err = SortQuery::new("resource_id", "").build().unwrap_err();
        assert!(err.to_string().contains("name and order must be set"));
    }
}
