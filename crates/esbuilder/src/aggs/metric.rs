//! Single-value metric aggregations: avg, max and min.

use serde::Serialize;
use serde_json::{Value, json};

use crate::clause::Clause;
use crate::error::Result;

#[derive(Debug, Clone, Serialize)]
struct FieldBody {
    field: String,
}

impl FieldBody {
    fn new(kind: &'static str, field: String) -> Option<Self> {
        if field.is_empty() {
            tracing::debug!("{} aggregation rejected: empty field", kind);
            return None;
        }
        Some(Self { field })
    }
}

macro_rules! metric_aggregation {
    ($(#[$doc:meta])* $name:ident, $kind:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $name {
            body: FieldBody,
        }

        impl $name {
            /// Creates the aggregation over `field`. Returns `None` if `field` is empty.
            pub fn new(field: impl Into<String>) -> Option<Self> {
                FieldBody::new($kind, field.into()).map(|body| Self { body })
            }
        }

        impl Clause for $name {
            fn build(&self) -> Result<Value> {
                Ok(json!({ $kind: serde_json::to_value(&self.body)? }))
            }
        }
    };
}

metric_aggregation!(
    /// Average of a numeric field.
    AvgAggregation,
    "avg"
);
metric_aggregation!(
    /// Maximum of a numeric field.
    MaxAggregation,
    "max"
);
metric_aggregation!(
    /// Minimum of a numeric field.
    MinAggregation,
    "min"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avg() {
        let agg = AvgAggregation::new("price").unwrap();
        assert_eq!(agg.build().unwrap(), json!({"avg": {"field": "price"}}));
    }

    #[test]
    fn test_max() {
        let agg = MaxAggregation::new("price").unwrap();
        assert_eq!(agg.build().unwrap(), json!({"max": {"field": "price"}}));
    }

    #[test]
    fn test_min() {
        let agg = MinAggregation::new("price").unwrap();
        assert_eq!(agg.build().unwrap(), json!({"min": {"field": "price"}}));
    }

    #[test]
    fn test_empty_field_rejected() {
        assert!(AvgAggregation::new("").is_none());
        assert!(MaxAggregation::new("").is_none());
        assert!(MinAggregation::new(String::new()).is_none());
    }
}
