//! Aggregations.
//!
//! An [`Aggregation`] names exactly one sub-aggregation and renders it under
//! that name, ready to be merged into the request's `aggs` object:
//!
//! ```json
//! { "by_status": { "terms": { "field": "status", "size": 5 } } }
//! ```

mod metric;
mod terms;

pub use metric::{AvgAggregation, MaxAggregation, MinAggregation};
pub use terms::{DEFAULT_BUCKET_SIZE, TermsAggregation};

use serde_json::{Map, Value};

use crate::clause::Clause;
use crate::error::{BuildError, Result};

/// The body selected for an [`Aggregation`].
#[derive(Debug, Clone)]
pub enum AggregationKind {
    /// Bucket per unique term.
    Terms(TermsAggregation),
    /// Average value.
    Avg(AvgAggregation),
    /// Maximum value.
    Max(MaxAggregation),
    /// Minimum value.
    Min(MinAggregation),
}

impl Clause for AggregationKind {
    fn build(&self) -> Result<Value> {
        match self {
            AggregationKind::Terms(agg) => agg.build(),
            AggregationKind::Avg(agg) => agg.build(),
            AggregationKind::Max(agg) => agg.build(),
            AggregationKind::Min(agg) => agg.build(),
        }
    }
}

/// A named aggregation.
#[derive(Debug, Clone)]
pub struct Aggregation {
    name: String,
    kind: Option<AggregationKind>,
}

impl Aggregation {
    /// Creates an aggregation called `name`. Returns `None` if `name` is empty.
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.is_empty() {
            tracing::debug!("aggregation rejected: empty name");
            return None;
        }
        Some(Self { name, kind: None })
    }

    /// Returns the aggregation name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Uses a terms aggregation as the body.
    pub fn terms(self, terms: TermsAggregation) -> Self {
        self.with_kind(AggregationKind::Terms(terms))
    }

    /// Uses an avg aggregation as the body.
    pub fn avg(self, avg: AvgAggregation) -> Self {
        self.with_kind(AggregationKind::Avg(avg))
    }

    /// Uses a max aggregation as the body.
    pub fn max(self, max: MaxAggregation) -> Self {
        self.with_kind(AggregationKind::Max(max))
    }

    /// Uses a min aggregation as the body.
    pub fn min(self, min: MinAggregation) -> Self {
        self.with_kind(AggregationKind::Min(min))
    }

    /// Sets the body, replacing any previous one.
    pub fn with_kind(mut self, kind: AggregationKind) -> Self {
        self.kind = Some(kind);
        self
    }
}

impl Clause for Aggregation {
    fn build(&self) -> Result<Value> {
        let kind = self.kind.as_ref().ok_or_else(|| BuildError::EmptyAggregation {
            name: self.name.clone(),
        })?;

        let mut source = Map::new();
        source.insert(self.name.clone(), kind.build()?);
        Ok(Value::Object(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_terms_body_nested_under_name() {
        let agg = Aggregation::new("by_status")
            .unwrap()
            .terms(TermsAggregation::new("status", 5).unwrap());
        assert_eq!(
            agg.build().unwrap(),
            json!({"by_status": {"terms": {"field": "status", "size": 5}}})
        );
    }

    #[test]
    fn test_later_body_replaces_earlier() {
        let agg = Aggregation::new("price_stats")
            .unwrap()
            .avg(AvgAggregation::new("price").unwrap())
            .max(MaxAggregation::new("price").unwrap());
        assert_eq!(
            agg.build().unwrap(),
            json!({"price_stats": {"max": {"field": "price"}}})
        );
    }

    #[test]
    fn test_min_body() {
        let agg = Aggregation::new("cheapest")
            .unwrap()
            .min(MinAggregation::new("price").unwrap());
        assert_eq!(
            agg.build().unwrap(),
            json!({"cheapest": {"min": {"field": "price"}}})
        );
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(Aggregation::new("").is_none());
    }

    #[test]
    fn test_missing_body_fails() {
        let err = Aggregation::new("nothing").unwrap().build().unwrap_err();
        assert!(matches!(err, BuildError::EmptyAggregation { ref name } if name == "nothing"));
    }
}
