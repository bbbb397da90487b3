//! Boolean query - combines other queries with must/must_not/filter/should.
//!
//! See <https://www.elastic.co/guide/en/elasticsearch/reference/7.10/query-dsl-bool-query.html>.

use serde_json::{Map, Value, json};

use crate::clause::{Clause, Query, build_collapsed};
use crate::error::Result;

/// Compound query owning four ordered clause lists.
///
/// Each list renders as nothing when empty, as the bare child when it holds
/// exactly one clause, and as an array (in insertion order) otherwise:
///
/// ```json
/// {
///   "bool": {
///     "must": { "match": { "content": { "query": "rust" } } },
///     "filter": [
///       { "term": { "tenant_id": "acme" } },
///       { "range": { "created_at": { "gte": "2024-01-01" } } }
///     ]
///   }
/// }
/// ```
#[derive(Debug, Default)]
pub struct BoolQuery {
    must: Vec<Box<dyn Query>>,
    must_not: Vec<Box<dyn Query>>,
    filter: Vec<Box<dyn Query>>,
    should: Vec<Box<dyn Query>>,
    minimum_should_match: Option<String>,
    boost: Option<f64>,
    source: Vec<String>,
}

impl BoolQuery {
    /// Creates an empty bool query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a clause that must match and contributes to the score.
    pub fn must(mut self, query: impl Query + 'static) -> Self {
        self.must.push(Box::new(query));
        self
    }

    /// Adds clauses that must match.
    pub fn must_all(mut self, queries: impl IntoIterator<Item = Box<dyn Query>>) -> Self {
        self.must.extend(queries);
        self
    }

    /// Adds a clause that must not match.
    pub fn must_not(mut self, query: impl Query + 'static) -> Self {
        self.must_not.push(Box::new(query));
        self
    }

    /// Adds clauses that must not match.
    pub fn must_not_all(mut self, queries: impl IntoIterator<Item = Box<dyn Query>>) -> Self {
        self.must_not.extend(queries);
        self
    }

    /// Adds a clause that must match in filter context (no scoring).
    pub fn filter(mut self, query: impl Query + 'static) -> Self {
        self.filter.push(Box::new(query));
        self
    }

    /// Adds clauses that must match in filter context.
    pub fn filter_all(mut self, queries: impl IntoIterator<Item = Box<dyn Query>>) -> Self {
        self.filter.extend(queries);
        self
    }

    /// Adds a clause that should match.
    pub fn should(mut self, query: impl Query + 'static) -> Self {
        self.should.push(Box::new(query));
        self
    }

    /// Adds clauses that should match.
    pub fn should_all(mut self, queries: impl IntoIterator<Item = Box<dyn Query>>) -> Self {
        self.should.extend(queries);
        self
    }

    /// Sets the boost for this query.
    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    /// Sets `minimum_should_match` from an expression such as `2`, `75%` or `3<90%`.
    pub fn minimum_should_match(mut self, minimum_should_match: impl Into<String>) -> Self {
        self.minimum_should_match = Some(minimum_should_match.into());
        self
    }

    /// Sets `minimum_should_match` to an absolute number of clauses.
    ///
    /// Writes the same setting as [`BoolQuery::minimum_should_match`]; the
    /// later call wins.
    pub fn minimum_number_should_match(mut self, minimum: i64) -> Self {
        self.minimum_should_match = Some(minimum.to_string());
        self
    }

    /// Appends fields to the `_source` projection.
    pub fn source<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Returns true if no clause has been added to any list.
    pub fn is_empty(&self) -> bool {
        self.must.is_empty()
            && self.must_not.is_empty()
            && self.filter.is_empty()
            && self.should.is_empty()
    }

    /// Returns the total number of clauses across all lists.
    pub fn clause_count(&self) -> usize {
        self.must.len() + self.must_not.len() + self.filter.len() + self.should.len()
    }
}

impl Clause for BoolQuery {
    fn build(&self) -> Result<Value> {
        let mut body = Map::new();

        for (key, clauses) in [
            ("must", &self.must),
            ("must_not", &self.must_not),
            ("filter", &self.filter),
            ("should", &self.should),
        ] {
            let rendered = build_collapsed(clauses).inspect_err(|e| {
                tracing::debug!("bool {} clause failed to build: {}", key, e);
            })?;
            if let Some(value) = rendered {
                body.insert(key.to_string(), value);
            }
        }

        if let Some(boost) = self.boost {
            body.insert("boost".to_string(), json!(boost));
        }
        if let Some(ref msm) = self.minimum_should_match {
            body.insert("minimum_should_match".to_string(), json!(msm));
        }
        if !self.source.is_empty() {
            body.insert("_source".to_string(), json!(self.source));
        }

        Ok(json!({ "bool": Value::Object(body) }))
    }
}

impl Query for BoolQuery {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BuildError;
    use crate::query::{KnnQuery, RangeQuery, TermQuery};

    #[test]
    fn test_empty_bool() {
        let query = BoolQuery::new();
        assert!(query.is_empty());
        assert_eq!(query.build().unwrap(), json!({"bool": {}}));
    }

    #[test]
    fn test_single_filter_not_wrapped() {
        let query = BoolQuery::new().filter(TermQuery::new("tenant_id", "acme"));
        assert_eq!(
            query.build().unwrap(),
            json!({"bool": {"filter": {"term": {"tenant_id": "acme"}}}})
        );
    }

    #[test]
    fn test_multiple_filters_in_order() {
        let query = BoolQuery::new()
            .filter(TermQuery::new("pnc_point.keyword", "liupeng"))
            .filter(RangeQuery::new("start_time").gte(134123456789_i64).lte(134123456799_i64));
        assert_eq!(
            query.build().unwrap(),
            json!({
                "bool": {
                    "filter": [
                        {"term": {"pnc_point.keyword": "liupeng"}},
                        {"range": {"start_time": {"gte": 134123456789_i64, "lte": 134123456799_i64}}}
                    ]
                }
            })
        );
    }

    #[test]
    fn test_scalar_settings() {
        let query = BoolQuery::new()
            .should(TermQuery::new("a", 1))
            .should(TermQuery::new("b", 2))
            .boost(1.2)
            .minimum_should_match("1")
            .source(["title", "body"]);
        let value = query.build().unwrap();
        assert_eq!(value["bool"]["boost"], 1.2);
        assert_eq!(value["bool"]["minimum_should_match"], "1");
        assert_eq!(value["bool"]["_source"], json!(["title", "body"]));
        assert_eq!(query.clause_count(), 2);
    }

    #[test]
    fn test_minimum_should_match_later_wins() {
        let query = BoolQuery::new()
            .minimum_should_match("75%")
            .minimum_number_should_match(2);
        assert_eq!(query.build().unwrap()["bool"]["minimum_should_match"], "2");

        let query = BoolQuery::new()
            .minimum_number_should_match(2)
            .minimum_should_match("75%");
        assert_eq!(query.build().unwrap()["bool"]["minimum_should_match"], "75%");
    }

    #[test]
    fn test_nested_bool() {
        let inner = BoolQuery::new()
            .should(TermQuery::new("status", "open"))
            .should(TermQuery::new("status", "pending"))
            .minimum_number_should_match(1);
        let query = BoolQuery::new()
            .must(inner)
            .must_not(TermQuery::new("is_deleted", true));
        assert_eq!(
            query.build().unwrap(),
            json!({
                "bool": {
                    "must": {
                        "bool": {
                            "should": [
                                {"term": {"status": "open"}},
                                {"term": {"status": "pending"}}
                            ],
                            "minimum_should_match": "1"
                        }
                    },
                    "must_not": {"term": {"is_deleted": true}}
                }
            })
        );
    }

    #[test]
    fn test_boxed_variants() {
        let clauses: Vec<Box<dyn Query>> = vec![
            Box::new(TermQuery::new("a", 1)),
            Box::new(TermQuery::new("b", 2)),
        ];
        let query = BoolQuery::new().must_all(clauses);
        assert_eq!(
            query.build().unwrap(),
            json!({"bool": {"must": [{"term": {"a": 1}}, {"term": {"b": 2}}]}})
        );
    }

    #[test]
    fn test_first_child_error_propagates() {
        let query = BoolQuery::new()
            .must(TermQuery::new("a", 1))
            .filter(KnnQuery::new("embedding"));
        let err = query.build().unwrap_err();
        assert!(matches!(err, BuildError::Validation { clause: "knn", .. }));
    }
}
