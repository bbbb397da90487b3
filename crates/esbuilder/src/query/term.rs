//! Term query - exact match on a single field.
//!
//! See <https://www.elastic.co/guide/en/elasticsearch/reference/7.10/query-dsl-term-query.html>.

use serde_json::{Map, Value, json};

use crate::clause::{Clause, Query};
use crate::error::Result;

/// Matches documents whose field contains the exact value.
#[derive(Debug, Clone)]
pub struct TermQuery {
    field: String,
    value: Value,
    boost: Option<f64>,
    case_insensitive: Option<bool>,
    query_name: Option<String>,
}

impl TermQuery {
    /// Creates a term query for `field` matching `value`.
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            boost: None,
            case_insensitive: None,
            query_name: None,
        }
    }

    /// Sets the boost for this query.
    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    /// Allows ASCII case-insensitive matching of the value.
    pub fn case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = Some(case_insensitive);
        self
    }

    /// Names the query so matches can be identified in the response.
    pub fn query_name(mut self, name: impl Into<String>) -> Self {
        self.query_name = Some(name.into());
        self
    }

    fn has_options(&self) -> bool {
        self.boost.is_some() || self.case_insensitive.is_some() || self.query_name.is_some()
    }
}

impl Clause for TermQuery {
    fn build(&self) -> Result<Value> {
        if !self.has_options() {
            return Ok(json!({ "term": { self.field.as_str(): self.value.clone() } }));
        }

        let mut body = Map::new();
        body.insert("value".to_string(), self.value.clone());
        if let Some(boost) = self.boost {
            body.insert("boost".to_string(), json!(boost));
        }
        if let Some(case_insensitive) = self.case_insensitive {
            body.insert("case_insensitive".to_string(), json!(case_insensitive));
        }
        if let Some(ref name) = self.query_name {
            body.insert("_name".to_string(), json!(name));
        }

        Ok(json!({ "term": { self.field.as_str(): Value::Object(body) } }))
    }
}

impl Query for TermQuery {}
