//! Range query - bound a field by gt/gte/lt/lte.
//!
//! See <https://www.elastic.co/guide/en/elasticsearch/reference/7.10/query-dsl-range-query.html>.

use serde_json::{Map, Value, json};

use crate::clause::{Clause, Query};
use crate::error::Result;

/// Matches documents whose field falls within the given bounds.
///
/// Bounds accept any JSON-convertible value, so numbers, date strings and
/// date math expressions all work.
#[derive(Debug, Clone)]
pub struct RangeQuery {
    field: String,
    gt: Option<Value>,
    gte: Option<Value>,
    lt: Option<Value>,
    lte: Option<Value>,
    time_zone: Option<String>,
    format: Option<String>,
    relation: Option<String>,
    boost: Option<f64>,
}

impl RangeQuery {
    /// Creates an unbounded range query over `field`.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            gt: None,
            gte: None,
            lt: None,
            lte: None,
            time_zone: None,
            format: None,
            relation: None,
            boost: None,
        }
    }

    /// Greater than.
    pub fn gt(mut self, value: impl Into<Value>) -> Self {
        self.gt = Some(value.into());
        self
    }

    /// Greater than or equal to.
    pub fn gte(mut self, value: impl Into<Value>) -> Self {
        self.gte = Some(value.into());
        self
    }

    /// Less than.
    pub fn lt(mut self, value: impl Into<Value>) -> Self {
        self.lt = Some(value.into());
        self
    }

    /// Less than or equal to.
    pub fn lte(mut self, value: impl Into<Value>) -> Self {
        self.lte = Some(value.into());
        self
    }

    /// Time zone used to convert date values, e.g. `+01:00`.
    pub fn time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.time_zone = Some(time_zone.into());
        self
    }

    /// Date format used instead of the mapping's format.
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// How the query matches range fields: `INTERSECTS`, `CONTAINS` or `WITHIN`.
    pub fn relation(mut self, relation: impl Into<String>) -> Self {
        self.relation = Some(relation.into());
        self
    }

    /// Sets the boost for this query.
    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }
}

impl Clause for RangeQuery {
    fn build(&self) -> Result<Value> {
        let mut params = Map::new();

        for (key, bound) in [
            ("gt", &self.gt),
            ("gte", &self.gte),
            ("lt", &self.lt),
            ("lte", &self.lte),
        ] {
            if let Some(value) = bound {
                params.insert(key.to_string(), value.clone());
            }
        }
        for (key, setting) in [
            ("time_zone", &self.time_zone),
            ("format", &self.format),
            ("relation", &self.relation),
        ] {
            if let Some(value) = setting {
                params.insert(key.to_string(), json!(value));
            }
        }
        if let Some(boost) = self.boost {
            params.insert("boost".to_string(), json!(boost));
        }

        Ok(json!({ "range": { self.field.as_str(): Value::Object(params) } }))
    }
}

impl Query for RangeQuery {}
