//! Terms query - match any of several exact values.
//!
//! See <https://www.elastic.co/guide/en/elasticsearch/reference/7.10/query-dsl-terms-query.html>.

use serde_json::{Map, Value, json};

use crate::clause::{Clause, Query};
use crate::error::Result;

use super::TermsLookup;

/// Matches documents whose field contains one or more of the given values,
/// or the values stored in a lookup document.
#[derive(Debug, Clone)]
pub struct TermsQuery {
    field: String,
    values: Vec<Value>,
    lookup: Option<TermsLookup>,
    boost: Option<f64>,
    query_name: Option<String>,
}

impl TermsQuery {
    /// Creates a terms query over `field` with inline values.
    pub fn new<I, V>(field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            field: field.into(),
            values: values.into_iter().map(Into::into).collect(),
            lookup: None,
            boost: None,
            query_name: None,
        }
    }

    /// Creates a terms query from string values.
    pub fn from_strings<I, S>(field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(
            field,
            values.into_iter().map(|v| Value::String(v.as_ref().to_string())),
        )
    }

    /// Appends more inline values.
    pub fn values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.values.extend(values.into_iter().map(Into::into));
        self
    }

    /// Fetches the terms from another document instead of the inline values.
    pub fn lookup(mut self, lookup: TermsLookup) -> Self {
        self.lookup = Some(lookup);
        self
    }

    /// Sets the boost for this query. Ignored when a lookup is attached.
    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    /// Names the query. Ignored when a lookup is attached.
    pub fn query_name(mut self, name: impl Into<String>) -> Self {
        self.query_name = Some(name.into());
        self
    }
}

impl Clause for TermsQuery {
    fn build(&self) -> Result<Value> {
        let mut params = Map::new();

        if let Some(ref lookup) = self.lookup {
            params.insert(self.field.clone(), lookup.build()?);
        } else {
            params.insert(self.field.clone(), Value::Array(self.values.clone()));
            if let Some(boost) = self.boost {
                params.insert("boost".to_string(), json!(boost));
            }
            if let Some(ref name) = self.query_name {
                params.insert("_name".to_string(), json!(name));
            }
        }

        Ok(json!({ "terms": Value::Object(params) }))
    }
}

impl Query for TermsQuery {}
