//! Terms lookup - fetch the terms of a `terms` query from another document.
//!
//! See <https://www.elastic.co/guide/en/elasticsearch/reference/7.10/query-dsl-terms-query.html#query-dsl-terms-lookup>.

use serde_json::{Map, Value, json};

use crate::clause::Clause;
use crate::error::Result;

/// Reference to the document holding the terms to match.
#[derive(Debug, Clone, Default)]
pub struct TermsLookup {
    index: String,
    id: String,
    path: String,
    routing: String,
}

impl TermsLookup {
    /// Creates an empty lookup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index holding the lookup document.
    pub fn index(mut self, index: impl Into<String>) -> Self {
        self.index = index.into();
        self
    }

    /// Id of the lookup document.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Field of the lookup document that contains the terms.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Custom routing value of the lookup document.
    pub fn routing(mut self, routing: impl Into<String>) -> Self {
        self.routing = routing.into();
        self
    }
}

impl Clause for TermsLookup {
    fn build(&self) -> Result<Value> {
        let mut body = Map::new();
        for (key, value) in [
            ("index", &self.index),
            ("id", &self.id),
            ("path", &self.path),
            ("routing", &self.routing),
        ] {
            if !value.is_empty() {
                body.insert(key.to_string(), json!(value));
            }
        }
        Ok(Value::Object(body))
    }
}
