//! k-NN query - approximate nearest neighbour search on a vector field.

use serde_json::{Map, Value, json};

use crate::clause::{Clause, Query};
use crate::error::{BuildError, Result};

/// Candidate list size used when `ef` is not set.
pub const DEFAULT_EF: u32 = 256;

/// Nearest neighbour search over a dense vector field, optionally
/// restricted by a filter query.
#[derive(Debug)]
pub struct KnnQuery {
    vector_name: String,
    vector: Vec<f64>,
    k: u32,
    ef: Option<u32>,
    filter: Option<Box<dyn Query>>,
}

impl KnnQuery {
    /// Creates a k-NN query over the vector field `vector_name`.
    pub fn new(vector_name: impl Into<String>) -> Self {
        Self {
            vector_name: vector_name.into(),
            vector: Vec::new(),
            k: 0,
            ef: None,
            filter: None,
        }
    }

    /// The query vector.
    pub fn vector(mut self, vector: Vec<f64>) -> Self {
        self.vector = vector;
        self
    }

    /// Number of neighbours to return.
    pub fn k(mut self, k: u32) -> Self {
        self.k = k;
        self
    }

    /// Size of the dynamic candidate list. Zero falls back to [`DEFAULT_EF`].
    pub fn ef(mut self, ef: u32) -> Self {
        self.ef = Some(ef);
        self
    }

    /// Restricts candidates to documents matching `filter`.
    pub fn filter(mut self, filter: impl Query + 'static) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    fn effective_ef(&self) -> u32 {
        match self.ef {
            Some(ef) if ef > 0 => ef,
            _ => {
                tracing::trace!("knn ef unset for '{}', using {}", self.vector_name, DEFAULT_EF);
                DEFAULT_EF
            }
        }
    }
}

impl Clause for KnnQuery {
    fn build(&self) -> Result<Value> {
        if self.vector_name.is_empty() || self.vector.is_empty() {
            return Err(BuildError::validation(
                "knn",
                "vector_name or vector can not be empty",
            ));
        }

        let mut params = Map::new();
        params.insert("vector".to_string(), json!(self.vector));
        params.insert("k".to_string(), json!(self.k));
        params.insert("ef".to_string(), json!(self.effective_ef()));

        if let Some(ref filter) = self.filter {
            let rendered = filter.build().inspect_err(|e| {
                tracing::debug!("knn filter for '{}' failed to build: {}", self.vector_name, e);
            })?;
            params.insert("filter".to_string(), rendered);
        }

        Ok(json!({ "knn": { self.vector_name.as_str(): Value::Object(params) } }))
    }
}

impl Query for KnnQuery {}
