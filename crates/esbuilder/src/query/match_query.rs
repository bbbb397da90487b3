//! Match query - analyzed full-text search on one field.
//!
//! See <https://www.elastic.co/guide/en/elasticsearch/reference/7.10/query-dsl-match-query.html>.

use serde_json::{Map, Value, json};

use crate::clause::{Clause, Query};
use crate::error::Result;

/// Full-text match on a single field.
#[derive(Debug, Clone)]
pub struct MatchQuery {
    field: String,
    text: Value,
    operator: Option<String>,
    analyzer: Option<String>,
    fuzziness: Option<String>,
    prefix_length: Option<u32>,
    max_expansions: Option<u32>,
    minimum_should_match: Option<String>,
    fuzzy_rewrite: Option<String>,
    lenient: Option<bool>,
    fuzzy_transpositions: Option<bool>,
    zero_terms_query: Option<String>,
    cutoff_frequency: Option<f64>,
    boost: Option<f64>,
}

impl MatchQuery {
    /// Creates a match query searching `field` for `text`.
    pub fn new(field: impl Into<String>, text: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            text: text.into(),
            operator: None,
            analyzer: None,
            fuzziness: None,
            prefix_length: None,
            max_expansions: None,
            minimum_should_match: None,
            fuzzy_rewrite: None,
            lenient: None,
            fuzzy_transpositions: None,
            zero_terms_query: None,
            cutoff_frequency: None,
            boost: None,
        }
    }

    /// Boolean operator between analyzed terms, `and` or `or` (default).
    pub fn operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = Some(operator.into());
        self
    }

    /// Analyzer applied to the query text.
    pub fn analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.analyzer = Some(analyzer.into());
        self
    }

    /// Maximum edit distance, e.g. `AUTO` or `2`.
    pub fn fuzziness(mut self, fuzziness: impl Into<String>) -> Self {
        self.fuzziness = Some(fuzziness.into());
        self
    }

    /// Number of leading characters left unchanged for fuzzy matching.
    pub fn prefix_length(mut self, prefix_length: u32) -> Self {
        self.prefix_length = Some(prefix_length);
        self
    }

    /// Maximum number of terms a fuzzy or prefix query expands to.
    pub fn max_expansions(mut self, max_expansions: u32) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    /// Minimum number of terms that must match, e.g. `75%`.
    pub fn minimum_should_match(mut self, minimum_should_match: impl Into<String>) -> Self {
        self.minimum_should_match = Some(minimum_should_match.into());
        self
    }

    /// Rewrite method for the generated fuzzy query.
    pub fn fuzzy_rewrite(mut self, fuzzy_rewrite: impl Into<String>) -> Self {
        self.fuzzy_rewrite = Some(fuzzy_rewrite.into());
        self
    }

    /// Ignores format-based failures such as text on a numeric field.
    pub fn lenient(mut self, lenient: bool) -> Self {
        self.lenient = Some(lenient);
        self
    }

    /// Whether fuzzy edits include transpositions of adjacent characters.
    pub fn fuzzy_transpositions(mut self, fuzzy_transpositions: bool) -> Self {
        self.fuzzy_transpositions = Some(fuzzy_transpositions);
        self
    }

    /// What to match when the analyzer removes every token: `none` or `all`.
    pub fn zero_terms_query(mut self, zero_terms_query: impl Into<String>) -> Self {
        self.zero_terms_query = Some(zero_terms_query.into());
        self
    }

    /// Frequency threshold above which terms are treated as high-frequency.
    pub fn cutoff_frequency(mut self, cutoff_frequency: f64) -> Self {
        self.cutoff_frequency = Some(cutoff_frequency);
        self
    }

    /// Sets the boost for this query.
    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }
}

impl Clause for MatchQuery {
    fn build(&self) -> Result<Value> {
        let mut params = Map::new();
        params.insert("query".to_string(), self.text.clone());

        if let Some(ref operator) = self.operator {
            params.insert("operator".to_string(), json!(operator));
        }
        if let Some(ref analyzer) = self.analyzer {
            params.insert("analyzer".to_string(), json!(analyzer));
        }
        if let Some(ref fuzziness) = self.fuzziness {
            params.insert("fuzziness".to_string(), json!(fuzziness));
        }
        if let Some(prefix_length) = self.prefix_length {
            params.insert("prefix_length".to_string(), json!(prefix_length));
        }
        if let Some(max_expansions) = self.max_expansions {
            params.insert("max_expansions".to_string(), json!(max_expansions));
        }
        if let Some(ref msm) = self.minimum_should_match {
            params.insert("minimum_should_match".to_string(), json!(msm));
        }
        if let Some(ref fuzzy_rewrite) = self.fuzzy_rewrite {
            params.insert("fuzzy_rewrite".to_string(), json!(fuzzy_rewrite));
        }
        if let Some(lenient) = self.lenient {
            params.insert("lenient".to_string(), json!(lenient));
        }
        if let Some(fuzzy_transpositions) = self.fuzzy_transpositions {
            params.insert(
                "fuzzy_transpositions".to_string(),
                json!(fuzzy_transpositions),
            );
        }
        if let Some(ref zero_terms_query) = self.zero_terms_query {
            params.insert("zero_terms_query".to_string(), json!(zero_terms_query));
        }
        if let Some(cutoff_frequency) = self.cutoff_frequency {
            params.insert("cutoff_frequency".to_string(), json!(cutoff_frequency));
        }
        if let Some(boost) = self.boost {
            params.insert("boost".to_string(), json!(boost));
        }

        Ok(json!({ "match": { self.field.as_str(): Value::Object(params) } }))
    }
}

impl Query for MatchQuery {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal() {
        let query = MatchQuery::new("narrative_text", "headache fever");
        assert_eq!(
            query.build().unwrap(),
            json!({"match": {"narrative_text": {"query": "headache fever"}}})
        );
    }

    #[test]
    fn test_operator_and() {
        let query = MatchQuery::new("content_text", "aspirin").operator("and");
        assert_eq!(
            query.build().unwrap(),
            json!({"match": {"content_text": {"query": "aspirin", "operator": "and"}}})
        );
    }

    #[test]
    fn test_all_tuning_fields() {
        let query = MatchQuery::new("message", "this is a test")
            .operator("or")
            .analyzer("standard")
            .fuzziness("AUTO")
            .prefix_length(1)
            .max_expansions(50)
            .minimum_should_match("75%")
            .fuzzy_rewrite("constant_score")
            .lenient(true)
            .fuzzy_transpositions(false)
            .zero_terms_query("all")
            .cutoff_frequency(0.001)
            .boost(1.5);
        assert_eq!(
            query.build().unwrap(),
            json!({
                "match": {
                    "message": {
                        "query": "this is a test",
                        "operator": "or",
                        "analyzer": "standard",
                        "fuzziness": "AUTO",
                        "prefix_length": 1,
                        "max_expansions": 50,
                        "minimum_should_match": "75%",
                        "fuzzy_rewrite": "constant_score",
                        "lenient": true,
                        "fuzzy_transpositions": false,
                        "zero_terms_query": "all",
                        "cutoff_frequency": 0.001,
                        "boost": 1.5
                    }
                }
            })
        );
    }

    #[test]
    fn test_prefix_length_zero_is_kept() {
        let query = MatchQuery::new("title", "rust").prefix_length(0);
        assert_eq!(query.build().unwrap()["match"]["title"]["prefix_length"], 0);
    }
}
