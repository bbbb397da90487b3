//! The search request document root.

use serde_json::{Map, Value, json};

use crate::aggs::Aggregation;
use crate::clause::{Clause, Query, build_collapsed};
use crate::config::SearchRequestConfig;
use crate::error::Result;
use crate::pit::PointInTime;
use crate::sort::SortQuery;

/// A complete `_search` request body.
///
/// Owns exactly one query plus optional paging, projection, sorting,
/// point-in-time and aggregation settings. Only configured settings are
/// rendered.
#[derive(Debug)]
pub struct SearchRequest {
    query: Box<dyn Query>,
    size: Option<i64>,
    from: Option<i64>,
    source: Vec<String>,
    sort: Vec<SortQuery>,
    search_after: Vec<Value>,
    track_total_hits: Option<bool>,
    pit: Option<PointInTime>,
    aggs: Vec<Aggregation>,
    pretty: bool,
}

impl SearchRequest {
    /// Creates a request around `query`.
    pub fn new(query: impl Query + 'static) -> Self {
        Self {
            query: Box::new(query),
            size: None,
            from: None,
            source: Vec::new(),
            sort: Vec::new(),
            search_after: Vec::new(),
            track_total_hits: None,
            pit: None,
            aggs: Vec::new(),
            pretty: false,
        }
    }

    /// Creates a request around `query`, seeded with configured defaults.
    pub fn with_config(query: impl Query + 'static, config: &SearchRequestConfig) -> Self {
        let mut request = Self::new(query);
        request.size = config.default_size;
        request.track_total_hits = config.track_total_hits;
        request.pretty = config.pretty;
        request
    }

    /// Maximum number of hits to return. Rendered only if positive.
    pub fn size(mut self, size: i64) -> Self {
        self.size = Some(size);
        self
    }

    /// Offset of the first hit. Rendered only if positive.
    pub fn from(mut self, from: i64) -> Self {
        self.from = Some(from);
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

    /// Appends a sort clause. Sort clauses render in insertion order.
    pub fn sort(mut self, sort: SortQuery) -> Self {
        self.sort.push(sort);
        self
    }

    /// Sets the `search_after` cursor, the sort values of the last hit of the
    /// previous page.
    pub fn search_after<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.search_after = values.into_iter().map(Into::into).collect();
        self
    }

    /// Whether to count total hits accurately.
    pub fn track_total_hits(mut self, track: bool) -> Self {
        self.track_total_hits = Some(track);
        self
    }

    /// Searches a point-in-time instead of the live index.
    pub fn pit(mut self, pit: PointInTime) -> Self {
        self.pit = Some(pit);
        self
    }

    /// Adds an aggregation. A later aggregation with the same name replaces
    /// the earlier one.
    pub fn aggregation(mut self, aggregation: Aggregation) -> Self {
        self.aggs.push(aggregation);
        self
    }

    /// Serializes the request, pretty-printed if the request was created from
    /// a configuration with `pretty` set.
    pub fn to_json_configured(&self) -> Result<String> {
        if self.pretty {
            self.to_json_pretty()
        } else {
            self.to_json()
        }
    }

    fn build_aggs(&self) -> Result<Option<Value>> {
        if self.aggs.is_empty() {
            return Ok(None);
        }
        let mut aggs = Map::new();
        for aggregation in &self.aggs {
            if let Value::Object(rendered) = aggregation.build()? {
                aggs.extend(rendered);
            }
        }
        Ok(Some(Value::Object(aggs)))
    }
}

impl Clause for SearchRequest {
    fn build(&self) -> Result<Value> {
        let mut body = Map::new();

        let query = self.query.build().inspect_err(|e| {
            tracing::debug!("search request query failed to build: {}", e);
        })?;
        body.insert("query".to_string(), query);

        if let Some(size) = self.size.filter(|s| *s > 0) {
            body.insert("size".to_string(), json!(size));
        }
        if let Some(from) = self.from.filter(|f| *f > 0) {
            body.insert("from".to_string(), json!(from));
        }
        if !self.source.is_empty() {
            body.insert("_source".to_string(), json!(self.source));
        }
        if let Some(sort) = build_collapsed(&self.sort)? {
            body.insert("sort".to_string(), sort);
        }
        if !self.search_after.is_empty() {
            body.insert(
                "search_after".to_string(),
                Value::Array(self.search_after.clone()),
            );
        }
        if let Some(track) = self.track_total_hits {
            body.insert("track_total_hits".to_string(), json!(track));
        }
        if let Some(ref pit) = self.pit {
            body.insert("pit".to_string(), pit.build()?);
        }
        if let Some(aggs) = self.build_aggs()? {
            body.insert("aggs".to_string(), aggs);
        }

        Ok(Value::Object(body))
    }
}
