//! Helios Elasticsearch Query DSL Builder
//!
//! This crate assembles Elasticsearch `_search` request bodies from small,
//! fluent builder types. Every node implements [`Clause`], rendering itself
//! (and its children) into a [`serde_json::Value`]; the [`SearchRequest`]
//! root composes one query with paging, sorting and aggregation settings.
//!
//! No connection is made to Elasticsearch: the output is the JSON text to
//! send as the request body.
//!
//! # Architecture
//!
//! - [`query`] - query clauses: term, terms (with lookup), range, match, knn, bool
//! - [`sort`] - sort clauses
//! - [`pit`] - point-in-time references
//! - [`aggs`] - named terms/avg/max/min aggregations
//! - [`request`] - the search request root
//! - [`config`] - request defaults loaded from configuration
//! - [`error`] - error types for all build operations
//!
//! # Quick Start
//!
//! ```
//! use helios_esbuilder::query::{BoolQuery, RangeQuery, TermQuery};
//! use helios_esbuilder::{Clause, SearchRequest, SortQuery};
//! use serde_json::json;
//!
//! let query = BoolQuery::new()
//!     .filter(TermQuery::new("pnc_point.keyword", "liupeng"))
//!     .filter(RangeQuery::new("start_time").gte(134123456789_i64).lte(134123456799_i64));
//!
//! let request = SearchRequest::new(query)
//!     .size(20)
//!     .sort(SortQuery::desc("start_time"));
//!
//! assert_eq!(
//!     request.build()?,
//!     json!({
//!         "query": {
//!             "bool": {
//!                 "filter": [
//!                     { "term": { "pnc_point.keyword": "liupeng" } },
//!                     { "range": { "start_time": { "gte": 134123456789_i64, "lte": 134123456799_i64 } } }
//!                 ]
//!             }
//!         },
//!         "size": 20,
//!         "sort": { "start_time": { "order": "desc" } }
//!     })
//! );
//!
//! let body = request.to_json()?;
//! assert!(body.starts_with(r#"{"query":{"bool":"#));
//! # Ok::<(), helios_esbuilder::BuildError>(())
//! ```
//!
//! # Errors
//!
//! Sort and k-NN clauses validate their required fields when rendered.
//! Composite nodes return the first error raised by a child, and
//! [`Clause::to_json`] surfaces that error instead of producing empty text.
//!
//! ```
//! use helios_esbuilder::query::{BoolQuery, KnnQuery};
//! use helios_esbuilder::{BuildError, Clause};
//!
//! let query = BoolQuery::new().must(KnnQuery::new("embedding"));
//! assert!(matches!(query.to_json(), Err(BuildError::Validation { clause: "knn", .. })));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod aggs;
pub mod clause;
pub mod config;
pub mod error;
pub mod pit;
pub mod query;
pub mod request;
pub mod sort;

pub use aggs::Aggregation;
pub use clause::{Clause, Query};
pub use config::SearchRequestConfig;
pub use error::{BuildError, Result};
pub use pit::PointInTime;
pub use request::SearchRequest;
pub use sort::{SortOrder, SortQuery};
