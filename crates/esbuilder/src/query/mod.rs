//! Query clause builders.
//!
//! Each module implements one Elasticsearch query clause. Leaf queries
//! (term, terms, range, match, knn) render a single field; [`BoolQuery`]
//! composes them.

mod bool_query;
mod knn;
mod match_query;
mod range;
mod term;
mod terms;
mod terms_lookup;

pub use bool_query::BoolQuery;
pub use knn::{DEFAULT_EF, KnnQuery};
pub use match_query::MatchQuery;
pub use range::RangeQuery;
pub use term::TermQuery;
pub use terms::TermsQuery;
pub use terms_lookup::TermsLookup;
