//! Request-level defaults.
//!
//! A [`SearchRequestConfig`] is typically deserialized from the
//! application's configuration file and applied to every request built
//! with [`SearchRequest::with_config`](crate::SearchRequest::with_config).

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Defaults applied to new search requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequestConfig {
    /// Page size used when the caller does not set one (default: none,
    /// leaving Elasticsearch's own default of 10).
    #[serde(default)]
    pub default_size: Option<i64>,

    /// Value for `track_total_hits` (default: unset).
    #[serde(default)]
    pub track_total_hits: Option<bool>,

    /// Whether [`SearchRequest::to_json_configured`](crate::SearchRequest::to_json_configured)
    /// pretty-prints (default: false).
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool {
    false
}

impl Default for SearchRequestConfig {
    fn default() -> Self {
        Self {
            default_size: None,
            track_total_hits: None,
            pretty: default_pretty(),
        }
    }
}

impl SearchRequestConfig {
    /// Parses a configuration from JSON text. Missing keys take their defaults.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}
