//! Point-in-time reference for consistent paging.

use serde_json::{Value, json};

use crate::clause::Clause;
use crate::error::Result;

/// A point-in-time id plus how long Elasticsearch should keep it alive.
#[derive(Debug, Clone)]
pub struct PointInTime {
    id: String,
    keep_alive: String,
}

impl PointInTime {
    /// Creates a point-in-time reference, e.g. `PointInTime::new(id, "1m")`.
    pub fn new(id: impl Into<String>, keep_alive: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            keep_alive: keep_alive.into(),
        }
    }
}

impl Clause for PointInTime {
    fn build(&self) -> Result<Value> {
        Ok(json!({
            "id": self.id,
            "keep_alive": self.keep_alive,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_fields_emitted() {
        let pit = PointInTime::new("46ToAwMDaWR5BXV1aWQy", "1m");
        assert_eq!(
            pit.build().unwrap(),
            json!({"id": "46ToAwMDaWR5BXV1aWQy", "keep_alive": "1m"})
        );
    }

    #[test]
    fn test_empty_values_still_emitted() {
        let pit = PointInTime::new("", "");
        assert_eq!(pit.build().unwrap(), json!({"id": "", "keep_alive": ""}));
    }
}
