//! The build contract shared by every node.

use std::fmt::Debug;

use serde_json::Value;

use crate::error::Result;

/// A node that renders itself into a Query DSL fragment.
///
/// Rendering never mutates the node, so building the same tree twice
/// yields identical output.
pub trait Clause: Debug {
    /// Renders this node (and its children) into a JSON value.
    fn build(&self) -> Result<Value>;

    /// Renders this node and serializes it to compact JSON text.
    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.build()?)?)
    }

    /// Renders this node and serializes it to pretty-printed JSON text.
    fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.build()?)?)
    }
}

/// A clause that can stand in query position: inside a bool list, as a
/// k-NN filter, or as the `query` of a search request.
///
/// The rendered value always has exactly one top-level key naming the
/// clause type.
pub trait Query: Clause {}

impl<T: Clause + ?Sized> Clause for Box<T> {
    fn build(&self) -> Result<Value> {
        (**self).build()
    }
}

impl<T: Query + ?Sized> Query for Box<T> {}

/// Renders a list of clauses using the Elasticsearch collapsing convention.
///
/// Returns `None` for an empty list, the single rendered value for one
/// clause, and an array in insertion order otherwise. Stops at the first
/// render error.
pub(crate) fn build_collapsed<'a, C, I>(clauses: I) -> Result<Option<Value>>
where
    C: Clause + ?Sized + 'a,
    I: IntoIterator<Item = &'a C>,
{
    let mut rendered = clauses
        .into_iter()
        .map(|clause| clause.build())
        .collect::<Result<Vec<Value>>>()?;

    Ok(match rendered.len() {
        0 => None,
        1 => rendered.pop(),
        _ => Some(Value::Array(rendered)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BuildError;
    use serde_json::json;

    #[derive(Debug)]
    struct Fixed(Value);

    impl Clause for Fixed {
        fn build(&self) -> Result<Value> {
            Ok(self.0.clone())
        }
    }

    #[derive(Debug)]
    struct Failing;

    impl Clause for Failing {
        fn build(&self) -> Result<Value> {
            Err(BuildError::validation("failing", "always fails"))
        }
    }

    #[test]
    fn test_collapse_empty() {
        let clauses: Vec<Fixed> = vec![];
        assert!(build_collapsed(&clauses).unwrap().is_none());
    }

    #[test]
    fn test_collapse_single() {
        let clauses = vec![Fixed(json!({"a": 1}))];
        assert_eq!(build_collapsed(&clauses).unwrap(), Some(json!({"a": 1})));
    }

    #[test]
    fn test_collapse_many_keeps_order() {
        let clauses = vec![Fixed(json!(1)), Fixed(json!(2)), Fixed(json!(3))];
        assert_eq!(build_collapsed(&clauses).unwrap(), Some(json!([1, 2, 3])));
    }

    #[test]
    fn test_collapse_stops_at_first_error() {
        let clauses: Vec<Box<dyn Clause>> = vec![Box::new(Fixed(json!(1))), Box::new(Failing)];
        let err = build_collapsed(&clauses).unwrap_err();
        assert!(matches!(err, BuildError::Validation { clause: "failing", .. }));
    }

    #[test]
    fn test_to_json_default_method() {
        let clause = Fixed(json!({"term": {"status": "active"}}));
        assert_eq!(clause.to_json().unwrap(), r#"{"term":{"status":"active"}}"#);
    }
}
