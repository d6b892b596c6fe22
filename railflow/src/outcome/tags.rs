//! Ordered discriminator tags and nested-tuple flattening.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An ordered list of discriminator values prepended to a payload.
///
/// One entry point covers every authored form: [`Tags::list`] is the general
/// case, [`Tags::one`] and [`Tags::pair`] are sugar for the positional
/// forms. Flattening order is always tags first, payload last.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Tags(Vec<Value>);

impl Tags {
    /// Creates an empty tag list. Flattening with it is the identity.
    #[must_use]
    pub fn none() -> Self {
        Self(Vec::new())
    }

    /// Creates a single-tag list.
    #[must_use]
    pub fn one(tag: impl Into<Value>) -> Self {
        Self(vec![tag.into()])
    }

    /// Creates a two-tag list.
    #[must_use]
    pub fn pair(first: impl Into<Value>, second: impl Into<Value>) -> Self {
        Self(vec![first.into(), second.into()])
    }

    /// Creates a tag list from an explicit ordered list.
    #[must_use]
    pub fn list(tags: Vec<Value>) -> Self {
        Self(tags)
    }

    /// Returns the number of tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Builds one flat tuple of the tags followed by `payload`.
    ///
    /// An empty tag list returns the payload unchanged, so an untouched
    /// branch of [`TagRules`] is a no-op.
    #[must_use]
    pub fn flatten(&self, payload: Value) -> Value {
        if self.0.is_empty() {
            return payload;
        }
        let mut parts = self.0.clone();
        parts.push(payload);
        Value::Array(parts)
    }
}

impl From<Value> for Tags {
    fn from(tag: Value) -> Self {
        Self::one(tag)
    }
}

impl From<Vec<Value>> for Tags {
    fn from(tags: Vec<Value>) -> Self {
        Self::list(tags)
    }
}

/// Per-branch tag lists for the two-sided `tag` combinator.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TagRules {
    /// Tags applied to a success payload.
    pub ok: Tags,
    /// Tags applied to a failure reason.
    pub error: Tags,
}

impl TagRules {
    /// Creates rules covering both branches.
    #[must_use]
    pub fn new(ok: Tags, error: Tags) -> Self {
        Self { ok, error }
    }

    /// Creates rules that rewrite only successes.
    #[must_use]
    pub fn ok_only(ok: Tags) -> Self {
        Self {
            ok,
            error: Tags::none(),
        }
    }

    /// Creates rules that rewrite only failures.
    #[must_use]
    pub fn error_only(error: Tags) -> Self {
        Self {
            ok: Tags::none(),
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_flatten_preserves_order() {
        let tags = Tags::pair("a", "b");
        assert_eq!(tags.flatten(json!("r")), json!(["a", "b", "r"]));
    }

    #[test]
    fn test_flatten_empty_is_identity() {
        assert_eq!(Tags::none().flatten(json!(100)), json!(100));
    }

    #[test]
    fn test_positional_sugar_matches_list_form() {
        assert_eq!(Tags::one("a"), Tags::list(vec![json!("a")]));
        assert_eq!(Tags::pair("a", "b"), Tags::list(vec![json!("a"), json!("b")]));
        assert_eq!(Tags::from(json!("a")), Tags::one("a"));
    }

    #[test]
    fn test_nested_flatten_keeps_inner_tuple() {
        let inner = Tags::one("inner").flatten(json!("r"));
        let outer = Tags::one("outer").flatten(inner);
        assert_eq!(outer, json!(["outer", ["inner", "r"]]));
    }

    #[test]
    fn test_rules_single_sided() {
        let rules = TagRules::error_only(Tags::one("tag1"));
        assert!(rules.ok.is_empty());
        assert_eq!(rules.error.len(), 1);
    }
}
