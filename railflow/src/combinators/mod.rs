//! Single-step combinators adapting plain operations into the outcome
//! algebra.
//!
//! Each combinator is a self-contained transform usable as a link in a
//! [`Pipe`](crate::chain::Pipe) chain: it runs one operation against the
//! incoming value and produces a well-formed [`Outcome`].

use crate::outcome::{Outcome, TagRules, Tags};
use serde_json::Value;

/// Discriminator prepended to faults captured by [`try_catch`].
pub const CAUGHT_TAG: &str = "caught";

/// Failure reason produced by [`found`] for missing values.
pub const NOT_FOUND: &str = "not_found";

/// Lifts a total function into the algebra.
///
/// The raw result of `f` is always wrapped as a success.
pub fn map<F, T>(args: &Value, f: F) -> Outcome
where
    F: FnOnce(&Value) -> T,
    T: Into<Value>,
{
    Outcome::Success(f(args).into())
}

/// Runs `f` for its side effect only and passes `args` through unchanged.
///
/// The return value of `f` is discarded; the original input becomes the
/// success payload. Used for dead-end steps such as persistence or
/// notification that must not alter the pipeline value.
pub fn tee<F, T>(args: Value, f: F) -> Outcome
where
    F: FnOnce(&Value) -> T,
{
    let _ = f(&args);
    Outcome::Success(args)
}

/// Runs a fault-raising operation inside a guarded scope.
///
/// A normal return wraps as a success; a raised fault is captured and
/// converted into `Failure(("caught", message))` so exceptional control flow
/// never escapes the chain.
pub fn try_catch<F>(args: &Value, f: F) -> Outcome
where
    F: FnOnce(&Value) -> anyhow::Result<Value>,
{
    match f(args) {
        Ok(value) => Outcome::Success(value),
        Err(fault) => Outcome::Failure(Value::Array(vec![
            Value::String(CAUGHT_TAG.to_string()),
            Value::String(fault.to_string()),
        ])),
    }
}

/// Converts a truthiness check into an outcome.
///
/// `null` and `false` are failures with reason `"not_found"`; every other
/// value, including `0`, `""`, and empty containers, wraps as a success.
#[must_use]
pub fn found(value: Value) -> Outcome {
    match value {
        Value::Null | Value::Bool(false) => {
            Outcome::Failure(Value::String(NOT_FOUND.to_string()))
        }
        other => Outcome::Success(other),
    }
}

/// Two-argument form of [`found`]: applies `f` to `args` first.
pub fn found_by<F, T>(args: &Value, f: F) -> Outcome
where
    F: FnOnce(&Value) -> T,
    T: Into<Value>,
{
    found(f(args).into())
}

/// Runs `f` and rewrites a failure reason with the given tags.
///
/// `Failure(r)` becomes `Failure(flatten(tags, r))`; successes and the bare
/// sentinel pass through unchanged.
pub fn tag_error<F>(args: &Value, f: F, tags: &Tags) -> Outcome
where
    F: FnOnce(&Value) -> Outcome,
{
    match f(args) {
        Outcome::Failure(reason) => Outcome::Failure(tags.flatten(reason)),
        other => other,
    }
}

/// Runs `f` and rewrites a success payload with the given tags.
///
/// Symmetric to [`tag_error`]: failures pass through unchanged.
pub fn tag_ok<F>(args: &Value, f: F, tags: &Tags) -> Outcome
where
    F: FnOnce(&Value) -> Outcome,
{
    match f(args) {
        Outcome::Success(value) => Outcome::Success(tags.flatten(value)),
        other => other,
    }
}

/// Runs `f` and rewrites both branches according to `rules`.
///
/// The `ok` tag list applies to a success payload, the `error` tag list to
/// a failure reason. An empty tag list leaves its branch untouched.
pub fn tag<F>(args: &Value, f: F, rules: &TagRules) -> Outcome
where
    F: FnOnce(&Value) -> Outcome,
{
    match f(args) {
        Outcome::Success(value) => Outcome::Success(rules.ok.flatten(value)),
        Outcome::Failure(reason) => Outcome::Failure(rules.error.flatten(reason)),
        Outcome::Done => Outcome::Done,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_map_wraps_total_function() {
        let result = map(&json!(4), |value| value.as_i64().unwrap_or(0) + 1);
        assert_eq!(result, Outcome::success(5));
    }

    #[test]
    fn test_tee_passes_input_through() {
        let mut calls = 0;
        let result = tee(json!({"id": 7}), |_| {
            calls += 1;
            "ignored return"
        });
        assert_eq!(result, Outcome::success(json!({"id": 7})));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_try_catch_wraps_normal_return() {
        let result = try_catch(&json!(2), |value| Ok(json!(value.as_i64().unwrap_or(0) * 3)));
        assert_eq!(result, Outcome::success(6));
    }

    #[test]
    fn test_try_catch_captures_fault() {
        let result = try_catch(&json!(2), |_| Err(anyhow::anyhow!("boom")));
        assert_eq!(result, Outcome::failure(json!(["caught", "boom"])));
    }

    #[test]
    fn test_found_truthiness() {
        assert_eq!(found(json!(null)), Outcome::failure(NOT_FOUND));
        assert_eq!(found(json!(false)), Outcome::failure(NOT_FOUND));
        assert_eq!(found(json!(0)), Outcome::success(0));
        assert_eq!(found(json!("")), Outcome::success(""));
        assert_eq!(found(json!(true)), Outcome::success(true));
        assert_eq!(found(json!([1])), Outcome::success(json!([1])));
    }

    #[test]
    fn test_found_by_applies_operation_first() {
        let result = found_by(&json!({"name": "ada"}), |value| value.get("name").cloned());
        assert_eq!(result, Outcome::success("ada"));

        let missing = found_by(&json!({"name": "ada"}), |value| value.get("age").cloned());
        assert_eq!(missing, Outcome::failure(NOT_FOUND));
    }

    #[test]
    fn test_tag_error_flattens_failure() {
        let tags = Tags::pair("a", "b");
        let result = tag_error(&json!(1), |_| Outcome::failure("r"), &tags);
        assert_eq!(result, Outcome::failure(json!(["a", "b", "r"])));
    }

    #[test]
    fn test_tag_error_leaves_success_untouched() {
        let tags = Tags::pair("a", "b");
        let result = tag_error(&json!(1), |_| Outcome::success("v"), &tags);
        assert_eq!(result, Outcome::success("v"));
    }

    #[test]
    fn test_tag_ok_flattens_success_only() {
        let tags = Tags::one("wrapped");
        let result = tag_ok(&json!(1), |_| Outcome::success(10), &tags);
        assert_eq!(result, Outcome::success(json!(["wrapped", 10])));

        let untouched = tag_ok(&json!(1), |_| Outcome::failure("r"), &tags);
        assert_eq!(untouched, Outcome::failure("r"));
    }

    #[test]
    fn test_tag_rewrites_matching_branch() {
        let rules = TagRules::new(Tags::one(10), Tags::one("tag1"));

        let failing = tag(&json!(1), |_| Outcome::failure(100), &rules);
        assert_eq!(failing, Outcome::failure(json!(["tag1", 100])));

        let succeeding = tag(&json!(1), |_| Outcome::success("v"), &rules);
        assert_eq!(succeeding, Outcome::success(json!([10, "v"])));
    }

    #[test]
    fn test_tag_passes_sentinel_through() {
        let rules = TagRules::new(Tags::one(10), Tags::one("tag1"));
        assert_eq!(tag(&json!(1), |_| Outcome::Done, &rules), Outcome::Done);
    }
}
