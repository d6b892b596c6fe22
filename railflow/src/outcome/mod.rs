//! The canonical success/failure outcome model.
//!
//! Every public operation in the algebra consumes and produces [`Outcome`]
//! values. Step functions hand back the looser [`RawOutcome`] shape, which
//! normalization collapses into an `Outcome` before it crosses any chain or
//! sequence boundary.

mod raw;
mod tags;

pub use raw::RawOutcome;
pub use tags::{TagRules, Tags};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The result of one fallible operation.
///
/// `Success` and `Failure` carry a payload; `Done` is the bare success
/// sentinel, a zero-payload marker kept as its own variant so pattern
/// matches over step results stay exhaustive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    /// The operation succeeded with a value.
    Success(Value),
    /// The operation failed with a reason.
    Failure(Value),
    /// The operation succeeded without producing a value.
    Done,
}

impl Outcome {
    /// Creates a success outcome.
    #[must_use]
    pub fn success(value: impl Into<Value>) -> Self {
        Self::Success(value.into())
    }

    /// Creates a failure outcome.
    #[must_use]
    pub fn failure(reason: impl Into<Value>) -> Self {
        Self::Failure(reason.into())
    }

    /// Returns true if this is a success (with or without a payload).
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_) | Self::Done)
    }

    /// Returns true if this is a failure.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns true if this is the bare success sentinel.
    #[must_use]
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Returns the success value, if any.
    #[must_use]
    pub fn success_value(&self) -> Option<&Value> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) | Self::Done => None,
        }
    }

    /// Returns the failure reason, if any.
    #[must_use]
    pub fn failure_reason(&self) -> Option<&Value> {
        match self {
            Self::Failure(reason) => Some(reason),
            Self::Success(_) | Self::Done => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success(value) => write!(f, "success({value})"),
            Self::Failure(reason) => write!(f, "failure({reason})"),
            Self::Done => write!(f, "done"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_predicates() {
        assert!(Outcome::success(2).is_success());
        assert!(!Outcome::success(2).is_failure());
        assert!(Outcome::failure("nope").is_failure());
        assert!(Outcome::Done.is_success());
        assert!(Outcome::Done.is_done());
        assert!(!Outcome::success(2).is_done());
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Outcome::success(2).success_value(), Some(&json!(2)));
        assert_eq!(Outcome::success(2).failure_reason(), None);
        assert_eq!(Outcome::failure("nope").failure_reason(), Some(&json!("nope")));
        assert_eq!(Outcome::Done.success_value(), None);
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(Outcome::success(json!([1, 2])), Outcome::success(json!([1, 2])));
        assert_ne!(Outcome::success(1), Outcome::failure(1));
        assert_ne!(Outcome::success(json!(null)), Outcome::Done);
    }

    #[test]
    fn test_display() {
        assert_eq!(Outcome::success(2).to_string(), "success(2)");
        assert_eq!(Outcome::failure("nope").to_string(), "failure(\"nope\")");
        assert_eq!(Outcome::Done.to_string(), "done");
    }

    #[test]
    fn test_serialization_round_trip() {
        let outcome = Outcome::failure(json!(["tag1", 100]));
        let encoded = serde_json::to_string(&outcome).unwrap();
        let decoded: Outcome = serde_json::from_str(&encoded).unwrap();
        assert_eq!(outcome, decoded);
    }
}
