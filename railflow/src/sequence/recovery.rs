//! Recovery clauses pattern-matched against a terminal failure reason.

use crate::errors::RecoveryError;
use crate::outcome::{Outcome, RawOutcome};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A pattern matched against a failure reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReasonPattern {
    /// Matches any reason.
    Any,
    /// Matches a structurally equal reason.
    Equals(Value),
    /// Matches a tuple reason whose head equals the tag.
    Tagged(Value),
}

impl ReasonPattern {
    /// Checks whether this pattern matches `reason`.
    #[must_use]
    pub fn matches(&self, reason: &Value) -> bool {
        match self {
            Self::Any => true,
            Self::Equals(expected) => reason == expected,
            Self::Tagged(tag) => reason
                .as_array()
                .and_then(|parts| parts.first())
                .is_some_and(|head| head == tag),
        }
    }
}

impl fmt::Display for ReasonPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => write!(f, "_"),
            Self::Equals(value) => write!(f, "{value}"),
            Self::Tagged(tag) => write!(f, "({tag}, ..)"),
        }
    }
}

type HandlerFn = Box<dyn Fn(&Value) -> RawOutcome + Send + Sync>;

/// A `(pattern, handler)` pair for the recovery phase.
///
/// The handler runs only when the pattern matches the terminal failure
/// reason, and its return value must itself be a well-formed outcome.
pub struct RecoveryClause {
    pattern: ReasonPattern,
    handler: HandlerFn,
}

impl RecoveryClause {
    /// Creates a new recovery clause.
    pub fn new(
        pattern: ReasonPattern,
        handler: impl Fn(&Value) -> RawOutcome + Send + Sync + 'static,
    ) -> Self {
        Self {
            pattern,
            handler: Box::new(handler),
        }
    }

    /// Returns the clause pattern.
    #[must_use]
    pub fn pattern(&self) -> &ReasonPattern {
        &self.pattern
    }

    /// Runs the handler against a matched reason and validates the result.
    ///
    /// # Errors
    ///
    /// Returns [`RecoveryError`] if the handler's return value is not a
    /// well-formed outcome.
    pub fn recover(&self, reason: &Value) -> Result<Outcome, RecoveryError> {
        (self.handler)(reason)
            .normalize()
            .map_err(|err| RecoveryError::new(self.pattern.to_string(), err.actual))
    }
}

impl fmt::Debug for RecoveryClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecoveryClause")
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_any_matches_everything() {
        assert!(ReasonPattern::Any.matches(&json!("anything")));
        assert!(ReasonPattern::Any.matches(&json!(["a", 1])));
    }

    #[test]
    fn test_equals_is_structural() {
        let pattern = ReasonPattern::Equals(json!(["db", "timeout"]));
        assert!(pattern.matches(&json!(["db", "timeout"])));
        assert!(!pattern.matches(&json!(["db", "refused"])));
        assert!(!pattern.matches(&json!("db")));
    }

    #[test]
    fn test_tagged_matches_tuple_head() {
        let pattern = ReasonPattern::Tagged(json!("db"));
        assert!(pattern.matches(&json!(["db", "timeout"])));
        assert!(pattern.matches(&json!(["db", "query", "timeout"])));
        assert!(!pattern.matches(&json!(["cache", "timeout"])));
        assert!(!pattern.matches(&json!("db")));
    }

    #[test]
    fn test_recover_normalizes_handler_result() {
        let clause = RecoveryClause::new(ReasonPattern::Any, |reason| {
            RawOutcome::failure2("recovered", reason.clone())
        });
        assert_eq!(
            clause.recover(&json!("r")).unwrap(),
            Outcome::failure(json!(["recovered", "r"]))
        );
    }

    #[test]
    fn test_recover_rejects_non_outcome_result() {
        let clause = RecoveryClause::new(ReasonPattern::Any, |_| RawOutcome::other(99));
        let err = clause.recover(&json!("r")).unwrap_err();
        assert_eq!(err.actual, json!(99));
        assert_eq!(err.pattern, "_");
    }
}
