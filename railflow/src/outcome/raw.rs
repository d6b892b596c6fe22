//! Raw step-function return shapes and their normalization rules.

use super::Outcome;
use crate::errors::MalformedOutcomeError;
use serde_json::Value;

/// The shape a user step function hands back before validation.
///
/// Failures may arrive flattened into two or three parts; normalization
/// collapses them into a single nested-tuple reason (a JSON array) so that
/// no flattened form is observable at a chain or sequence boundary.
/// [`RawOutcome::Other`] covers anything that is not an outcome shape at
/// all — a contract violation surfaced by [`RawOutcome::normalize`].
#[derive(Debug, Clone, PartialEq)]
pub enum RawOutcome {
    /// A well-formed success.
    Success(Value),
    /// A well-formed single-reason failure.
    Failure(Value),
    /// A flattened failure: discriminator parts followed by the payload.
    FailureParts(Vec<Value>),
    /// The bare success sentinel.
    Done,
    /// A value that is not an outcome shape.
    Other(Value),
}

impl RawOutcome {
    /// Creates a raw success.
    #[must_use]
    pub fn success(value: impl Into<Value>) -> Self {
        Self::Success(value.into())
    }

    /// Creates a raw single-reason failure.
    #[must_use]
    pub fn failure(reason: impl Into<Value>) -> Self {
        Self::Failure(reason.into())
    }

    /// Creates a 2-part flattened failure.
    #[must_use]
    pub fn failure2(part: impl Into<Value>, payload: impl Into<Value>) -> Self {
        Self::FailureParts(vec![part.into(), payload.into()])
    }

    /// Creates a 3-part flattened failure.
    #[must_use]
    pub fn failure3(
        first: impl Into<Value>,
        second: impl Into<Value>,
        payload: impl Into<Value>,
    ) -> Self {
        Self::FailureParts(vec![first.into(), second.into(), payload.into()])
    }

    /// Creates a raw non-outcome value.
    #[must_use]
    pub fn other(value: impl Into<Value>) -> Self {
        Self::Other(value.into())
    }

    /// Collapses this raw shape into a canonical [`Outcome`].
    ///
    /// Flattened failures with two or three parts become a single
    /// nested-tuple reason. Any other arity, and any non-outcome value,
    /// is a contract violation.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedOutcomeError`] when the shape is not a recognized
    /// outcome.
    pub fn normalize(self) -> Result<Outcome, MalformedOutcomeError> {
        match self {
            Self::Success(value) => Ok(Outcome::Success(value)),
            Self::Failure(reason) => Ok(Outcome::Failure(reason)),
            Self::Done => Ok(Outcome::Done),
            Self::FailureParts(parts) if parts.len() == 2 || parts.len() == 3 => {
                Ok(Outcome::Failure(Value::Array(parts)))
            }
            Self::FailureParts(parts) => Err(MalformedOutcomeError::new(Value::Array(parts))),
            Self::Other(value) => Err(MalformedOutcomeError::new(value)),
        }
    }
}

impl From<Outcome> for RawOutcome {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success(value) => Self::Success(value),
            Outcome::Failure(reason) => Self::Failure(reason),
            Outcome::Done => Self::Done,
        }
    }
}
