//! Error types for contract violations in the outcome algebra.
//!
//! Domain failures travel through the algebra as ordinary
//! [`Outcome::Failure`](crate::outcome::Outcome::Failure) values. The types
//! in this module cover the other class: programmer errors such as a step
//! function returning something that is not an outcome shape. They abort
//! evaluation with enough context to locate the offending step and are never
//! converted into domain failures.

use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// The main error type for railflow contract violations.
#[derive(Debug, Error)]
pub enum RailflowError {
    /// A binding step received a value it cannot bind.
    #[error("{0}")]
    Bind(#[from] BindError),

    /// A step or chain produced a value that is not a well-formed outcome.
    #[error("{0}")]
    MalformedOutcome(#[from] MalformedOutcomeError),

    /// A recovery handler produced a value that is not a well-formed outcome.
    #[error("{0}")]
    Recovery(#[from] RecoveryError),

    /// A sequence was built or evaluated without any steps.
    #[error("empty step sequence: a sequence needs at least one step")]
    EmptySequence,
}

/// Error raised when a binding step cannot bind the value its expression
/// returned.
///
/// Carries the authored pattern and expression text so the offending step
/// can be located in the source that built the sequence.
#[derive(Debug, Clone, Error)]
#[error("cannot bind `{pattern}` from `{expression}`: got {actual}")]
pub struct BindError {
    /// The authored pattern text.
    pub pattern: String,
    /// The authored expression text.
    pub expression: String,
    /// The value the expression actually returned.
    pub actual: Value,
}

impl BindError {
    /// Creates a new bind error.
    #[must_use]
    pub fn new(
        pattern: impl Into<String>,
        expression: impl Into<String>,
        actual: Value,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            expression: expression.into(),
            actual,
        }
    }

    /// Converts to a dictionary representation.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, Value> {
        let mut map = HashMap::new();
        map.insert("type".to_string(), serde_json::json!("BindError"));
        map.insert("pattern".to_string(), serde_json::json!(self.pattern));
        map.insert("expression".to_string(), serde_json::json!(self.expression));
        map.insert("actual".to_string(), self.actual.clone());
        map.insert("message".to_string(), serde_json::json!(self.to_string()));
        map
    }
}

/// Error raised when a value that must be a well-formed outcome is not one.
///
/// Raised by normalization for unrecognized shapes and by the evaluator when
/// a sequence's terminal step yields a non-outcome value.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct MalformedOutcomeError {
    /// The error message.
    pub message: String,
    /// The authored expression text, when the value came from a step.
    pub expression: Option<String>,
    /// The offending value.
    pub actual: Value,
}

impl MalformedOutcomeError {
    /// Creates a new malformed outcome error.
    #[must_use]
    pub fn new(actual: Value) -> Self {
        Self {
            message: format!("value is not a well-formed outcome: {actual}"),
            expression: None,
            actual,
        }
    }

    /// Attaches the expression text the value came from.
    #[must_use]
    pub fn with_expression(mut self, expression: impl Into<String>) -> Self {
        let expression = expression.into();
        self.message = format!(
            "`{expression}` produced a value that is not a well-formed outcome: {}",
            self.actual
        );
        self.expression = Some(expression);
        self
    }

    /// Converts to a dictionary representation.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, Value> {
        let mut map = HashMap::new();
        map.insert("type".to_string(), serde_json::json!("MalformedOutcome"));
        if let Some(ref expression) = self.expression {
            map.insert("expression".to_string(), serde_json::json!(expression));
        }
        map.insert("actual".to_string(), self.actual.clone());
        map.insert("message".to_string(), serde_json::json!(self.message));
        map
    }
}

/// Error raised when a recovery handler returns a non-outcome value.
#[derive(Debug, Clone, Error)]
#[error("recovery clause `{pattern}` returned a value that is not a well-formed outcome: {actual}")]
pub struct RecoveryError {
    /// The clause pattern that matched.
    pub pattern: String,
    /// The value the handler actually returned.
    pub actual: Value,
}

impl RecoveryError {
    /// Creates a new recovery error.
    #[must_use]
    pub fn new(pattern: impl Into<String>, actual: Value) -> Self {
        Self {
            pattern: pattern.into(),
            actual,
        }
    }

    /// Converts to a dictionary representation.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, Value> {
        let mut map = HashMap::new();
        map.insert("type".to_string(), serde_json::json!("RecoveryError"));
        map.insert("pattern".to_string(), serde_json::json!(self.pattern));
        map.insert("actual".to_string(), self.actual.clone());
        map.insert("message".to_string(), serde_json::json!(self.to_string()));
        map
    }
}
