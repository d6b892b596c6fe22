//! Sequence builder with construction-time validation.

use super::{Expr, Pattern, RecoveryClause, Sequence, Step};
use crate::errors::RailflowError;

/// Builder for [`Sequence`] values.
///
/// Steps and recovery clauses keep their insertion order; `build` rejects
/// an empty step list, which is a caller error rather than an evaluatable
/// sequence.
#[derive(Debug, Default)]
pub struct SequenceBuilder {
    steps: Vec<Step>,
    recovery: Vec<RecoveryClause>,
}

impl SequenceBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a binding step that binds the success value to `name`.
    #[must_use]
    pub fn bind(mut self, name: impl Into<String>, expr: Expr) -> Self {
        self.steps.push(Step::bind(Pattern::Bind(name.into()), expr));
        self
    }

    /// Adds a binding step with an explicit pattern.
    #[must_use]
    pub fn bind_pattern(mut self, pattern: Pattern, expr: Expr) -> Self {
        self.steps.push(Step::bind(pattern, expr));
        self
    }

    /// Adds a plain step.
    #[must_use]
    pub fn plain(mut self, expr: Expr) -> Self {
        self.steps.push(Step::plain(expr));
        self
    }

    /// Adds a recovery clause. Clauses match in insertion order.
    #[must_use]
    pub fn recover(mut self, clause: RecoveryClause) -> Self {
        self.recovery.push(clause);
        self
    }

    /// Builds the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`RailflowError::EmptySequence`] if no steps were added.
    pub fn build(self) -> Result<Sequence, RailflowError> {
        if self.steps.is_empty() {
            return Err(RailflowError::EmptySequence);
        }
        Ok(Sequence::new(self.steps, self.recovery))
    }
}
