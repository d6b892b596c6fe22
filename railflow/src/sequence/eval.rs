//! The step-sequence evaluator with short-circuit and recovery semantics.

use super::{Pattern, RecoveryClause, Scope, SequenceBuilder, Step};
use crate::errors::{BindError, RailflowError};
use crate::outcome::{Outcome, RawOutcome};
use serde_json::Value;
use tracing::{debug, trace};

/// An ordered list of steps with optional recovery clauses.
///
/// A sequence is constructed once via [`Sequence::builder`] and may be
/// evaluated any number of times; each evaluation gets a fresh [`Scope`]
/// and produces exactly one [`Outcome`]. Steps run head-to-tail, strictly
/// sequentially: the first failure terminates the step phase immediately
/// and no later step is evaluated.
#[derive(Debug)]
pub struct Sequence {
    steps: Vec<Step>,
    recovery: Vec<RecoveryClause>,
}

impl Sequence {
    pub(crate) fn new(steps: Vec<Step>, recovery: Vec<RecoveryClause>) -> Self {
        Self { steps, recovery }
    }

    /// Creates a builder for a new sequence.
    #[must_use]
    pub fn builder() -> SequenceBuilder {
        SequenceBuilder::new()
    }

    /// Returns the number of steps.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if recovery clauses are attached.
    #[must_use]
    pub fn has_recovery(&self) -> bool {
        !self.recovery.is_empty()
    }

    /// Evaluates the sequence: the step phase followed by the recovery
    /// phase.
    ///
    /// A successful step phase (including the bare sentinel) returns
    /// unchanged; a terminal failure is offered to the recovery clauses in
    /// declaration order, first match wins, and propagates unchanged when
    /// nothing matches.
    ///
    /// # Errors
    ///
    /// Returns [`RailflowError`] on contract violations: a step or recovery
    /// handler producing a non-outcome value, a binding that cannot accept
    /// the returned shape, or an empty step list.
    pub fn evaluate(&self) -> Result<Outcome, RailflowError> {
        if self.steps.is_empty() {
            return Err(RailflowError::EmptySequence);
        }
        let result = self.run_steps()?;
        self.run_recovery(result)
    }

    fn run_steps(&self) -> Result<Outcome, RailflowError> {
        let mut scope = Scope::new();
        let last = self.steps.len() - 1;

        for (index, step) in self.steps.iter().enumerate() {
            trace!(
                step = index,
                kind = step.kind_name(),
                expression = step.expr().text(),
                "evaluating step"
            );
            let raw = step.expr().evaluate(&scope);

            match step {
                Step::Bind { pattern, expr } => match raw {
                    RawOutcome::Success(value) => {
                        if let Pattern::Bind(name) = pattern {
                            scope.bind(name.clone(), value.clone());
                        }
                        if index == last {
                            return Ok(Outcome::Success(value));
                        }
                    }
                    RawOutcome::Done => {
                        if let Pattern::Bind(name) = pattern {
                            return Err(BindError::new(
                                name.clone(),
                                expr.text(),
                                Value::String("done".to_string()),
                            )
                            .into());
                        }
                        if index == last {
                            return Ok(Outcome::Done);
                        }
                    }
                    RawOutcome::Failure(_) | RawOutcome::FailureParts(_) => {
                        let failure = raw
                            .normalize()
                            .map_err(|err| err.with_expression(expr.text()))?;
                        debug!(step = index, result = %failure, "sequence short-circuited");
                        return Ok(failure);
                    }
                    RawOutcome::Other(actual) => {
                        return Err(
                            BindError::new(pattern.to_string(), expr.text(), actual).into()
                        );
                    }
                },
                Step::Plain { expr } => {
                    if index == last {
                        return raw
                            .normalize()
                            .map_err(|err| err.with_expression(expr.text()).into());
                    }
                }
            }
        }

        Err(RailflowError::EmptySequence)
    }

    fn run_recovery(&self, result: Outcome) -> Result<Outcome, RailflowError> {
        let Outcome::Failure(reason) = result else {
            return Ok(result);
        };

        for clause in &self.recovery {
            if clause.pattern().matches(&reason) {
                debug!(pattern = %clause.pattern(), "recovery clause fired");
                return clause.recover(&reason).map_err(RailflowError::from);
            }
        }

        Ok(Outcome::Failure(reason))
    }
}
