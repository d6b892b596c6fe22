//! Step and pattern representations for a sequence.

use super::Scope;
use crate::outcome::RawOutcome;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The left-hand side of a binding step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pattern {
    /// `_`: accept any success without binding.
    Wildcard,
    /// The bare-ok sentinel literal: accept `Done` or any success without
    /// binding.
    Done,
    /// Bind the success value to a name for later steps.
    Bind(String),
}

impl Pattern {
    /// True when the pattern binds no name.
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        !matches!(self, Self::Bind(_))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wildcard => write!(f, "_"),
            Self::Done => write!(f, "done"),
            Self::Bind(name) => write!(f, "{name}"),
        }
    }
}

type EvalFn = Box<dyn Fn(&Scope) -> RawOutcome + Send + Sync>;

/// An evaluatable expression together with its authored text.
///
/// The text is carried purely for diagnostics: contract-violation errors
/// quote it so the offending step can be found in the code that built the
/// sequence.
pub struct Expr {
    text: String,
    run: EvalFn,
}

impl Expr {
    /// Creates an expression from its authored text and evaluator.
    pub fn new(
        text: impl Into<String>,
        run: impl Fn(&Scope) -> RawOutcome + Send + Sync + 'static,
    ) -> Self {
        Self {
            text: text.into(),
            run: Box::new(run),
        }
    }

    /// Returns the authored text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Evaluates the expression against the current scope.
    #[must_use]
    pub fn evaluate(&self, scope: &Scope) -> RawOutcome {
        (self.run)(scope)
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expr")
            .field("text", &self.text)
            .finish_non_exhaustive()
    }
}

/// One element of a step sequence.
#[derive(Debug)]
pub enum Step {
    /// Extracts a success value from an outcome-producing expression for
    /// use by later steps; short-circuits the sequence on failure.
    Bind {
        /// The binding pattern.
        pattern: Pattern,
        /// The outcome-producing expression.
        expr: Expr,
    },
    /// Arbitrary evaluation whose result is discarded unless it is the
    /// final step.
    Plain {
        /// The expression to evaluate.
        expr: Expr,
    },
}

impl Step {
    /// Creates a binding step.
    #[must_use]
    pub fn bind(pattern: Pattern, expr: Expr) -> Self {
        Self::Bind { pattern, expr }
    }

    /// Creates a plain step.
    #[must_use]
    pub fn plain(expr: Expr) -> Self {
        Self::Plain { expr }
    }

    /// Returns the step's expression.
    #[must_use]
    pub fn expr(&self) -> &Expr {
        match self {
            Self::Bind { expr, .. } | Self::Plain { expr } => expr,
        }
    }

    /// Returns the step kind name, for logging.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bind { .. } => "bind",
            Self::Plain { .. } => "plain",
        }
    }
}
