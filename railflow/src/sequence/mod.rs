//! Step sequences: ordered fallible steps with short-circuit evaluation
//! and an optional recovery phase.
//!
//! A [`Sequence`] is the runtime representation of an authored
//! extract-or-abort block: an ordered list of binding and plain steps, plus
//! recovery clauses matched against a terminal failure. Construction goes
//! through [`SequenceBuilder`]; evaluation is strictly sequential and
//! produces exactly one [`Outcome`](crate::outcome::Outcome).

mod builder;
mod eval;
mod recovery;
mod scope;
mod step;


pub use builder::SequenceBuilder;
pub use eval::Sequence;
pub use recovery::{ReasonPattern, RecoveryClause};
pub use scope::Scope;
pub use step::{Expr, Pattern, Step};
