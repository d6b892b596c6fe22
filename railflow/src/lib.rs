//! # Railflow
//!
//! A small algebra for composing operations that each either succeed with a
//! value or fail with a reason, without deeply nested conditionals.
//!
//! Railflow provides:
//!
//! - **Outcome model**: a canonical success/failure representation with
//!   normalization of flattened multi-part failures
//! - **Chaining**: a bind primitive and left-to-right pipe composition with
//!   exactly-once short-circuit semantics
//! - **Step sequences**: an evaluator for ordered binding and plain steps,
//!   where any failure aborts the remaining steps and surfaces unchanged
//! - **Recovery**: pattern-matched post-failure clauses producing a new,
//!   validated outcome
//! - **Combinators**: map / tee / try_catch / found and the tag family for
//!   adapting plain operations into the algebra
//!
//! ## Quick Start
//!
//! ```rust
//! use railflow::prelude::*;
//!
//! fn divide(x: i64, y: i64) -> RawOutcome {
//!     if y == 0 {
//!         RawOutcome::failure("zero_division")
//!     } else {
//!         RawOutcome::success(x / y)
//!     }
//! }
//!
//! let sequence = Sequence::builder()
//!     .bind("a", Expr::new("divide(8, 2)", |_| divide(8, 2)))
//!     .bind("b", Expr::new("divide(a, 2)", |scope| {
//!         divide(scope.integer("a").unwrap_or(0), 2)
//!     }))
//!     .build()?;
//!
//! assert_eq!(sequence.evaluate()?, Outcome::success(2));
//! # Ok::<(), railflow::errors::RailflowError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod chain;
pub mod combinators;
pub mod errors;
pub mod outcome;
pub mod sequence;
pub mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::chain::{bind, Pipe};
    pub use crate::errors::{
        BindError, MalformedOutcomeError, RailflowError, RecoveryError,
    };
    pub use crate::outcome::{Outcome, RawOutcome, TagRules, Tags};
    pub use crate::sequence::{
        Expr, Pattern, ReasonPattern, RecoveryClause, Scope, Sequence,
        SequenceBuilder, Step,
    };
}
