//! The single-step bind primitive and left-to-right pipe chaining.

use crate::outcome::Outcome;
use serde_json::Value;

/// Applies `f` to the success value of `outcome`.
///
/// On `Success(v)` the result is `f(v)`, trusted to already be a well-formed
/// outcome. On `Failure` the reason propagates unchanged and `f` is never
/// invoked, so the failure path carries no side effects. The bare sentinel
/// also passes through untouched: a payload-less success has nothing to feed
/// the callee.
pub fn bind<F>(outcome: Outcome, f: F) -> Outcome
where
    F: FnOnce(Value) -> Outcome,
{
    match outcome {
        Outcome::Success(value) => f(value),
        Outcome::Failure(reason) => Outcome::Failure(reason),
        Outcome::Done => Outcome::Done,
    }
}

/// Left-to-right chaining over outcomes and bare starting values.
///
/// Implemented for [`Outcome`] (each link binds over the previous success)
/// and for [`Value`] (a bare starting value is lifted by applying the first
/// link to it directly). Method chaining keeps the composition purely
/// left-associative; once any link fails, every later link is skipped.
///
/// ```
/// use railflow::chain::Pipe;
/// use railflow::outcome::Outcome;
/// use serde_json::json;
///
/// let result = json!(8)
///     .pipe(|v| Outcome::success(v.as_i64().unwrap_or(0) / 2))
///     .pipe(|v| Outcome::success(v.as_i64().unwrap_or(0) / 2));
/// assert_eq!(result, Outcome::success(2));
/// ```
pub trait Pipe {
    /// Feeds this value into the next link of the chain.
    fn pipe<F>(self, f: F) -> Outcome
    where
        F: FnOnce(Value) -> Outcome;
}

impl Pipe for Outcome {
    fn pipe<F>(self, f: F) -> Outcome
    where
        F: FnOnce(Value) -> Outcome,
    {
        bind(self, f)
    }
}

impl Pipe for Value {
    fn pipe<F>(self, f: F) -> Outcome
    where
        F: FnOnce(Value) -> Outcome,
    {
        f(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn double(value: Value) -> Outcome {
        Outcome::success(value.as_i64().unwrap_or(0) * 2)
    }

    #[test]
    fn test_bind_identity_on_success() {
        assert_eq!(bind(Outcome::success(3), double), double(json!(3)));
    }

    #[test]
    fn test_bind_absorption_on_failure() {
        let mut invoked = false;
        let result = bind(Outcome::failure("nope"), |value| {
            invoked = true;
            double(value)
        });
        assert_eq!(result, Outcome::failure("nope"));
        assert!(!invoked);
    }

    #[test]
    fn test_bind_passes_sentinel_through() {
        let mut invoked = false;
        let result = bind(Outcome::Done, |value| {
            invoked = true;
            double(value)
        });
        assert_eq!(result, Outcome::Done);
        assert!(!invoked);
    }

    #[test]
    fn test_pipe_lifts_bare_value() {
        assert_eq!(json!(4).pipe(double), Outcome::success(8));
    }

    #[test]
    fn test_chain_short_circuits_after_first_failure() {
        let mut later_links = 0;
        let result = json!(8)
            .pipe(|_| Outcome::failure("early"))
            .pipe(|value| {
                later_links += 1;
                double(value)
            })
            .pipe(|value| {
                later_links += 1;
                double(value)
            });
        assert_eq!(result, Outcome::failure("early"));
        assert_eq!(later_links, 0);
    }

    #[test]
    fn test_chain_threads_values_left_to_right() {
        let result = json!(1).pipe(double).pipe(double).pipe(double);
        assert_eq!(result, Outcome::success(8));
    }
}
