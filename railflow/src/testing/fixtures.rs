//! Sample fallible operations with predictable outcomes.

use crate::outcome::Outcome;
use serde_json::Value;

/// Failure reason produced by [`divide`] on a zero divisor.
pub const ZERO_DIVISION: &str = "zero_division";

/// Integer division that fails on a zero divisor.
#[must_use]
pub fn divide(dividend: i64, divisor: i64) -> Outcome {
    if divisor == 0 {
        Outcome::failure(ZERO_DIVISION)
    } else {
        Outcome::success(dividend / divisor)
    }
}

/// Parses a value as an integer, failing with `not_an_integer` otherwise.
#[must_use]
pub fn parse_integer(value: &Value) -> Outcome {
    match value.as_i64() {
        Some(number) => Outcome::success(number),
        None => Outcome::failure("not_an_integer"),
    }
}
