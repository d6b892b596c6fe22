//! Testing utilities for exercising the outcome algebra.
//!
//! This module provides:
//! - Sample fallible operations with predictable outcomes
//! - A thread-safe call counter for asserting short-circuit behavior

mod fixtures;
mod mocks;

pub use fixtures::{divide, parse_integer, ZERO_DIVISION};
pub use mocks::CallCounter;
