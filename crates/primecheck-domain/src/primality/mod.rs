//! Primality evaluation.
//!
//! This module contains:
//! - `is_prime` - deterministic trial division for a single candidate
//! - `evaluate` - positional evaluation of a candidate sequence

mod evaluator;

mod evaluator_proptest;

pub use evaluator::{evaluate, is_prime};
