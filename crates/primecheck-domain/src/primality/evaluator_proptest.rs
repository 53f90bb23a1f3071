//! Property-based tests for the primality evaluator.
