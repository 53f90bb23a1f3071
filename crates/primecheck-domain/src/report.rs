//! Response assembly.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classifier::{classify, Classification};
use crate::primality::evaluate;

/// Response body for a primality check.
///
/// `is_prime` is `None` when the request body was rejected, and serializes
/// as `null`. An accepted empty array yields `Some(vec![])`, so callers can
/// tell "zero results" from "no results".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimeCheckResponse {
    pub is_prime: Option<Vec<bool>>,
}

impl PrimeCheckResponse {
    /// Response for a rejected body.
    pub fn rejected() -> Self {
        Self { is_prime: None }
    }

    /// Response carrying evaluated results.
    pub fn evaluated(results: Vec<bool>) -> Self {
        Self {
            is_prime: Some(results),
        }
    }

    /// Number of candidates found to be prime.
    pub fn prime_count(&self) -> usize {
        self.is_prime
            .as_deref()
            .map_or(0, |results| results.iter().filter(|&&p| p).count())
    }
}

/// Classifies a raw body and evaluates every candidate.
///
/// This is the whole request pipeline minus the transport. It is pure: the
/// same body always yields the same response.
pub fn check_primes(raw_body: &[u8]) -> PrimeCheckResponse {
    match classify(raw_body) {
        Classification::Candidates(candidates) => {
            debug!(candidates = candidates.len(), "evaluating candidates");
            PrimeCheckResponse::evaluated(evaluate(&candidates))
        }
        Classification::Rejected(reason) => {
            debug!(%reason, "rejected request body");
            PrimeCheckResponse::rejected()
        }
    }
}
