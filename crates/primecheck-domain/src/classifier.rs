//! Classification of raw request bodies.
//!
//! A body is accepted only when it is a JSON array whose elements are all
//! integers in the `i64` range. Anything else is rejected as a whole: there
//! are no partial results.
//!
//! Integer-valued floats such as `3.0` are rejected. Only JSON numbers
//! without a fraction or exponent classify as integers.

use serde_json::Value;

use crate::error::RejectReason;

/// Outcome of classifying a request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The body is a sequence of candidate integers, in wire order.
    Candidates(Vec<i64>),
    /// The body is not a usable integer sequence.
    Rejected(RejectReason),
}

impl Classification {
    /// Returns the candidates, or `None` if the body was rejected.
    pub fn into_candidates(self) -> Option<Vec<i64>> {
        match self {
            Classification::Candidates(candidates) => Some(candidates),
            Classification::Rejected(_) => None,
        }
    }

    /// Returns true if the body was rejected.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Classification::Rejected(_))
    }
}

/// Classifies a raw request body.
///
/// Never panics and never fails: malformed input yields
/// [`Classification::Rejected`]. An empty array yields an empty
/// [`Classification::Candidates`], which is distinct from a rejection.
pub fn classify(raw_body: &[u8]) -> Classification {
    let value: Value = match serde_json::from_slice(raw_body) {
        Ok(value) => value,
        Err(e) => {
            return Classification::Rejected(RejectReason::Malformed {
                message: e.to_string(),
            })
        }
    };

    let elements = match value {
        Value::Array(elements) => elements,
        other => {
            return Classification::Rejected(RejectReason::NotAnArray {
                found: value_kind(&other),
            })
        }
    };

    let mut candidates = Vec::with_capacity(elements.len());
    for (index, element) in elements.iter().enumerate() {
        match element.as_i64() {
            Some(n) => candidates.push(n),
            None => {
                return Classification::Rejected(RejectReason::NonIntegerElement {
                    index,
                    found: value_kind(element),
                })
            }
        }
    }

    Classification::Candidates(candidates)
}

/// Short description of a JSON value's shape, for reject reasons.
fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "floating-point number",
        Value::Number(n) if n.is_i64() => "integer",
        Value::Number(_) => "integer out of range",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
