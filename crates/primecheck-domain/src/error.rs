//! Classification failure reasons.

use thiserror::Error;

/// Why a request body could not be classified as a sequence of integers.
///
/// Rejection is not a transport error: the HTTP layer answers a rejected
/// body with `200 OK` and a null result set. The reason exists only for
/// diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    /// The body is not well-formed JSON.
    #[error("malformed JSON: {message}")]
    Malformed { message: String },

    /// The body is valid JSON but not an array.
    #[error("expected a JSON array, found {found}")]
    NotAnArray { found: &'static str },

    /// An element of the array is not an integer in the signed 64-bit range.
    #[error("element {index} is not a 64-bit integer: found {found}")]
    NonIntegerElement { index: usize, found: &'static str },
}
