//! primecheck-domain: Core primality checking logic
//!
//! This crate contains the transport-independent core:
//! - Classification of raw request bodies into candidate integers
//! - Primality evaluation bounded by the integer square root
//! - Assembly of the positional response value
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              primecheck-domain               │
//! ├─────────────────────────────────────────────┤
//! │  classifier  - Raw body → candidates        │
//! │  primality/  - Trial division evaluator     │
//! │  report      - Response assembly            │
//! └─────────────────────────────────────────────┘
//! ```

pub mod classifier;
pub mod error;
pub mod primality;
pub mod report;

// Re-export commonly used types at the crate root
pub use classifier::{classify, Classification};
pub use error::RejectReason;
pub use primality::{evaluate, is_prime};
pub use report::{check_primes, PrimeCheckResponse};
