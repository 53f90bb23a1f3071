//! HTTP endpoints.
//!
//! | Endpoint   | Method | Description                          |
//! |------------|--------|--------------------------------------|
//! | `/`        | POST   | Primality check for a JSON array     |
//! | `/health`  | GET    | Liveness probe                       |
//! | `/metrics` | GET    | Prometheus metrics, when enabled     |

pub mod routes;

pub use routes::{build_router, create_router};
