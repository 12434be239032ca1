//! Integration tests for Peppercorn.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and the API server
//! cargo run -p peppercorn-api
//!
//! # Run integration tests
//! cargo test -p peppercorn-integration-tests -- --ignored
//! ```
//!
//! All tests are `#[ignore]`-gated because they need a running server; the
//! base URL defaults to `http://localhost:3000` and can be overridden with
//! `API_BASE_URL`.

use uuid::Uuid;

/// Base URL for the API (configurable via environment).
#[must_use]
pub fn api_base_url() -> String {
    std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// A fresh, unused account name for registration tests.
#[must_use]
pub fn unique_name(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4().simple())
}
