//! Database operations for the Peppercorn `PostgreSQL` store.
//!
//! # Tables
//!
//! - `register` - Storefront user accounts (name UNIQUE)
//! - `adminlogin` - Admin credentials (read-only lookup table, seeded out of band)
//! - `products` - Product catalog
//! - `orders` - Placed orders (append-only)
//! - `cart` - Cart line items (append-only, duplicates allowed)
//! - `details` - Customer contact/shipping records
//!
//! # Migrations
//!
//! Migrations live in `crates/api/migrations/` and are embedded via
//! `sqlx::migrate!`, applied once at startup.

pub mod admins;
pub mod cart;
pub mod details;
pub mod orders;
pub mod products;
pub mod users;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use admins::AdminRepository;
pub use cart::CartRepository;
pub use details::CustomerDetailRepository;
pub use orders::OrderRepository;
pub use products::ProductRepository;
pub use users::UserRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., duplicate user name).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// The connection string is expected to carry `sslmode=verify-full` (or at
/// least `require`); server certificates are validated by the rustls-backed
/// TLS stack and untrusted certificates are rejected.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
