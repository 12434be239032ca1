//! User account types.

use serde::Serialize;

use peppercorn_core::UserId;

/// A registered storefront user.
///
/// The stored password never leaves the `db` module; this type carries only
/// the columns the API exposes.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Unique account name.
    pub name: String,
}

/// Row shape for the customer listing (name column only).
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CustomerSummary {
    /// The customer's account name.
    pub name: String,
}
