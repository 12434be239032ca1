//! Admin credential repository for the `adminlogin` table.
//!
//! The table is read-only from this service's perspective: rows are seeded
//! out of band and never created or mutated here.

use sqlx::PgPool;

use super::RepositoryError;

/// Repository for admin credential lookups.
pub struct AdminRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AdminRepository<'a> {
    /// Create a new admin repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Check whether a username/password pair matches a stored admin row.
    ///
    /// Same verbatim comparison as user login; admin credentials share the
    /// unhashed schema.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<bool, RepositoryError> {
        let row: Option<(i32,)> = sqlx::query_as(
            r"
            SELECT id
            FROM adminlogin
            WHERE username = $1 AND password = $2
            ",
        )
        .bind(username)
        .bind(password)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.is_some())
    }
}
