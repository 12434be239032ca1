//! User repository for the `register` table.

use sqlx::PgPool;

use crate::models::{CustomerSummary, User};

use super::RepositoryError;

/// Repository for user account database operations.
pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a user by their account name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<User>, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            r"
            SELECT id, name
            FROM register
            WHERE name = $1
            ",
        )
        .bind(name)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Create a new user with the given name and password.
    ///
    /// The `register.name` column carries a UNIQUE constraint, so a race
    /// between two registrations for the same name resolves here: the loser
    /// gets a unique violation, reported as `Conflict`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the name is already taken.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, name: &str, password: &str) -> Result<User, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            r"
            INSERT INTO register (name, password)
            VALUES ($1, $2)
            RETURNING id, name
            ",
        )
        .bind(name)
        .bind(password)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("user name already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Ok(user)
    }

    /// Check whether a name/password pair matches a stored account.
    ///
    /// Credentials are compared verbatim against the stored values; there is
    /// no hashing layer in this schema.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<bool, RepositoryError> {
        let row = sqlx::query_as::<_, User>(
            r"
            SELECT id, name
            FROM register
            WHERE name = $1 AND password = $2
            ",
        )
        .bind(username)
        .bind(password)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.is_some())
    }

    /// List the account name of every registered user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_names(&self) -> Result<Vec<CustomerSummary>, RepositoryError> {
        let names = sqlx::query_as::<_, CustomerSummary>(
            r"
            SELECT name
            FROM register
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(names)
    }
}
