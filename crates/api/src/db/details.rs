//! Customer detail repository for the `details` table.

use sqlx::PgPool;

use crate::models::{CustomerDetail, NewCustomerDetail};

use super::RepositoryError;

/// Repository for customer contact/shipping records.
pub struct CustomerDetailRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CustomerDetailRepository<'a> {
    /// Create a new customer detail repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a detail record and return the persisted row, ID included.
    ///
    /// No uniqueness is enforced; repeated submissions for the same name
    /// create additional rows.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        detail: &NewCustomerDetail,
    ) -> Result<CustomerDetail, RepositoryError> {
        let row = sqlx::query_as::<_, CustomerDetail>(
            r"
            INSERT INTO details (name, mobile, address)
            VALUES ($1, $2, $3)
            RETURNING id, name, mobile, address
            ",
        )
        .bind(detail.name.as_str())
        .bind(detail.mobile.as_str())
        .bind(&detail.address)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }
}
