//! Cart repository for the `cart` table.

use sqlx::PgPool;

use crate::models::{CartItem, NewCartItem};

use super::RepositoryError;

/// Repository for cart line-item database operations.
pub struct CartRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert one cart row unconditionally; no dedup, no upsert.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn add(&self, item: &NewCartItem) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO cart (username, product_id, title, price, image)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(&item.username)
        .bind(item.product_id)
        .bind(item.title.as_deref())
        .bind(item.price)
        .bind(item.image.as_deref())
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// List the cart rows for one user. An empty cart is an empty list, not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_user(&self, username: &str) -> Result<Vec<CartItem>, RepositoryError> {
        let rows = sqlx::query_as::<_, CartItem>(
            r"
            SELECT id, username, product_id, title, price, image
            FROM cart
            WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
