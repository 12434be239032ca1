//! Order repository for the `orders` table.

use sqlx::PgPool;

use crate::models::{NewOrder, Order};

use super::RepositoryError;

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert one order row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, order: &NewOrder) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO orders (username, product_id, product_name, price, image)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(&order.username)
        .bind(order.product_id)
        .bind(&order.product_name)
        .bind(order.price)
        .bind(&order.image)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// List every order, most recent first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query_as::<_, Order>(
            r"
            SELECT id, username, product_id, product_name, price, image
            FROM orders
            ORDER BY id DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// List the orders for one user, in natural storage order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_user(&self, username: &str) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query_as::<_, Order>(
            r"
            SELECT id, username, product_id, product_name, price, image
            FROM orders
            WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
