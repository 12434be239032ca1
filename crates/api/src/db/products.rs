//! Product repository for the `products` table.

use sqlx::PgPool;

use peppercorn_core::ProductId;

use crate::models::{NewProduct, Product};

use super::RepositoryError;

/// Repository for product catalog database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a product and return the persisted row, ID included.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let row = sqlx::query_as::<_, Product>(
            r"
            INSERT INTO products (name, description, image, price)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, image, price
            ",
        )
        .bind(product.name.as_deref())
        .bind(product.description.as_deref())
        .bind(product.image.as_deref())
        .bind(product.price)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// List every product in natural storage order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, Product>(
            r"
            SELECT id, name, description, image, price
            FROM products
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Get a single product by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, Product>(
            r"
            SELECT id, name, description, image, price
            FROM products
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }
}
