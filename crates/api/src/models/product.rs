//! Product catalog types.

use rust_decimal::Decimal;
use serde::Serialize;

use peppercorn_core::ProductId;

/// A catalog product.
///
/// Every column except the ID is nullable: product submission performs no
/// field validation, so partial rows are representable.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Product {
    /// Storage-assigned ID.
    pub id: ProductId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub price: Option<Decimal>,
}

/// Insert payload for a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub price: Option<Decimal>,
}
