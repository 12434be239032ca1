//! Shopping cart types.

use rust_decimal::Decimal;
use serde::Serialize;

use peppercorn_core::CartItemId;

/// A cart line item.
///
/// Only `username` is validated on insertion; the remaining columns are
/// nullable pass-throughs. Duplicate additions produce duplicate rows.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CartItem {
    /// Storage-assigned ID.
    pub id: CartItemId,
    /// Name of the user who owns this cart line.
    pub username: String,
    pub product_id: Option<i32>,
    pub title: Option<String>,
    pub price: Option<Decimal>,
    pub image: Option<String>,
}

/// Insert payload for a cart addition.
#[derive(Debug, Clone)]
pub struct NewCartItem {
    pub username: String,
    pub product_id: Option<i32>,
    pub title: Option<String>,
    pub price: Option<Decimal>,
    pub image: Option<String>,
}
