//! Order types.

use rust_decimal::Decimal;
use serde::Serialize;

use peppercorn_core::OrderId;

/// A placed order. Rows are append-only; there is no update or delete path.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Order {
    /// Storage-assigned ID; listings sort on it descending.
    pub id: OrderId,
    /// Name of the user who placed the order.
    pub username: String,
    pub product_id: i32,
    pub product_name: String,
    pub price: Decimal,
    pub image: String,
}

/// Insert payload for a new order. All fields are mandatory at the edge.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub username: String,
    pub product_id: i32,
    pub product_name: String,
    pub price: Decimal,
    pub image: String,
}
