//! Order route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;

use crate::db::OrderRepository;
use crate::error::{AppError, Result};
use crate::models::NewOrder;
use crate::state::AppState;

use super::non_empty;

/// Order placement request body. Clients send camelCase keys; rows come back
/// with the snake_case column names.
#[derive(Debug, Deserialize)]
pub struct PlaceOrderRequest {
    pub username: Option<String>,
    #[serde(rename = "productId")]
    pub product_id: Option<i32>,
    #[serde(rename = "productName")]
    pub product_name: Option<String>,
    pub price: Option<Decimal>,
    pub image: Option<String>,
}

impl PlaceOrderRequest {
    /// Validate that all five fields are present and populated.
    ///
    /// Empty strings and zero values count as absent, so `productId: 0` or
    /// `price: 0` rejects just like a missing key.
    ///
    /// # Errors
    ///
    /// Returns `AppError::MissingOrderFields` when any field is absent.
    pub fn validate(self) -> Result<NewOrder> {
        let username = non_empty(self.username.as_deref());
        let product_name = non_empty(self.product_name.as_deref());
        let image = non_empty(self.image.as_deref());
        let product_id = self.product_id.filter(|id| *id != 0);
        let price = self.price.filter(|p| !p.is_zero());

        match (username, product_id, product_name, price, image) {
            (Some(username), Some(product_id), Some(product_name), Some(price), Some(image)) => {
                Ok(NewOrder {
                    username: username.to_owned(),
                    product_id,
                    product_name: product_name.to_owned(),
                    price,
                    image: image.to_owned(),
                })
            }
            _ => Err(AppError::MissingOrderFields),
        }
    }
}

/// Handle `POST /orders`.
///
/// Validation happens before any storage access; an invalid request inserts
/// nothing.
///
/// # Errors
///
/// Returns `AppError::MissingOrderFields` or `AppError::Database`.
pub async fn place_order(
    State(state): State<AppState>,
    Json(body): Json<PlaceOrderRequest>,
) -> Result<impl IntoResponse> {
    let order = body.validate()?;

    OrderRepository::new(state.pool()).create(&order).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Order placed successfully" })),
    ))
}

/// Handle `GET /orders`.
///
/// Most recent order first; an empty history is an empty list.
///
/// # Errors
///
/// Returns `AppError::Database` if the query fails.
pub async fn list_all_orders(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let orders = OrderRepository::new(state.pool()).list_all().await?;
    Ok(Json(orders))
}

/// Handle `GET /orders/{username}`.
///
/// Unlike the cart listing, a user with zero orders is a 404, not an empty
/// list. Clients rely on that asymmetry.
///
/// # Errors
///
/// Returns `AppError::NoOrdersForUser` or `AppError::Database`.
pub async fn list_orders_for_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse> {
    let orders = OrderRepository::new(state.pool())
        .list_for_user(&username)
        .await?;

    if orders.is_empty() {
        return Err(AppError::NoOrdersForUser);
    }

    Ok(Json(orders))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> PlaceOrderRequest {
        PlaceOrderRequest {
            username: Some("jane".to_owned()),
            product_id: Some(3),
            product_name: Some("Peppercorn Grinder".to_owned()),
            price: Some(Decimal::new(1999, 2)),
            image: Some("/img/grinder.png".to_owned()),
        }
    }

    #[test]
    fn test_validate_complete_request() {
        let order = full_request().validate().expect("should validate");
        assert_eq!(order.username, "jane");
        assert_eq!(order.product_id, 3);
        assert_eq!(order.price, Decimal::new(1999, 2));
    }

    #[test]
    fn test_validate_rejects_each_missing_field() {
        let mut req = full_request();
        req.username = None;
        assert!(matches!(req.validate(), Err(AppError::MissingOrderFields)));

        let mut req = full_request();
        req.product_id = None;
        assert!(matches!(req.validate(), Err(AppError::MissingOrderFields)));

        let mut req = full_request();
        req.product_name = None;
        assert!(matches!(req.validate(), Err(AppError::MissingOrderFields)));

        let mut req = full_request();
        req.price = None;
        assert!(matches!(req.validate(), Err(AppError::MissingOrderFields)));

        let mut req = full_request();
        req.image = None;
        assert!(matches!(req.validate(), Err(AppError::MissingOrderFields)));
    }

    #[test]
    fn test_validate_rejects_empty_and_zero_values() {
        let mut req = full_request();
        req.username = Some(String::new());
        assert!(matches!(req.validate(), Err(AppError::MissingOrderFields)));

        let mut req = full_request();
        req.price = Some(Decimal::ZERO);
        assert!(matches!(req.validate(), Err(AppError::MissingOrderFields)));

        let mut req = full_request();
        req.product_id = Some(0);
        assert!(matches!(req.validate(), Err(AppError::MissingOrderFields)));
    }
}
