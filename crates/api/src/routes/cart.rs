//! Cart route handlers.

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;

use crate::db::CartRepository;
use crate::error::{AppError, Result};
use crate::models::NewCartItem;
use crate::state::AppState;

use super::non_empty;

/// Cart addition request body.
///
/// Only `username` is mandatory; the remaining fields pass through to
/// nullable columns unchecked. The asymmetry with order placement is
/// long-standing observable behavior, not an oversight to fix here.
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub username: Option<String>,
    #[serde(rename = "productId")]
    pub product_id: Option<i32>,
    pub title: Option<String>,
    pub price: Option<Decimal>,
    pub image: Option<String>,
}

impl AddToCartRequest {
    /// Validate the username and build the insert payload.
    ///
    /// # Errors
    ///
    /// Returns `AppError::MissingCartUsername` when the username is absent.
    pub fn validate(self) -> Result<NewCartItem> {
        let username = non_empty(self.username.as_deref())
            .ok_or(AppError::MissingCartUsername)?
            .to_owned();

        Ok(NewCartItem {
            username,
            product_id: self.product_id,
            title: self.title,
            price: self.price,
            image: self.image,
        })
    }
}

/// Handle `POST /add-to-cart`.
///
/// Inserts unconditionally; adding the same product twice yields two rows.
///
/// # Errors
///
/// Returns `AppError::MissingCartUsername` or `AppError::Database`.
pub async fn add_to_cart(
    State(state): State<AppState>,
    Json(body): Json<AddToCartRequest>,
) -> Result<impl IntoResponse> {
    let item = body.validate()?;

    CartRepository::new(state.pool()).add(&item).await?;

    Ok(Json(json!({ "message": "Product added to cart" })))
}

/// Handle `GET /cart/{username}`.
///
/// An empty cart is a 200 with an empty list; unlike the per-user order
/// listing there is no not-found case.
///
/// # Errors
///
/// Returns `AppError::Database` if the query fails.
pub async fn get_cart(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse> {
    let items = CartRepository::new(state.pool())
        .list_for_user(&username)
        .await?;

    Ok(Json(items))
}
