//! Catalog route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use peppercorn_core::ProductId;

use crate::db::ProductRepository;
use crate::error::{AppError, Result};
use crate::models::NewProduct;
use crate::state::AppState;

/// Product creation request body.
///
/// Every field is optional: product submission is deliberately permissive and
/// inserts whatever arrives. Stricter validation here would be an observable
/// behavior change for existing admin tooling.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub price: Option<Decimal>,
}

/// Handle `POST /product`.
///
/// Responds 201 with the persisted row, assigned ID included.
///
/// # Errors
///
/// Returns `AppError::Database` if the insert fails.
pub async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<CreateProductRequest>,
) -> Result<impl IntoResponse> {
    let product = ProductRepository::new(state.pool())
        .create(&NewProduct {
            name: body.name,
            description: body.description,
            image: body.image,
            price: body.price,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// Handle `GET /products`.
///
/// An empty catalog is an empty list, not an error.
///
/// # Errors
///
/// Returns `AppError::Database` if the query fails.
pub async fn list_products(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let products = ProductRepository::new(state.pool()).list().await?;
    Ok(Json(products))
}

/// Handle `GET /products/{id}`.
///
/// # Errors
///
/// Returns `AppError::ProductNotFound` when no row matches, or
/// `AppError::Database` if the query fails.
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let product = ProductRepository::new(state.pool())
        .get(ProductId::new(id))
        .await?
        .ok_or(AppError::ProductNotFound)?;

    Ok(Json(product))
}
