//! Customer listing route handler.

use axum::{Json, extract::State, response::IntoResponse};

use crate::db::UserRepository;
use crate::error::Result;
use crate::state::AppState;

/// Handle `GET /customers`.
///
/// Returns the name of every registered user as `[{"name": ...}, ...]`;
/// passwords are never part of the projection.
///
/// # Errors
///
/// Returns `AppError::Database` if the query fails.
pub async fn list_customers(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let names = UserRepository::new(state.pool()).list_names().await?;
    Ok(Json(names))
}
