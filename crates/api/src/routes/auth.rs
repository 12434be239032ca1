//! Identity route handlers: registration, user login, admin login.
//!
//! Credentials are stored and compared as plain values; the schema predates
//! any hashing layer and the comparison is verbatim equality in SQL. See
//! DESIGN.md before reusing this module anywhere that matters.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use serde_json::json;

use crate::db::{AdminRepository, RepositoryError, UserRepository};
use crate::error::{AppError, Result};
use crate::state::AppState;

use super::non_empty;

/// Registration request body.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub password: Option<String>,
}

/// Login request body (both user and admin login).
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Handle `POST /register`.
///
/// The duplicate check runs before the insert so the common case answers 409
/// without touching the unique index; a concurrent registration that slips
/// past the check still resolves to 409 via the constraint.
///
/// # Errors
///
/// Returns `AppError::MissingCredentials`, `AppError::UserAlreadyExists`, or
/// `AppError::Database`.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<impl IntoResponse> {
    let (Some(name), Some(password)) = (
        non_empty(body.name.as_deref()),
        non_empty(body.password.as_deref()),
    ) else {
        return Err(AppError::MissingCredentials);
    };

    let users = UserRepository::new(state.pool());

    if users.find_by_name(name).await?.is_some() {
        return Err(AppError::UserAlreadyExists);
    }

    users.create(name, password).await.map_err(|e| match e {
        RepositoryError::Conflict(_) => AppError::UserAlreadyExists,
        other => AppError::Database(other),
    })?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Registration successful!" })),
    ))
}

/// Handle `POST /login`.
///
/// # Errors
///
/// Returns `AppError::MissingCredentials`, `AppError::InvalidCredentials`, or
/// `AppError::Database`.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<impl IntoResponse> {
    let (Some(username), Some(password)) = (
        non_empty(body.username.as_deref()),
        non_empty(body.password.as_deref()),
    ) else {
        return Err(AppError::MissingCredentials);
    };

    let authenticated = UserRepository::new(state.pool())
        .verify_credentials(username, password)
        .await?;

    if !authenticated {
        return Err(AppError::InvalidCredentials);
    }

    Ok(Json(json!({ "message": "Login successful!" })))
}

/// Handle `POST /admin/login`.
///
/// Identical contract to [`login`], checked against the `adminlogin` table.
///
/// # Errors
///
/// Returns `AppError::MissingCredentials`, `AppError::InvalidCredentials`, or
/// `AppError::Database`.
pub async fn admin_login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<impl IntoResponse> {
    let (Some(username), Some(password)) = (
        non_empty(body.username.as_deref()),
        non_empty(body.password.as_deref()),
    ) else {
        return Err(AppError::MissingCredentials);
    };

    let authenticated = AdminRepository::new(state.pool())
        .verify_credentials(username, password)
        .await?;

    if !authenticated {
        return Err(AppError::InvalidCredentials);
    }

    Ok(Json(json!({ "message": "Login successful!" })))
}
