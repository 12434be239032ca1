//! Unified error handling for API responses.
//!
//! Provides a unified `AppError` type with a fixed mapping from each failure
//! outcome to an HTTP status and JSON body. All route handlers return
//! `Result<T, AppError>`.
//!
//! Historical clients read the error text from either a `message` or an
//! `error` key depending on the route; each variant pins the key it has
//! always used so that split survives.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::RepositoryError;

/// Which JSON key carries the error text in the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKey {
    Message,
    Error,
}

impl BodyKey {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Error => "error",
        }
    }
}

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("database error: {0}")]
    Database(#[from] RepositoryError),

    /// Registration or login request without a name or password.
    #[error("missing credentials")]
    MissingCredentials,

    /// Registration for a name that is already taken.
    #[error("user already exists")]
    UserAlreadyExists,

    /// Login with a name/password pair that matches no stored account.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Order placement with one or more mandatory fields absent.
    #[error("missing order fields")]
    MissingOrderFields,

    /// Cart addition without a username.
    #[error("missing cart username")]
    MissingCartUsername,

    /// Order listing for a user with no orders.
    #[error("no orders for user")]
    NoOrdersForUser,

    /// Product lookup for an ID that does not exist.
    #[error("product not found")]
    ProductNotFound,

    /// Details submission with an invalid or missing name.
    #[error("invalid detail name")]
    InvalidDetailName,

    /// Details submission with an invalid or missing mobile number.
    #[error("invalid detail mobile number")]
    InvalidDetailMobile,

    /// Details submission with a blank or missing address.
    #[error("missing detail address")]
    MissingDetailAddress,
}

impl AppError {
    /// Fixed status/key/text mapping for each outcome.
    const fn parts(&self) -> (StatusCode, BodyKey, &'static str) {
        match self {
            Self::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                BodyKey::Error,
                "Internal Server Error",
            ),
            Self::MissingCredentials => (
                StatusCode::BAD_REQUEST,
                BodyKey::Message,
                "Username and password are required.",
            ),
            Self::UserAlreadyExists => (
                StatusCode::CONFLICT,
                BodyKey::Message,
                "User already exists. Please log in.",
            ),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                BodyKey::Message,
                "Incorrect username or password.",
            ),
            Self::MissingOrderFields => (
                StatusCode::BAD_REQUEST,
                BodyKey::Error,
                "Missing required fields",
            ),
            Self::MissingCartUsername => (
                StatusCode::BAD_REQUEST,
                BodyKey::Message,
                "Username is required",
            ),
            Self::NoOrdersForUser => (
                StatusCode::NOT_FOUND,
                BodyKey::Message,
                "No orders found for this user",
            ),
            Self::ProductNotFound => {
                (StatusCode::NOT_FOUND, BodyKey::Error, "Product not found")
            }
            Self::InvalidDetailName => (
                StatusCode::BAD_REQUEST,
                BodyKey::Error,
                "Invalid or missing name",
            ),
            Self::InvalidDetailMobile => (
                StatusCode::BAD_REQUEST,
                BodyKey::Error,
                "Invalid or missing mobile number",
            ),
            Self::MissingDetailAddress => {
                (StatusCode::BAD_REQUEST, BodyKey::Error, "Address is required")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Storage failures are logged for operators and answered generically;
        // no internal detail reaches the client.
        if let Self::Database(ref err) = self {
            tracing::error!(error = %err, "Request failed on storage access");
        }

        let (status, key, text) = self.parts();
        (status, Json(json!({ (key.as_str()): text }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn parts_of(err: AppError) -> (StatusCode, BodyKey, &'static str) {
        err.parts()
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            parts_of(AppError::MissingCredentials).0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(parts_of(AppError::UserAlreadyExists).0, StatusCode::CONFLICT);
        assert_eq!(
            parts_of(AppError::InvalidCredentials).0,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(parts_of(AppError::NoOrdersForUser).0, StatusCode::NOT_FOUND);
        assert_eq!(parts_of(AppError::ProductNotFound).0, StatusCode::NOT_FOUND);
        assert_eq!(
            parts_of(AppError::Database(crate::db::RepositoryError::NotFound)).0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_body_key_split_is_preserved() {
        // Identity and cart routes answer under "message"; orders, catalog,
        // and details answer under "error".
        assert_eq!(parts_of(AppError::InvalidCredentials).1, BodyKey::Message);
        assert_eq!(parts_of(AppError::MissingCartUsername).1, BodyKey::Message);
        assert_eq!(parts_of(AppError::MissingOrderFields).1, BodyKey::Error);
        assert_eq!(parts_of(AppError::ProductNotFound).1, BodyKey::Error);
        assert_eq!(parts_of(AppError::InvalidDetailName).1, BodyKey::Error);
    }

    #[test]
    fn test_fixed_messages() {
        assert_eq!(
            parts_of(AppError::UserAlreadyExists).2,
            "User already exists. Please log in."
        );
        assert_eq!(
            parts_of(AppError::NoOrdersForUser).2,
            "No orders found for this user"
        );
        assert_eq!(
            parts_of(AppError::MissingOrderFields).2,
            "Missing required fields"
        );
    }

    #[test]
    fn test_database_error_is_generic() {
        let (status, _, text) =
            parts_of(AppError::Database(crate::db::RepositoryError::NotFound));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(text, "Internal Server Error");
    }
}
