//! Customer details route handler.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use serde_json::json;

use peppercorn_core::{CustomerName, MobileNumber};

use crate::db::CustomerDetailRepository;
use crate::error::{AppError, Result};
use crate::models::NewCustomerDetail;
use crate::state::AppState;

/// Details submission request body.
#[derive(Debug, Deserialize)]
pub struct SubmitDetailsRequest {
    pub name: Option<String>,
    pub mobile: Option<String>,
    pub address: Option<String>,
}

impl SubmitDetailsRequest {
    /// Validate in order, short-circuiting on the first failure: name, then
    /// mobile, then address. An absent address is a plain 400, never a fault.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidDetailName`, `AppError::InvalidDetailMobile`,
    /// or `AppError::MissingDetailAddress`.
    pub fn validate(self) -> Result<NewCustomerDetail> {
        let name = CustomerName::parse(self.name.as_deref().unwrap_or_default())
            .map_err(|_| AppError::InvalidDetailName)?;

        let mobile = MobileNumber::parse(self.mobile.as_deref().unwrap_or_default())
            .map_err(|_| AppError::InvalidDetailMobile)?;

        let address = self.address.unwrap_or_default();
        if address.trim().is_empty() {
            return Err(AppError::MissingDetailAddress);
        }

        Ok(NewCustomerDetail {
            name,
            mobile,
            address,
        })
    }
}

/// Handle `POST /details`.
///
/// Responds 201 with the persisted row under the `user` key, matching what
/// the storefront form has always read back.
///
/// # Errors
///
/// Returns a field-specific `AppError` for validation failures, or
/// `AppError::Database` if the insert fails.
pub async fn submit_details(
    State(state): State<AppState>,
    Json(body): Json<SubmitDetailsRequest>,
) -> Result<impl IntoResponse> {
    let detail = body.validate()?;

    let stored = CustomerDetailRepository::new(state.pool())
        .create(&detail)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Details stored successfully",
            "user": stored,
        })),
    ))
}
