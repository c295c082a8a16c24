use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use portfolio_contact::{ContactRequest, ValidationErrors};
use serde::Serialize;
use serde_json::json;

use crate::{relay::RelayError, routes::AppState};

pub const EMAIL_SENT: &str = "Email sent successfully";
pub const DISPATCH_FAILED: &str = "Failed to send email";
pub const INVALID_BODY: &str = "Invalid request body";

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: &'static str,
}

/// Contact API errors. Only field messages are ever shown to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("invalid request body")]
    InvalidBody,

    #[error("email dispatch failed")]
    Dispatch,
}

impl From<RelayError> for ApiError {
    fn from(value: RelayError) -> Self {
        match value {
            RelayError::Validation(errors) => ApiError::Validation(errors),
            RelayError::Dispatch(_) => ApiError::Dispatch,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
            }
            ApiError::InvalidBody => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": INVALID_BODY }))).into_response()
            }
            ApiError::Dispatch => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": DISPATCH_FAILED })),
            )
                .into_response(),
        }
    }
}

/// POST /api/contact
///
/// # Returns
/// - 200 OK: `{success: true, message}`
/// - 400 Bad Request: `{errors: {field: message}}`, or `{error}` for an unreadable body
/// - 500 Internal Server Error: `{error}`, the mailer's own error is only logged
#[tracing::instrument(skip_all)]
pub async fn contact(
    State(app_state): State<AppState>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<ContactResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Rejected contact request body");
        ApiError::InvalidBody
    })?;

    app_state.relay.relay(request).await.map_err(|err| {
        if let RelayError::Validation(errors) = &err {
            tracing::warn!(%errors, "Contact request validation failed");
        }
        ApiError::from(err)
    })?;

    Ok(Json(ContactResponse {
        success: true,
        message: EMAIL_SENT,
    }))
}
