// Response types for API endpoints

use crate::core::models::{AuthenticatedUser, ConditionRecord};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Success response for signup
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub ok: bool,
    pub message: String,
}

/// Success response for login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub ok: bool,
    pub message: String,
    pub user: AuthenticatedUser,
}

/// One condition in a check-symptoms result
///
/// The keyword set is an index, not content; it is stripped here.
#[derive(Debug, Serialize)]
pub struct ConditionSummary {
    pub name: String,
    pub description: String,
    pub medication: String,
    pub care: String,
}

impl From<&ConditionRecord> for ConditionSummary {
    fn from(record: &ConditionRecord) -> Self {
        Self {
            name: record.name.clone(),
            description: record.description.clone(),
            medication: record.medication.clone(),
            care: record.care.clone(),
        }
    }
}

/// Success response for check-symptoms
#[derive(Debug, Serialize)]
pub struct SymptomsResponse {
    pub ok: bool,
    pub results: Vec<ConditionSummary>,
    pub message: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub corpus_conditions: usize,
    pub registered_users: usize,
}

/// Error response structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

/// API error type that converts domain errors to HTTP responses
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub request_id: Option<String>,
}

impl ApiError {
    /// Create from ServiceError
    pub fn from_service_error(err: crate::core::errors::ServiceError) -> Self {
        let status =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self {
            status,
            message: err.user_message(),
            request_id: None,
        }
    }

    /// Create from ServiceError with request ID
    pub fn from_service_error_with_id(
        err: crate::core::errors::ServiceError,
        request_id: String,
    ) -> Self {
        let status =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self {
            status,
            message: err.user_message(),
            request_id: Some(request_id),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            ok: false,
            message: self.message,
            request_id: self.request_id,
        });
        (self.status, body).into_response()
    }
}

impl From<crate::core::errors::ServiceError> for ApiError {
    fn from(err: crate::core::errors::ServiceError) -> Self {
        ApiError::from_service_error(err)
    }
}
