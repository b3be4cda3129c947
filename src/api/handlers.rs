// Request handlers for API endpoints

use axum::{extract::State, response::Json};
use serde::Deserialize;
use tracing::{info, warn};

use crate::api::responses::{
    ApiError, ConditionSummary, HealthResponse, LoginResponse, SignupResponse, SymptomsResponse,
};
use crate::api::AppState;
use crate::core::secret::Password;

/// Signup request body
///
/// No Debug derive: the body carries a plaintext password.
#[derive(Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Login request body
#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Check-symptoms request body
#[derive(Deserialize)]
pub struct SymptomsRequest {
    pub symptoms: String,
}

/// Handler for account registration
///
/// POST /api/signup
pub async fn signup_handler(
    State(app_state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<SignupResponse>, ApiError> {
    let request_id = uuid::Uuid::new_v4().to_string();

    info!(username = %request.username.trim(), request_id = %request_id, "Received signup request");

    let password = Password::new(&request.password);
    app_state
        .auth
        .register(&request.email, &request.username, &password)
        .await
        .map_err(|e| {
            warn!(error = %e, request_id = %request_id, "Signup rejected");
            ApiError::from_service_error_with_id(e, request_id)
        })?;

    Ok(Json(SignupResponse {
        ok: true,
        message: "Signup successful! You can now login.".to_string(),
    }))
}

/// Handler for login
///
/// POST /api/login
pub async fn login_handler(
    State(app_state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let request_id = uuid::Uuid::new_v4().to_string();

    let password = Password::new(&request.password);
    let user = app_state
        .auth
        .login(&request.username, &password)
        .await
        .map_err(|e| {
            warn!(request_id = %request_id, "Login rejected");
            ApiError::from_service_error_with_id(e, request_id)
        })?;

    Ok(Json(LoginResponse {
        ok: true,
        message: "Login successful.".to_string(),
        user,
    }))
}

/// Handler for symptom lookup
///
/// POST /api/check-symptoms
pub async fn check_symptoms_handler(
    State(app_state): State<AppState>,
    Json(request): Json<SymptomsRequest>,
) -> Result<Json<SymptomsResponse>, ApiError> {
    let request_id = uuid::Uuid::new_v4().to_string();

    let matches = app_state.matcher.check(&request.symptoms).map_err(|e| {
        ApiError::from_service_error_with_id(e, request_id.clone())
    })?;

    info!(
        request_id = %request_id,
        match_count = matches.len(),
        "Symptom check completed"
    );

    Ok(Json(SymptomsResponse {
        ok: true,
        results: matches.iter().map(ConditionSummary::from).collect(),
        message: "General educational information only. Not a real diagnosis.".to_string(),
    }))
}

/// Health check handler
///
/// GET /health
pub async fn health_handler(State(app_state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        corpus_conditions: app_state.corpus.len(),
        registered_users: app_state.users.count().await,
    })
}
