// Axum web server layer

use axum::{error_handling::HandleErrorLayer, http::StatusCode, routing, BoxError, Router};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

pub mod handlers;
pub mod responses;

use crate::auth::AuthService;
use crate::config::Config;
use crate::matcher::SymptomMatcher;
use crate::store::{CorpusStore, UserStore};

/// Application state containing all shared dependencies
///
/// Components are wrapped in Arc for shared ownership across request tasks.
/// The user store is the only mutable member; it serializes its own writes.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub matcher: Arc<SymptomMatcher>,
    pub users: Arc<dyn UserStore>,
    pub corpus: Arc<CorpusStore>,
    pub config: Arc<Config>,
}

/// Create the Axum router with all routes and middleware
///
/// Middleware stack (outermost to innermost):
/// - Request tracing (tower-http::trace)
/// - Permissive CORS (the UI may be served from anywhere)
/// - Body size limit
/// - Timeout, with HandleErrorLayer converting the elapsed error to 408
pub fn create_router(app_state: AppState) -> Router {
    let timeout_secs = app_state.config.request_timeout_secs;
    let body_limit = app_state.config.body_size_limit_bytes;

    let router = Router::new()
        .route("/api/signup", routing::post(handlers::signup_handler))
        .route("/api/login", routing::post(handlers::login_handler))
        .route(
            "/api/check-symptoms",
            routing::post(handlers::check_symptoms_handler),
        )
        .route("/health", routing::get(handlers::health_handler))
        .with_state(app_state);

    // HandleErrorLayer must come before the timeout to catch its error
    let middleware_stack = ServiceBuilder::new()
        .layer(HandleErrorLayer::new(|e: BoxError| async move {
            let status = if e.is::<tower::timeout::error::Elapsed>() {
                StatusCode::REQUEST_TIMEOUT
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, e.to_string())
        }))
        .timeout(Duration::from_secs(timeout_secs))
        .into_inner();

    router
        .layer(middleware_stack)
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
