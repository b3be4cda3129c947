// Domain error types - user-facing messages never carry internal detail

use thiserror::Error;

/// Main error type for the service
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Missing or empty required field (HTTP 400)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Uniqueness violation on registration (HTTP 409)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Credential mismatch on login (HTTP 401)
    ///
    /// Carries no detail on purpose: the message must not distinguish
    /// "no such user" from "wrong password".
    #[error("Invalid username or password.")]
    Auth,

    /// Durable read/write failure (HTTP 500)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Startup configuration error (HTTP 500)
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ServiceError {
    /// Conflict for an already-registered username
    pub fn username_taken() -> Self {
        ServiceError::Conflict("Username already taken. Choose another one.".to_string())
    }

    /// Conflict for an already-registered email
    pub fn email_taken() -> Self {
        ServiceError::Conflict("An account with this email already exists.".to_string())
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 400,
            ServiceError::Conflict(_) => 409,
            ServiceError::Auth => 401,
            ServiceError::Storage(_) => 500,
            ServiceError::Configuration(_) => 500,
        }
    }

    /// Get user-friendly error message (no sensitive information)
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::Validation(msg) => msg.clone(),
            ServiceError::Conflict(msg) => msg.clone(),
            ServiceError::Auth => "Invalid username or password.".to_string(),
            ServiceError::Storage(_) => "Could not save your data. Please try again.".to_string(),
            ServiceError::Configuration(_) => "Internal error".to_string(),
        }
    }
}
