//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// No token was supplied where one is required
    #[error("Token missing")]
    MissingToken,

    /// Token failed signature, structure, or expiry checks
    #[error("Token invalid")]
    InvalidToken,

    /// Operation requires an authenticated caller
    #[error("Authentication required")]
    Unauthorized,

    /// Caller is authenticated but does not own the resource
    #[error("Only the owner can modify this resource")]
    Forbidden,

    /// Wrong user name or password
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// User name already exists
    #[error("Username already exists")]
    UserNameTaken,

    /// User name fails validation
    #[error("Invalid username: {0}")]
    InvalidUserName(String),

    /// Password fails the registration policy
    #[error("Password validation failed: {0}")]
    PasswordValidation(String),

    /// Request body could not be parsed
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    ///
    /// `Forbidden` is answered with 401 like the other auth failures;
    /// its kind and reason code still identify it.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingToken
            | AuthError::InvalidToken
            | AuthError::Unauthorized
            | AuthError::Forbidden
            | AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::UserNameTaken => StatusCode::CONFLICT,
            AuthError::InvalidUserName(_)
            | AuthError::PasswordValidation(_)
            | AuthError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingToken
            | AuthError::InvalidToken
            | AuthError::Unauthorized
            | AuthError::InvalidCredentials => ErrorKind::Unauthorized,
            AuthError::Forbidden => ErrorKind::Forbidden,
            AuthError::UserNameTaken => ErrorKind::Conflict,
            AuthError::InvalidUserName(_)
            | AuthError::PasswordValidation(_)
            | AuthError::InvalidBody(_) => ErrorKind::BadRequest,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Short machine-readable reason
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::MissingToken => "missing_token",
            AuthError::InvalidToken => "invalid_token",
            AuthError::Unauthorized => "unauthorized",
            AuthError::Forbidden => "forbidden",
            AuthError::InvalidCredentials => "invalid_credentials",
            AuthError::UserNameTaken => "username_taken",
            AuthError::InvalidUserName(_) => "invalid_username",
            AuthError::PasswordValidation(_) => "invalid_password",
            AuthError::InvalidBody(_) => "invalid_body",
            AuthError::Database(_) => "persistence",
            AuthError::Internal(_) => "internal",
        }
    }

    /// Convert to AppError
    ///
    /// Server-side failures get a generic message so that collaborator
    /// details never reach the caller.
    pub fn to_app_error(&self) -> AppError {
        let message = if self.kind().is_server_error() {
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        AppError::new(self.kind(), message)
            .with_code(self.code())
            .with_status(self.status_code().as_u16())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidToken => {
                tracing::warn!("Rejected request with invalid bearer token");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::Forbidden => {
                tracing::warn!("Mutation attempted by non-owner");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<JsonRejection> for AuthError {
    fn from(err: JsonRejection) -> Self {
        AuthError::InvalidBody(err.body_text())
    }
}
