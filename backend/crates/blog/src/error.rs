//! Blog Error Types
//!
//! Blog-specific error variants. Auth failures raised while handling a blog
//! request are wrapped and rendered exactly as the auth crate renders them.

use auth::AuthError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::id::IdParseError;
use thiserror::Error;

/// Blog-specific result type alias
pub type BlogResult<T> = Result<T, BlogError>;

/// Blog-specific error variants
#[derive(Debug, Error)]
pub enum BlogError {
    /// A required field is absent or empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Like count below zero
    #[error("likes must be a non-negative integer (got {0})")]
    InvalidLikes(i64),

    /// Identifier is not structurally valid
    #[error("Malformed id: {0}")]
    MalformedId(#[from] IdParseError),

    /// Well-formed identifier with no matching record
    #[error("Not found")]
    NotFound,

    /// Identity or ownership failure
    #[error(transparent)]
    Auth(#[from] AuthError),

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

impl BlogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BlogError::MissingField(_)
            | BlogError::InvalidLikes(_)
            | BlogError::MalformedId(_)
            | BlogError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            BlogError::NotFound => StatusCode::NOT_FOUND,
            BlogError::Auth(e) => e.status_code(),
            BlogError::Database(_) | BlogError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BlogError::MissingField(_)
            | BlogError::InvalidLikes(_)
            | BlogError::MalformedId(_)
            | BlogError::InvalidBody(_) => ErrorKind::BadRequest,
            BlogError::NotFound => ErrorKind::NotFound,
            BlogError::Auth(e) => e.kind(),
            BlogError::Database(_) | BlogError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Short machine-readable reason
    pub fn code(&self) -> &'static str {
        match self {
            BlogError::MissingField(_) => "missing_field",
            BlogError::InvalidLikes(_) => "invalid_likes",
            BlogError::MalformedId(_) => "malformed_id",
            BlogError::NotFound => "not_found",
            BlogError::Auth(e) => e.code(),
            BlogError::InvalidBody(_) => "invalid_body",
            BlogError::Database(_) => "persistence",
            BlogError::Internal(_) => "internal",
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        if let BlogError::Auth(e) = self {
            return e.to_app_error();
        }

        let message = if self.kind().is_server_error() {
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        AppError::new(self.kind(), message)
            .with_code(self.code())
            .with_status(self.status_code().as_u16())
    }

    fn log(&self) {
        match self {
            BlogError::Database(e) => {
                tracing::error!(error = %e, "Blog database error");
            }
            BlogError::Internal(msg) => {
                tracing::error!(message = %msg, "Blog internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Blog error");
            }
        }
    }
}

impl IntoResponse for BlogError {
    fn into_response(self) -> Response {
        match self {
            BlogError::Auth(e) => e.into_response(),
            other => {
                other.log();
                other.to_app_error().into_response()
            }
        }
    }
}

impl From<JsonRejection> for BlogError {
    fn from(err: JsonRejection) -> Self {
        BlogError::InvalidBody(err.body_text())
    }
}
