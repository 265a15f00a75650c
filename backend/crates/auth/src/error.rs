//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.
//!
//! "No session" is not an error: resolvers return `Ok(None)` and the guard
//! turns that into a redirect. Everything here propagates to the HTTP layer.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::PasswordError;
use thiserror::Error;

pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown user name or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// A handler asked for a session the guard never attached
    #[error("Authentication required")]
    SessionRequired,

    /// The request path cannot be carried through a login redirect
    #[error("Malformed request path: {0}")]
    MalformedPath(String),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    /// Session store is unreachable (lock poisoned, pool closed, ...)
    #[error("Session store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials | AuthError::SessionRequired => ErrorKind::Unauthorized,
            AuthError::MalformedPath(_) | AuthError::Password(PasswordError::Empty) => {
                ErrorKind::BadRequest
            }
            AuthError::StoreUnavailable(_) => ErrorKind::ServiceUnavailable,
            AuthError::Database(
                sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_),
            ) => ErrorKind::ServiceUnavailable,
            AuthError::Password(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Client-facing form; internal details stay in the logs
    pub fn to_app_error(&self) -> AppError {
        match self.kind() {
            ErrorKind::InternalServerError => AppError::internal("Internal server error"),
            ErrorKind::ServiceUnavailable => {
                AppError::service_unavailable("Authentication is temporarily unavailable")
                    .with_action("Please try again shortly")
            }
            kind => AppError::new(kind, self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::StoreUnavailable(msg) => {
                tracing::error!(message = %msg, "Session store unavailable");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::Password(e) => {
                tracing::error!(error = %e, "Password handling failed");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
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

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
