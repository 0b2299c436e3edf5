//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::application::access_token::TokenError;

pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Wrong email or password (also unknown email)
    #[error("Wrong email or password")]
    InvalidCredentials,

    /// Login throttle refused the attempt
    #[error("Too many failed login attempts. Please try again later.")]
    TooManyLoginAttempts,

    /// Missing, malformed, forged or expired access token
    #[error("Invalid access token")]
    TokenInvalid(#[from] TokenError),

    /// Token was valid but its user no longer exists
    #[error("Access token user no longer exists")]
    TokenUserGone,

    #[error("Unknown user")]
    UserNotFound,

    #[error("Email is already registered")]
    EmailTaken,

    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Current password given for a password change is wrong
    #[error("Wrong password")]
    WrongPassword,

    /// Request field failed validation
    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials
            | AuthError::TokenInvalid(_)
            | AuthError::TokenUserGone => ErrorKind::Unauthorized,
            AuthError::TooManyLoginAttempts | AuthError::WrongPassword => ErrorKind::Forbidden,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::PasswordMismatch | AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Stable machine-readable code for clients
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::TooManyLoginAttempts => "TOO_MANY_LOGIN_ATTEMPTS",
            AuthError::TokenInvalid(_) | AuthError::TokenUserGone => "INVALID_TOKEN",
            AuthError::UserNotFound => "UNKNOWN_USER",
            AuthError::EmailTaken => "EMAIL_ALREADY_TAKEN",
            AuthError::PasswordMismatch => "PASSWORD_MISMATCH",
            AuthError::WrongPassword => "WRONG_PASSWORD",
            AuthError::Validation(_) => "VALIDATION_ERROR",
            AuthError::Database(_) | AuthError::Internal(_) => "SERVER_ERROR",
        }
    }

    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.public_message()).with_code(self.code());
        match self {
            AuthError::TooManyLoginAttempts => err.with_action("Wait before trying to log in again"),
            AuthError::TokenInvalid(_) | AuthError::TokenUserGone => {
                err.with_action("Log in again to get a new access token")
            }
            _ => err,
        }
    }

    /// Server-side details stay in the logs.
    fn public_message(&self) -> String {
        match self {
            AuthError::Database(_) | AuthError::Internal(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }

    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::TooManyLoginAttempts => {
                tracing::warn!("Login refused by throttle");
            }
            AuthError::TokenInvalid(reason) => {
                tracing::debug!(reason = %reason, "Rejected access token");
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

/// Value objects report validation failures as client-side `AppError`s.
impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        if err.is_client_error() {
            AuthError::Validation(err.message().to_string())
        } else {
            AuthError::Internal(err.to_string())
        }
    }
}
