//! Billing Error Types
//!
//! Billing-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type BillingResult<T> = Result<T, BillingError>;

#[derive(Debug, Error)]
pub enum BillingError {
    /// Unknown or malformed bill id
    #[error("Unknown bill")]
    BillNotFound,

    /// Request field failed validation
    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl BillingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BillingError::BillNotFound => ErrorKind::NotFound,
            BillingError::Validation(_) => ErrorKind::BadRequest,
            BillingError::Database(_) | BillingError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            BillingError::BillNotFound => "UNKNOWN_BILL",
            BillingError::Validation(_) => "VALIDATION_ERROR",
            BillingError::Database(_) | BillingError::Internal(_) => "SERVER_ERROR",
        }
    }

    pub fn to_app_error(&self) -> AppError {
        let message = match self {
            BillingError::Database(_) | BillingError::Internal(_) => {
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        };

        AppError::new(self.kind(), message).with_code(self.code())
    }

    fn log(&self) {
        match self {
            BillingError::Database(e) => {
                tracing::error!(error = %e, "Billing database error");
            }
            BillingError::Internal(msg) => {
                tracing::error!(message = %msg, "Billing internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Billing error");
            }
        }
    }
}

impl IntoResponse for BillingError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for BillingError {
    fn from(err: AppError) -> Self {
        if err.is_client_error() {
            BillingError::Validation(err.message().to_string())
        } else {
            BillingError::Internal(err.to_string())
        }
    }
}
