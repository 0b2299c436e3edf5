//! Bill Total Value Object

use derive_more::Display;
use kernel::error::app_error::{AppError, AppResult};
use serde::Serialize;

/// Amount of a bill. Any finite number; the sign is not checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Display)]
#[serde(transparent)]
pub struct BillTotal(f64);

impl BillTotal {
    pub fn new(total: f64) -> AppResult<Self> {
        if !total.is_finite() {
            return Err(AppError::bad_request("Total must be a finite number"));
        }

        Ok(Self(total))
    }

    pub fn from_db(total: f64) -> Self {
        Self(total)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}
