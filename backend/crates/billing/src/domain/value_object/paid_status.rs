//! Paid Status Value Object

use std::fmt;
use std::str::FromStr;

use kernel::error::app_error::{AppError, AppResult};
use serde::Serialize;

/// `"yes"` or `"no"` on the wire and in the database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaidStatus {
    Yes,
    No,
}

impl PaidStatus {
    pub fn new(raw: &str) -> AppResult<Self> {
        match raw {
            "yes" => Ok(PaidStatus::Yes),
            "no" => Ok(PaidStatus::No),
            _ => Err(AppError::bad_request("Paid must be \"yes\" or \"no\"")),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaidStatus::Yes => "yes",
            PaidStatus::No => "no",
        }
    }

    pub fn is_paid(&self) -> bool {
        matches!(self, PaidStatus::Yes)
    }
}

impl FromStr for PaidStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for PaidStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
