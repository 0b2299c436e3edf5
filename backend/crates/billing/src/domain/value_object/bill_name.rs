//! Bill Name Value Object

use derive_more::Display;
use kernel::error::app_error::{AppError, AppResult};
use serde::Serialize;

pub const BILL_NAME_MAX_LENGTH: usize = 100;

/// Trimmed, 1 to 100 characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display)]
pub struct BillName(String);

impl BillName {
    pub fn new(name: impl AsRef<str>) -> AppResult<Self> {
        let name = name.as_ref().trim();

        if name.is_empty() {
            return Err(AppError::bad_request("Name cannot be empty"));
        }

        if name.chars().count() > BILL_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Name must be at most {BILL_NAME_MAX_LENGTH} characters"
            )));
        }

        Ok(Self(name.to_string()))
    }

    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_trimmed() {
        assert_eq!(BillName::new("  Electricity ").unwrap().as_str(), "Electricity");
    }

    #[test]
    fn test_name_length() {
        assert!(BillName::new("").is_err());
        assert!(BillName::new("   ").is_err());
        assert!(BillName::new("x".repeat(100)).is_ok());
        assert!(BillName::new("x".repeat(101)).is_err());
        // characters, not bytes
        assert!(BillName::new("é".repeat(100)).is_ok());
    }
}
