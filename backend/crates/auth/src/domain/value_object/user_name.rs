//! User Name Value Object
//!
//! Display name of a user: trimmed, 1 to 100 characters, no control
//! characters. Not unique.

use derive_more::Display;
use kernel::error::app_error::{AppError, AppResult};
use serde::Serialize;

pub const USER_NAME_MAX_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display)]
pub struct UserName(String);

impl UserName {
    pub fn new(name: impl AsRef<str>) -> AppResult<Self> {
        let name = name.as_ref().trim();

        if name.is_empty() {
            return Err(AppError::bad_request("Name cannot be empty"));
        }

        let length = name.chars().count();
        if length > USER_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Name must be at most {USER_NAME_MAX_LENGTH} characters (got {length})"
            )));
        }

        if name.chars().any(char::is_control) {
            return Err(AppError::bad_request("Name contains invalid control characters"));
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
    fn test_user_name_trimmed() {
        let name = UserName::new("  Alice Liddell ").unwrap();
        assert_eq!(name.as_str(), "Alice Liddell");
    }

    #[test]
    fn test_user_name_length() {
        assert!(UserName::new("").is_err());
        assert!(UserName::new("   ").is_err());
        assert!(UserName::new("a").is_ok());
        assert!(UserName::new("é".repeat(USER_NAME_MAX_LENGTH)).is_ok());
        assert!(UserName::new("a".repeat(USER_NAME_MAX_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_user_name_control_characters() {
        assert!(UserName::new("Alice\u{0}Liddell").is_err());
    }
}
