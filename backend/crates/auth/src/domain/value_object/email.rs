//! Email Value Object
//!
//! A syntactically plausible, lowercased email address. Emails are the login
//! identity, so two spellings that differ only in case are the same user.

use derive_more::Display;
use kernel::error::app_error::{AppError, AppResult};
use serde::Serialize;
use std::str::FromStr;

/// RFC 5321 path limit
pub const EMAIL_MAX_LENGTH: usize = 254;

const LOCAL_PART_MAX_LENGTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Display)]
pub struct Email(String);

impl Email {
    pub fn new(email: impl AsRef<str>) -> AppResult<Self> {
        let email = Self::normalize(email.as_ref());

        if email.is_empty() {
            return Err(AppError::bad_request("Email cannot be empty"));
        }

        if email.chars().count() > EMAIL_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Email must be at most {EMAIL_MAX_LENGTH} characters"
            )));
        }

        if !is_valid_format(&email) {
            return Err(AppError::bad_request("Invalid email format"));
        }

        Ok(Self(email))
    }

    /// Trimmed and lowercased, without validation. Used as the throttle key,
    /// so malformed input still maps to a stable identity.
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_lowercase()
    }

    /// From a database value (already validated on write)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

fn is_valid_format(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || local.len() > LOCAL_PART_MAX_LENGTH || local.contains(char::is_whitespace)
    {
        return false;
    }

    if domain.is_empty()
        || !domain.contains('.')
        || domain.contains("..")
        || domain.starts_with(['.', '-'])
        || domain.ends_with(['.', '-'])
    {
        return false;
    }

    domain
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
}

impl FromStr for Email {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Email::new(s)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(Email::new("user@example.com").is_ok());
        assert!(Email::new("user.name@example.co.id").is_ok());
        assert!(Email::new("user+bills@example.com").is_ok());
    }

    #[test]
    fn test_email_invalid() {
        for bad in [
            "",
            "   ",
            "userexample.com",
            "user@",
            "@example.com",
            "user@@example.com",
            "user@example",
            "user@.example.com",
            "user@example..com",
            "us er@example.com",
        ] {
            assert!(Email::new(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_email_length_limit() {
        let local = "a".repeat(60);
        let domain = format!("{}.com", "b".repeat(EMAIL_MAX_LENGTH - 60 - 5));
        let at_limit = format!("{local}@{domain}");
        assert_eq!(at_limit.len(), EMAIL_MAX_LENGTH);
        assert!(Email::new(&at_limit).is_ok());

        let over = format!("{local}@b{domain}");
        assert!(Email::new(&over).is_err());
    }

    #[test]
    fn test_email_case_and_whitespace_normalization() {
        let email = Email::new("  Alice@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "alice@example.com");
        assert_eq!(email.to_string(), "alice@example.com");
        assert_eq!(Email::normalize(" Not An Email "), "not an email");
    }
}
