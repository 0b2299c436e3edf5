//! User Password Value Object
//!
//! Domain wrappers around `platform::password`:
//! - `RawPassword`: what the user typed, zeroized on drop
//! - `UserPassword`: the Argon2id hash that gets stored
//!
//! ```rust
//! use auth::domain::value_object::user_password::{RawPassword, UserPassword};
//!
//! let raw = RawPassword::new("Utility-Bills-2024".to_string()).unwrap();
//! let stored = UserPassword::from_raw(&raw, None).unwrap();
//! assert!(stored.verify(&RawPassword::for_login("Utility-Bills-2024".to_string()), None));
//! ```

use kernel::error::app_error::{AppError, AppResult};
use platform::password::{ClearTextPassword, HashedPassword, PasswordPolicyError};
use std::fmt;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// A new password being set. Applies the password policy.
    pub fn new(raw: String) -> AppResult<Self> {
        let clear_text = ClearTextPassword::new(raw).map_err(|e| {
            let action = match e {
                PasswordPolicyError::TooShort { .. } => "Please choose a longer password",
                PasswordPolicyError::TooLong { .. } => "Please choose a shorter password",
                PasswordPolicyError::EmptyOrWhitespace => "Please enter a password",
                PasswordPolicyError::InvalidCharacter => {
                    "Please remove any special control characters"
                }
                PasswordPolicyError::CommonPattern => "Please choose a more unique password",
            };
            AppError::bad_request(e.to_string()).with_action(action)
        })?;

        Ok(Self(clear_text))
    }

    /// A password presented for verification (login, current password).
    /// The policy is not applied.
    pub fn for_login(raw: String) -> Self {
        Self(ClearTextPassword::for_verification(raw))
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RawPassword([REDACTED])")
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> AppResult<Self> {
        let hashed = raw
            .0
            .hash(pepper)
            .map_err(|e| AppError::internal("Password hashing failed").with_source(e))?;

        Ok(Self(hashed))
    }

    pub fn from_phc_string(phc_string: impl Into<String>) -> AppResult<Self> {
        let hashed = HashedPassword::from_phc_string(phc_string)
            .map_err(|e| AppError::internal("Invalid password hash in database").with_source(e))?;

        Ok(Self(hashed))
    }

    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(&raw.0, pepper)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UserPassword([HASH])")
    }
}
