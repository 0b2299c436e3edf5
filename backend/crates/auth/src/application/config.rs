//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::login_throttle::LoginThrottleConfig;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC key for access tokens (32 bytes)
    pub token_secret: [u8; 32],
    /// Access token lifetime (24 hours)
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
    /// Failed-login policy
    pub login_throttle: LoginThrottleConfig,
    /// Page size for `GET /users` when the request has none (`None` = all)
    pub default_page_size: Option<usize>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: [0u8; 32],
            token_ttl: Duration::from_secs(24 * 3600),
            password_pepper: None,
            login_throttle: LoginThrottleConfig::default(),
            default_page_size: None,
        }
    }
}

impl AuthConfig {
    /// Config with a random token secret. Tokens do not survive a restart.
    pub fn with_random_secret() -> Self {
        Self {
            token_secret: platform::crypto::random_key(),
            ..Default::default()
        }
    }

    /// Random secret and week-long tokens for local work
    pub fn development() -> Self {
        Self {
            token_ttl: Duration::from_secs(7 * 24 * 3600),
            ..Self::with_random_secret()
        }
    }

    pub fn token_ttl_ms(&self) -> i64 {
        i64::try_from(self.token_ttl.as_millis()).unwrap_or(i64::MAX)
    }

    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
