//! Access Tokens
//!
//! Stateless bearer tokens: `{user_id}.{expires_at_ms}.{signature}` where the
//! signature is HMAC-SHA256 (URL-safe base64) over `{user_id}.{expires_at_ms}`.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::crypto;
use thiserror::Error;

use crate::application::config::AuthConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("no bearer token")]
    Missing,
    #[error("token is malformed")]
    Malformed,
    #[error("token signature does not match")]
    BadSignature,
    #[error("token has expired")]
    Expired,
}

#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at_ms: i64,
}

pub fn issue(config: &AuthConfig, user_id: &UserId, now: DateTime<Utc>) -> IssuedToken {
    let expires_at_ms = now
        .timestamp_millis()
        .saturating_add(config.token_ttl_ms());
    let payload = format!("{user_id}.{expires_at_ms}");
    let signature = crypto::sign(&config.token_secret, payload.as_bytes());

    IssuedToken {
        token: format!("{payload}.{signature}"),
        expires_at_ms,
    }
}

/// Check signature and expiry and return the user the token was issued to.
pub fn verify(config: &AuthConfig, token: &str, now: DateTime<Utc>) -> Result<UserId, TokenError> {
    let (payload, signature) = token.rsplit_once('.').ok_or(TokenError::Malformed)?;
    let (user_id, expires_at_ms) = payload.split_once('.').ok_or(TokenError::Malformed)?;

    let user_id: UserId = user_id.parse().map_err(|_| TokenError::Malformed)?;
    let expires_at_ms: i64 = expires_at_ms.parse().map_err(|_| TokenError::Malformed)?;

    if !crypto::verify_signature(&config.token_secret, payload.as_bytes(), signature) {
        return Err(TokenError::BadSignature);
    }

    if now.timestamp_millis() >= expires_at_ms {
        return Err(TokenError::Expired);
    }

    Ok(user_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn config() -> AuthConfig {
        AuthConfig {
            token_ttl: Duration::from_secs(60),
            ..AuthConfig::with_random_secret()
        }
    }

    #[test]
    fn test_issue_and_verify() {
        let config = config();
        let user_id = UserId::new();
        let now = Utc::now();

        let issued = issue(&config, &user_id, now);
        assert_eq!(issued.expires_at_ms, now.timestamp_millis() + 60_000);
        assert_eq!(verify(&config, &issued.token, now), Ok(user_id));
    }

    #[test]
    fn test_expired_token() {
        let config = config();
        let now = Utc::now();
        let issued = issue(&config, &UserId::new(), now);

        let later = now + chrono::TimeDelta::seconds(60);
        assert_eq!(verify(&config, &issued.token, later), Err(TokenError::Expired));
    }

    #[test]
    fn test_tampered_token() {
        let config = config();
        let now = Utc::now();
        let issued = issue(&config, &UserId::new(), now);

        let (_, rest) = issued.token.split_once('.').unwrap();
        let forged = format!("{}.{rest}", UserId::new());
        assert_eq!(verify(&config, &forged, now), Err(TokenError::BadSignature));

        let other_key = AuthConfig::with_random_secret();
        assert_eq!(
            verify(&other_key, &issued.token, now),
            Err(TokenError::BadSignature)
        );
    }

    #[test]
    fn test_malformed_token() {
        let config = config();
        let now = Utc::now();

        let bad_expiry = format!("{}.soon.sig", UserId::new());
        for token in ["", "abc", "a.b", "not-a-uuid.123.sig", bad_expiry.as_str()] {
            assert_eq!(verify(&config, token, now), Err(TokenError::Malformed), "{token}");
        }
    }
}
