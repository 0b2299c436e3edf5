//! Server Configuration
//!
//! Read once at startup from the environment (`.env` is loaded first).

use std::time::Duration;

use anyhow::{Context, bail};
use auth::AuthConfig;
use base64::Engine;
use base64::engine::general_purpose;
use billing::BillingConfig;
use platform::login_throttle::LoginThrottleConfig;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";
const DEFAULT_BOOTSTRAP_NAME: &str = "Admin";

#[derive(Debug)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
    pub billing: BillingConfig,
    pub bootstrap_user: Option<BootstrapUser>,
}

/// First account, created at startup so a fresh deployment can log in.
pub struct BootstrapUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for BootstrapUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BootstrapUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `lookup` returns the raw value of a variable, `None` if unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        let mut auth = match lookup("AUTH_TOKEN_SECRET") {
            Some(secret_b64) => AuthConfig {
                token_secret: decode_secret(&secret_b64)?,
                ..AuthConfig::default()
            },
            None if cfg!(debug_assertions) => {
                tracing::warn!("AUTH_TOKEN_SECRET not set, using a random secret");
                AuthConfig::development()
            }
            None => bail!("AUTH_TOKEN_SECRET must be set in production"),
        };

        if let Some(ttl) = lookup("AUTH_TOKEN_TTL_SECS") {
            let secs = ttl.parse().context("AUTH_TOKEN_TTL_SECS must be a number of seconds")?;
            auth.token_ttl = Duration::from_secs(secs);
        }

        auth.password_pepper = lookup("PASSWORD_PEPPER")
            .filter(|pepper| !pepper.is_empty())
            .map(String::into_bytes);

        let defaults = LoginThrottleConfig::default();
        auth.login_throttle = LoginThrottleConfig::new(
            parse_or(&lookup, "LOGIN_MAX_FAILED_ATTEMPTS", defaults.max_failed_attempts)?,
            parse_or(&lookup, "LOGIN_COOLDOWN_SECS", defaults.cooldown.as_secs())?,
        );

        let bootstrap_user = match (
            lookup("BOOTSTRAP_USER_EMAIL"),
            lookup("BOOTSTRAP_USER_PASSWORD"),
        ) {
            (Some(email), Some(password)) => Some(BootstrapUser {
                name: lookup("BOOTSTRAP_USER_NAME")
                    .unwrap_or_else(|| DEFAULT_BOOTSTRAP_NAME.to_string()),
                email,
                password,
            }),
            (None, None) => None,
            _ => bail!("BOOTSTRAP_USER_EMAIL and BOOTSTRAP_USER_PASSWORD must be set together"),
        };

        Ok(Self {
            database_url,
            port,
            frontend_origins,
            auth,
            billing: BillingConfig::default(),
            bootstrap_user,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        None => Ok(default),
    }
}

fn decode_secret(secret_b64: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = general_purpose::STANDARD
        .decode(secret_b64.trim())
        .context("AUTH_TOKEN_SECRET must be base64")?;

    bytes
        .try_into()
        .map_err(|bytes: Vec<u8>| anyhow::anyhow!("AUTH_TOKEN_SECRET must decode to 32 bytes, got {}", bytes.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<ServerConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    fn secret() -> String {
        general_purpose::STANDARD.encode([7u8; 32])
    }

    #[test]
    fn test_defaults() {
        let secret = secret();
        let config = config(&[
            ("DATABASE_URL", "postgres://localhost/ledger"),
            ("AUTH_TOKEN_SECRET", &secret),
        ])
        .unwrap();

        assert_eq!(config.port, 5000);
        assert_eq!(config.frontend_origins.len(), 2);
        assert_eq!(config.auth.token_secret, [7u8; 32]);
        assert_eq!(config.auth.token_ttl, Duration::from_secs(86_400));
        assert!(config.auth.password_pepper.is_none());
        assert_eq!(config.auth.login_throttle.max_failed_attempts, 5);
        assert_eq!(config.auth.login_throttle.cooldown, Duration::from_secs(1800));
        assert_eq!(config.billing.default_page_size, Some(10));
        assert!(config.bootstrap_user.is_none());
    }

    #[test]
    fn test_bootstrap_user() {
        let secret = secret();
        let config = config(&[
            ("DATABASE_URL", "postgres://localhost/ledger"),
            ("AUTH_TOKEN_SECRET", &secret),
            ("BOOTSTRAP_USER_EMAIL", "owner@example.com"),
            ("BOOTSTRAP_USER_PASSWORD", "Monthly-Budget-77"),
        ])
        .unwrap();

        let user = config.bootstrap_user.unwrap();
        assert_eq!(user.name, "Admin");
        assert_eq!(user.email, "owner@example.com");
        assert!(!format!("{user:?}").contains("Monthly-Budget-77"));

        let half_set = self::config(&[
            ("DATABASE_URL", "postgres://localhost/ledger"),
            ("AUTH_TOKEN_SECRET", &secret),
            ("BOOTSTRAP_USER_EMAIL", "owner@example.com"),
        ]);
        assert!(half_set.is_err());
    }

    #[test]
    fn test_overrides() {
        let secret = secret();
        let config = config(&[
            ("DATABASE_URL", "postgres://localhost/ledger"),
            ("AUTH_TOKEN_SECRET", &secret),
            ("PORT", "8080"),
            ("FRONTEND_ORIGINS", "https://ledger.example, "),
            ("AUTH_TOKEN_TTL_SECS", "60"),
            ("PASSWORD_PEPPER", "pepper"),
            ("LOGIN_MAX_FAILED_ATTEMPTS", "3"),
            ("LOGIN_COOLDOWN_SECS", "120"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.frontend_origins, ["https://ledger.example"]);
        assert_eq!(config.auth.token_ttl, Duration::from_secs(60));
        assert_eq!(config.auth.pepper(), Some(&b"pepper"[..]));
        assert_eq!(config.auth.login_throttle.max_failed_attempts, 3);
        assert_eq!(config.auth.login_throttle.cooldown, Duration::from_secs(120));
    }

    #[test]
    fn test_invalid_values() {
        let secret = secret();
        assert!(config(&[("AUTH_TOKEN_SECRET", &secret)]).is_err());
        assert!(
            config(&[
                ("DATABASE_URL", "postgres://localhost/ledger"),
                ("AUTH_TOKEN_SECRET", "c2hvcnQ="),
            ])
            .is_err()
        );
        assert!(
            config(&[
                ("DATABASE_URL", "postgres://localhost/ledger"),
                ("AUTH_TOKEN_SECRET", &secret),
                ("PORT", "not-a-port"),
            ])
            .is_err()
        );
    }
}
