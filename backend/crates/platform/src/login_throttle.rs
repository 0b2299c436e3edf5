//! Login Throttling
//!
//! Tracks consecutive failed login attempts per identity (usually a
//! normalized email) and decides whether an attempt may proceed.
//!
//! ## Policy
//! - After `max_failed_attempts` failures inside one cooldown window, further
//!   attempts are rejected without checking credentials.
//! - The window opens at the first failure and lasts `cooldown`. Once it has
//!   elapsed the record is discarded and counting starts over.
//! - A successful login discards the record.
//!
//! State lives in process memory only. It is lost on restart and is not
//! shared between instances.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

/// Throttle policy
#[derive(Debug, Clone)]
pub struct LoginThrottleConfig {
    /// Failures tolerated inside one window
    pub max_failed_attempts: u32,
    /// Window length, measured from the first failure
    pub cooldown: Duration,
}

impl Default for LoginThrottleConfig {
    fn default() -> Self {
        Self {
            max_failed_attempts: 5,
            cooldown: Duration::from_secs(30 * 60),
        }
    }
}

impl LoginThrottleConfig {
    pub fn new(max_failed_attempts: u32, cooldown_secs: u64) -> Self {
        Self {
            max_failed_attempts,
            cooldown: Duration::from_secs(cooldown_secs),
        }
    }

    fn expiry_from(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        chrono::TimeDelta::from_std(self.cooldown)
            .ok()
            .and_then(|delta| now.checked_add_signed(delta))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

/// Failure bookkeeping for one identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrottleRecord {
    /// Consecutive failures since the window opened
    pub failure_count: u32,
    /// When the window closes
    pub cooldown_expiry: DateTime<Utc>,
}

impl ThrottleRecord {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.cooldown_expiry
    }
}

/// Outcome of one login attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginDecision<T> {
    /// Credentials accepted; carries the credential check payload
    Success(T),
    /// Credentials rejected, attempts remain
    InvalidCredentials,
    /// Too many recent failures. Returned both when the attempt was blocked
    /// up front and when this failure pushed the identity over the limit.
    RateLimited,
}

/// Source of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// Per-identity login throttle
///
/// Read-modify-write sequences for one identity run under that identity's
/// map entry guard, so concurrent failures are never lost. No guard is held
/// while the credential check runs.
///
/// ```rust
/// use platform::login_throttle::{LoginDecision, LoginThrottle, LoginThrottleConfig};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let throttle = LoginThrottle::new(LoginThrottleConfig::default());
///
/// let decision = throttle
///     .attempt_login("alice@example.com", || async { Ok::<_, ()>(None::<String>) })
///     .await
///     .unwrap();
/// assert_eq!(decision, LoginDecision::InvalidCredentials);
/// assert_eq!(throttle.failure_count("alice@example.com"), 1);
/// # });
/// ```
#[derive(Debug)]
pub struct LoginThrottle<C = SystemClock> {
    records: DashMap<String, ThrottleRecord>,
    config: LoginThrottleConfig,
    clock: C,
}

impl LoginThrottle<SystemClock> {
    pub fn new(config: LoginThrottleConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for LoginThrottle<SystemClock> {
    fn default() -> Self {
        Self::new(LoginThrottleConfig::default())
    }
}

impl<C: Clock> LoginThrottle<C> {
    pub fn with_clock(config: LoginThrottleConfig, clock: C) -> Self {
        Self {
            records: DashMap::new(),
            config,
            clock,
        }
    }

    pub fn config(&self) -> &LoginThrottleConfig {
        &self.config
    }

    /// Run one login attempt for `identity` through the throttle.
    ///
    /// `credential_check` resolves to `Ok(Some(payload))` when the
    /// credentials are valid and `Ok(None)` when they are not. An `Err` is an
    /// infrastructure failure: it is returned as-is and the throttle state is
    /// left untouched.
    pub async fn attempt_login<T, E, F, Fut>(
        &self,
        identity: &str,
        credential_check: F,
    ) -> Result<LoginDecision<T>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Option<T>, E>>,
    {
        if self.is_blocked(identity) {
            return Ok(LoginDecision::RateLimited);
        }

        match credential_check().await? {
            Some(payload) => {
                self.records.remove(identity);
                Ok(LoginDecision::Success(payload))
            }
            None => {
                let failure_count = self.record_failure(identity);
                if failure_count > self.config.max_failed_attempts {
                    Ok(LoginDecision::RateLimited)
                } else {
                    Ok(LoginDecision::InvalidCredentials)
                }
            }
        }
    }

    /// Failures currently counted against `identity` (0 once the window has
    /// elapsed).
    pub fn failure_count(&self, identity: &str) -> u32 {
        self.record(identity)
            .map(|record| record.failure_count)
            .unwrap_or(0)
    }

    /// Snapshot of the live record for `identity`, if any.
    pub fn record(&self, identity: &str) -> Option<ThrottleRecord> {
        let now = self.clock.now();
        self.records
            .get(identity)
            .map(|record| *record)
            .filter(|record| !record.is_expired(now) && record.failure_count > 0)
    }

    /// Number of identities with a stored record, live or stale.
    pub fn tracked_identities(&self) -> usize {
        self.records.len()
    }

    /// Lazy reset, then the pre-check. Expired records are dropped here.
    fn is_blocked(&self, identity: &str) -> bool {
        let now = self.clock.now();
        match self.records.entry(identity.to_owned()) {
            Entry::Occupied(entry) if entry.get().is_expired(now) => {
                entry.remove();
                false
            }
            Entry::Occupied(entry) => entry.get().failure_count >= self.config.max_failed_attempts,
            Entry::Vacant(_) => false,
        }
    }

    /// Count one failure and return the updated count.
    ///
    /// A missing, zeroed or expired record opens a fresh window from `now`;
    /// the window may have closed while the credential check was running.
    fn record_failure(&self, identity: &str) -> u32 {
        let now = self.clock.now();
        let fresh = ThrottleRecord {
            failure_count: 1,
            cooldown_expiry: self.config.expiry_from(now),
        };

        match self.records.entry(identity.to_owned()) {
            Entry::Occupied(mut entry) => {
                let record = entry.get_mut();
                if record.is_expired(now) || record.failure_count == 0 {
                    *record = fresh;
                } else {
                    record.failure_count = record.failure_count.saturating_add(1);
                }
                record.failure_count
            }
            Entry::Vacant(entry) => entry.insert(fresh).failure_count,
        }
    }
}
