//! Login Use Case
//!
//! Checks email + password through the login throttle and issues an access
//! token on success.

use std::sync::Arc;

use chrono::Utc;
use platform::login_throttle::{Clock, LoginDecision, LoginThrottle, SystemClock};

use crate::application::access_token;
use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginOutput {
    pub user: User,
    pub token: String,
    pub expires_at_ms: i64,
}

pub struct LoginUseCase<U, C = SystemClock>
where
    U: UserRepository,
    C: Clock,
{
    user_repo: Arc<U>,
    throttle: Arc<LoginThrottle<C>>,
    config: Arc<AuthConfig>,
}

impl<U, C> LoginUseCase<U, C>
where
    U: UserRepository,
    C: Clock,
{
    pub fn new(user_repo: Arc<U>, throttle: Arc<LoginThrottle<C>>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            throttle,
            config,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // The throttle key is the normalized email, valid or not
        let identity = Email::normalize(&input.email);
        let password = RawPassword::for_login(input.password);

        let decision = self
            .throttle
            .attempt_login(&identity, || self.check_credentials(&identity, &password))
            .await?;

        let user = match decision {
            LoginDecision::Success(user) => user,
            LoginDecision::InvalidCredentials => return Err(AuthError::InvalidCredentials),
            LoginDecision::RateLimited => return Err(AuthError::TooManyLoginAttempts),
        };

        let issued = access_token::issue(&self.config, &user.user_id, Utc::now());

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(LoginOutput {
            user,
            token: issued.token,
            expires_at_ms: issued.expires_at_ms,
        })
    }

    /// `Ok(None)` for a malformed email, an unknown email or a wrong password.
    async fn check_credentials(&self, identity: &str, password: &RawPassword) -> AuthResult<Option<User>> {
        let Ok(email) = Email::new(identity) else {
            return Ok(None);
        };

        let Some(user) = self.user_repo.find_by_email(&email).await? else {
            return Ok(None);
        };

        if user.password.verify(password, self.config.pepper()) {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }
}
