//! First-user bootstrap
//!
//! Every `/api/users` route requires a token, so an empty database has no way
//! to obtain one. When configured, the first account is registered at startup.

use std::sync::Arc;

use auth::application::{RegisterUserInput, RegisterUserUseCase};
use auth::domain::repository::UserRepository;
use auth::{AuthAppState, AuthError};

use crate::config::BootstrapUser;

/// Register `user` unless its email is already taken.
///
/// Returns `true` when the account was created by this call.
pub async fn ensure_user<R>(state: &AuthAppState<R>, user: &BootstrapUser) -> anyhow::Result<bool>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let register = RegisterUserUseCase::new(state.repo.clone(), Arc::clone(&state.config));
    let input = RegisterUserInput {
        name: user.name.clone(),
        email: user.email.clone(),
        password: user.password.clone(),
        password_confirm: user.password.clone(),
    };

    match register.execute(input).await {
        Ok(created) => {
            tracing::info!(user_id = %created.user_id, "Bootstrap user created");
            Ok(true)
        }
        Err(AuthError::EmailTaken) => {
            tracing::debug!("Bootstrap user already exists");
            Ok(false)
        }
        Err(e) => Err(anyhow::Error::new(e).context("failed to create the bootstrap user")),
    }
}
