//! Change Password Use Case
//!
//! Replaces a user's password after checking the current one.

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_password::{RawPassword, UserPassword};
use crate::error::{AuthError, AuthResult};

pub struct ChangePasswordInput {
    pub password_old: String,
    pub password_new: String,
    pub password_confirm: String,
}

pub struct ChangePasswordUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> ChangePasswordUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, user_id: &UserId, input: ChangePasswordInput) -> AuthResult<()> {
        let mut user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let current = RawPassword::for_login(input.password_old);
        if !user.password.verify(&current, self.config.pepper()) {
            return Err(AuthError::WrongPassword);
        }

        if input.password_new != input.password_confirm {
            return Err(AuthError::PasswordMismatch);
        }

        let new_password = RawPassword::new(input.password_new)?;
        user.set_password(UserPassword::from_raw(&new_password, self.config.pepper())?);

        if !self.user_repo.update(&user).await? {
            return Err(AuthError::UserNotFound);
        }

        tracing::info!(user_id = %user_id, "Password changed");

        Ok(())
    }
}
