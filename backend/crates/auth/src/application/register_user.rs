//! Register User Use Case
//!
//! Creates a user with a hashed password.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

pub struct RegisterUserInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

pub struct RegisterUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterUserInput) -> AuthResult<User> {
        let name = UserName::new(&input.name)?;
        let email = Email::new(&input.email)?;

        if input.password != input.password_confirm {
            return Err(AuthError::PasswordMismatch);
        }
        let raw_password = RawPassword::new(input.password)?;

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken);
        }

        let password = UserPassword::from_raw(&raw_password, self.config.pepper())?;
        let user = User::new(name, email, password);

        self.user_repo.create(&user).await?;

        tracing::info!(user_id = %user.user_id, "User registered");

        Ok(user)
    }
}
