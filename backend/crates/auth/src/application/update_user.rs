//! Update User Use Case
//!
//! Changes a user's name and email.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::{AuthError, AuthResult};

pub struct UpdateUserInput {
    pub name: String,
    pub email: String,
}

pub struct UpdateUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> UpdateUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, user_id: &UserId, input: UpdateUserInput) -> AuthResult<()> {
        let name = UserName::new(&input.name)?;
        let email = Email::new(&input.email)?;

        let mut user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if let Some(owner) = self.user_repo.find_by_email(&email).await? {
            if owner.user_id != user.user_id {
                return Err(AuthError::EmailTaken);
            }
        }

        user.update_profile(name, email);

        if !self.user_repo.update(&user).await? {
            return Err(AuthError::UserNotFound);
        }

        tracing::info!(user_id = %user_id, "User updated");

        Ok(())
    }
}
