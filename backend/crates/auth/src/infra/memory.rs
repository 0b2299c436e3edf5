//! In-Memory Repository Implementation
//!
//! Backs tests and local runs without a database. Keeps insertion order so
//! listings are deterministic.

use std::sync::Arc;

use kernel::id::UserId;
use tokio::sync::RwLock;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == user.email) {
            return Err(AuthError::EmailTaken);
        }
        users.push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| &u.user_id == user_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| &u.email == email).cloned())
    }

    async fn list_all(&self) -> AuthResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn update(&self, user: &User) -> AuthResult<bool> {
        let mut users = self.users.write().await;
        if users
            .iter()
            .any(|u| u.email == user.email && u.user_id != user.user_id)
        {
            return Err(AuthError::EmailTaken);
        }

        match users.iter_mut().find(|u| u.user_id == user.user_id) {
            Some(stored) => {
                *stored = user.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, user_id: &UserId) -> AuthResult<bool> {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| &u.user_id != user_id);
        Ok(users.len() != before)
    }
}
