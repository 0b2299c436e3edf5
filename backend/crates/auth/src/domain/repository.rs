//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.

use kernel::id::UserId;

use crate::domain::entity::user::User;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user. Fails with `EmailTaken` if the email is registered.
    async fn create(&self, user: &User) -> AuthResult<()>;

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Every user, oldest first
    async fn list_all(&self) -> AuthResult<Vec<User>>;

    /// Persist name, email and password hash. Returns `false` if the user no
    /// longer exists.
    async fn update(&self, user: &User) -> AuthResult<bool>;

    /// Returns `false` if there was nothing to delete.
    async fn delete(&self, user_id: &UserId) -> AuthResult<bool>;
}
