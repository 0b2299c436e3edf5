//! List Users Use Case

use std::sync::Arc;

use platform::list_query::{self, ListQuery, Page};

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;

pub struct ListUsersUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> ListUsersUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// Search, sort and paginate all users, shaping each with `project`.
    pub async fn execute<V, F>(&self, query: &ListQuery, project: F) -> AuthResult<Page<V>>
    where
        F: FnMut(&User) -> V,
    {
        let users = self.user_repo.list_all().await?;
        Ok(list_query::query(&users, query, project))
    }
}
