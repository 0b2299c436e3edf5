//! User Entity

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::list_query::FieldAccess;

use crate::domain::value_object::{email::Email, user_name::UserName, user_password::UserPassword};

#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    pub name: UserName,
    /// Unique, login identity
    pub email: Email,
    pub password: UserPassword,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: UserName, email: Email, password: UserPassword) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            name,
            email,
            password,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update_profile(&mut self, name: UserName, email: Email) {
        self.name = name;
        self.email = email;
        self.updated_at = Utc::now();
    }

    pub fn set_password(&mut self, password: UserPassword) {
        self.password = password;
        self.updated_at = Utc::now();
    }
}

/// `name` and `email` are searchable and sortable. The password hash never is.
impl FieldAccess for User {
    const FIELDS: &'static [&'static str] = &["name", "email"];

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "name" => Some(Cow::Borrowed(self.name.as_str())),
            "email" => Some(Cow::Borrowed(self.email.as_str())),
            _ => None,
        }
    }
}
