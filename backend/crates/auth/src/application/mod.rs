//! Application Layer
//!
//! Use cases and application services.

pub mod access_token;
pub mod change_password;
pub mod config;
pub mod delete_user;
pub mod get_user;
pub mod list_users;
pub mod login;
pub mod register_user;
pub mod update_user;

pub use change_password::{ChangePasswordInput, ChangePasswordUseCase};
pub use config::AuthConfig;
pub use delete_user::DeleteUserUseCase;
pub use get_user::GetUserUseCase;
pub use list_users::ListUsersUseCase;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use register_user::{RegisterUserInput, RegisterUserUseCase};
pub use update_user::{UpdateUserInput, UpdateUserUseCase};
