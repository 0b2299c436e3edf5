//! Auth (Authentication + User Management) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and access tokens
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, middleware, routers
//!
//! ## Features
//! - Email + password login behind a per-email login throttle
//! - Signed, expiring bearer access tokens
//! - User CRUD, password change, searchable/sortable/paginated listing
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (optional pepper)
//! - Repeated failed logins for one email are refused for a cooldown window
//! - Every user route requires a valid access token for an existing user

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::memory::InMemoryUserRepository;
pub use infra::postgres::PgUserRepository;
pub use presentation::handlers::AuthAppState;
pub use presentation::middleware::{AuthenticatedUser, require_access_token};
pub use presentation::router::{authentication_router, users_router};

pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
