//! Billing (Bill Management) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Bill entity, value objects, repository trait
//! - `application/` - Use cases and configuration
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! The router does not check access tokens itself; the binary layers
//! `auth::require_access_token` over it.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use application::config::BillingConfig;
pub use error::{BillingError, BillingResult};
pub use infra::memory::InMemoryBillRepository;
pub use infra::postgres::PgBillRepository;
pub use presentation::handlers::BillingAppState;
pub use presentation::router::bills_router;
