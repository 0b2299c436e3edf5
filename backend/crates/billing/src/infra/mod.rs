//! Infrastructure Layer
//!
//! Database and in-memory repository implementations.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryBillRepository;
pub use postgres::PgBillRepository;
