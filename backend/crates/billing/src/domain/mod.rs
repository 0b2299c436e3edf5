//! Domain Layer
//!
//! Bill entity, value objects, and the repository trait.

pub mod entity;
pub mod repository;
pub mod value_object;

pub use entity::bill::Bill;
pub use repository::BillRepository;
