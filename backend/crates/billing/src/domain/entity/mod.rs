//! Entities

pub mod bill;
