//! Value Object Module

pub mod bill_name;
pub mod bill_total;
pub mod paid_status;
