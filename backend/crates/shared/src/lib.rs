//! Shared Kernel - Domain-crossing minimal core
//!
//! Vocabulary shared by every backend crate:
//! - The unified error type ([`error::app_error::AppError`]) and its
//!   classification ([`error::kind::ErrorKind`])
//! - Typed entity identifiers ([`id::UserId`], [`id::BillId`])
//!
//! Only things with a stable meaning across all domains belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
