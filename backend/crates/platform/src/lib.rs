//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Login throttling (per-identity failed attempt tracking)
//! - The list query pipeline (search / sort / paginate)
//! - Password hashing (Argon2id, NIST SP 800-63B compliant)
//! - Token signing (HMAC-SHA256, URL-safe Base64)

pub mod crypto;
pub mod list_query;
pub mod login_throttle;
pub mod password;
