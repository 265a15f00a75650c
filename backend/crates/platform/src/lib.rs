//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations with no domain knowledge:
//! - Cryptographic helpers (SHA-256, HMAC-SHA256, URL-safe Base64)
//! - Password hashing (Argon2id)
//! - Cookie parsing and `Set-Cookie` construction

pub mod cookie;
pub mod crypto;
pub mod password;
