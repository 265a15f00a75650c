//! PublicId Value Object
//!
//! Public identifier of a user, safe to expose in API responses.
//! Wraps a Nanoid (21 URL-safe characters).
//!
//! ## Usage
//! ```rust
//! use auth::domain::value_object::public_id::PublicId;
//!
//! let random = PublicId::new();
//! assert_eq!(random.as_str().len(), 21);
//!
//! // Stable across restarts for configured accounts
//! assert_eq!(PublicId::derive("alice"), PublicId::derive("alice"));
//! ```
use std::str::FromStr;

use kernel::error::app_error::{AppError, AppResult};
use nid::Nanoid;
use platform::crypto::{sha256, to_base64_url};
use serde::{Deserialize, Serialize};

/// Length of a default Nanoid
const PUBLIC_ID_LENGTH: usize = 21;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicId(pub Nanoid);

impl PublicId {
    #[inline]
    pub fn new() -> Self {
        Self(Nanoid::new())
    }

    /// Deterministic id from a seed (e.g. a configured user name).
    ///
    /// The base64url alphabet is the Nanoid alphabet, so a truncated
    /// base64url digest is always a valid id.
    pub fn derive(seed: &str) -> Self {
        let digest = to_base64_url(&sha256(seed.as_bytes()));
        let id = Nanoid::from_str(&digest[..PUBLIC_ID_LENGTH])
            .expect("base64url digest prefix is a valid Nanoid");
        Self(id)
    }

    #[inline]
    pub fn parse_str(s: &str) -> AppResult<Self> {
        Nanoid::from_str(s)
            .map(PublicId)
            .map_err(|e| AppError::bad_request(format!("Invalid PublicId: {}", e)))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for PublicId {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        PublicId::parse_str(s)
    }
}

impl Default for PublicId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PublicId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_id_new() {
        assert_eq!(PublicId::new().as_str().len(), PUBLIC_ID_LENGTH);
    }

    #[test]
    fn test_derive_is_stable_and_distinct() {
        let alice = PublicId::derive("alice");
        assert_eq!(alice, PublicId::derive("alice"));
        assert_ne!(alice, PublicId::derive("bob"));
        assert_eq!(alice.as_str().len(), PUBLIC_ID_LENGTH);
    }

    #[test]
    fn test_parse_round_trip() {
        let id = PublicId::derive("carol");
        let parsed: PublicId = id.as_str().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(PublicId::parse_str("invalid_id!@#").is_err());
    }
}
