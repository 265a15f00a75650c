//! Session Token Value Object
//!
//! Cookie value referencing a server-side session:
//! `<session uuid>.<base64url(HMAC-SHA256(secret, session uuid))>`.
//! The signature lets forged or truncated cookies be rejected before any
//! store lookup.

use platform::crypto::{from_base64_url, hmac_sha256, to_base64_url, verify_hmac_sha256};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionToken {
    session_id: Uuid,
}

impl SessionToken {
    pub fn new(session_id: Uuid) -> Self {
        Self { session_id }
    }

    #[inline]
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Sign into the cookie representation
    pub fn sign(&self, secret: &[u8]) -> String {
        let id = self.session_id.to_string();
        let signature = hmac_sha256(secret, id.as_bytes());
        format!("{}.{}", id, to_base64_url(&signature))
    }

    /// Verify a cookie value; `None` for anything malformed or forged
    pub fn verify(token: &str, secret: &[u8]) -> Option<Self> {
        let (id, signature_b64) = token.split_once('.')?;
        let signature = from_base64_url(signature_b64).ok()?;

        if !verify_hmac_sha256(secret, id.as_bytes(), &signature) {
            return None;
        }

        id.parse().ok().map(Self::new)
    }
}
