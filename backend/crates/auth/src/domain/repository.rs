//! Repository Traits
//!
//! Interfaces for persistence. Implementations live in the infrastructure layer.

use uuid::Uuid;

use crate::domain::entity::{account::Account, session::Session};
use crate::error::AuthResult;

/// Server-side session storage
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    async fn create(&self, session: &Session) -> AuthResult<()>;

    /// Find a session by ID. Expired rows may still be returned; callers check.
    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<Session>>;

    /// Persist activity and expiry changes
    async fn update(&self, session: &Session) -> AuthResult<()>;

    async fn delete(&self, session_id: Uuid) -> AuthResult<()>;

    /// Remove every expired session, returning how many were removed
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}

/// Accounts allowed to sign in
#[trait_variant::make(AccountDirectory: Send)]
pub trait LocalAccountDirectory {
    async fn find_by_user_name(&self, user_name: &str) -> AuthResult<Option<Account>>;
}
