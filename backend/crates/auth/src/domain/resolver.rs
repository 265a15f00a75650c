//! Session Resolver
//!
//! Supplies the session, if any, for the current request. Resolution may
//! suspend (store lookups, signature checks). "No session" is `Ok(None)`;
//! `Err` means resolution itself failed and must not be read as either
//! outcome.

use crate::domain::access::RequestContext;
use crate::domain::entity::session::Session;
use crate::error::AuthResult;

#[trait_variant::make(SessionResolver: Send)]
pub trait LocalSessionResolver {
    async fn resolve(&self, ctx: &RequestContext<'_>) -> AuthResult<Option<Session>>;
}
