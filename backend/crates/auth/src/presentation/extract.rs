//! Session extractor for guarded handlers

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::domain::entity::session::Session;
use crate::error::AuthError;

/// The session `require_session` attached to the request
///
/// Rejects with 401 when used on a route the guard does not cover.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Session);

impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Session>()
            .cloned()
            .map(CurrentSession)
            .ok_or(AuthError::SessionRequired)
    }
}
