//! Check Session Use Case
//!
//! Resolves the session behind the request's session cookie.

use std::sync::Arc;

use axum::http::HeaderMap;

use crate::application::config::AuthConfig;
use crate::domain::access::RequestContext;
use crate::domain::entity::session::Session;
use crate::domain::repository::SessionRepository;
use crate::domain::resolver::SessionResolver;
use crate::domain::value_object::session_token::SessionToken;
use crate::error::{AuthError, AuthResult};

/// Session resolver backed by a signed cookie and a session store
///
/// A missing, malformed, forged, unknown or expired token resolves to
/// `None`. Store failures are returned as errors.
pub struct CookieSessionResolver<S>
where
    S: SessionRepository + Send + Sync + 'static,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> Clone for CookieSessionResolver<S>
where
    S: SessionRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            session_repo: self.session_repo.clone(),
            config: self.config.clone(),
        }
    }
}

impl<S> CookieSessionResolver<S>
where
    S: SessionRepository + Send + Sync + 'static,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Resolve from raw headers (for endpoints outside the guard)
    pub async fn resolve_headers(&self, headers: &HeaderMap) -> AuthResult<Option<Session>> {
        match platform::cookie::extract_cookie(headers, &self.config.session_cookie_name) {
            Some(token) => self.get_session(&token).await,
            None => Ok(None),
        }
    }

    /// Load the session a cookie value refers to and record activity
    pub async fn get_session(&self, token: &str) -> AuthResult<Option<Session>> {
        let Some(token) = SessionToken::verify(token, &self.config.session_secret) else {
            tracing::debug!("Rejected session cookie with bad signature");
            return Ok(None);
        };
        let session_id = token.session_id();

        let Some(mut session) = self.session_repo.find_by_id(session_id).await? else {
            tracing::debug!(session_id = %session_id, "Session not found");
            return Ok(None);
        };

        if session.is_expired() {
            tracing::debug!(session_id = %session_id, "Session expired");
            self.session_repo.delete(session_id).await?;
            return Ok(None);
        }

        session.touch();

        let ttl_long = chrono::Duration::from_std(self.config.session_ttl_long)
            .map_err(|e| AuthError::Internal(format!("Invalid session TTL: {e}")))?;
        if session.extend_if_needed(ttl_long) {
            tracing::debug!(session_id = %session_id, "Extended remember-me session");
        }

        // Activity bookkeeping must not delay or fail the request
        let session_clone = session.clone();
        let repo = self.session_repo.clone();
        tokio::spawn(async move {
            if let Err(e) = repo.update(&session_clone).await {
                tracing::warn!(error = %e, "Failed to update session activity");
            }
        });

        Ok(Some(session))
    }
}

impl<S> SessionResolver for CookieSessionResolver<S>
where
    S: SessionRepository + Send + Sync + 'static,
{
    async fn resolve(&self, ctx: &RequestContext<'_>) -> AuthResult<Option<Session>> {
        self.resolve_headers(ctx.headers()).await
    }
}
