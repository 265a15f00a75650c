//! Sign Out Use Case

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::SessionRepository;
use crate::domain::value_object::session_token::SessionToken;
use crate::error::AuthResult;

pub struct SignOutUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> SignOutUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Delete the session behind `token`. Returns whether a valid token was given.
    pub async fn execute(&self, token: &str) -> AuthResult<bool> {
        let Some(token) = SessionToken::verify(token, &self.config.session_secret) else {
            return Ok(false);
        };

        self.session_repo.delete(token.session_id()).await?;
        tracing::info!(session_id = %token.session_id(), "User signed out");

        Ok(true)
    }
}
