//! Sign In Use Case
//!
//! Verifies credentials, creates a session and decides where the user goes next.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::session::Session;
use crate::domain::repository::{AccountDirectory, SessionRepository};
use crate::domain::value_object::{callback_url::CallbackUrl, session_token::SessionToken};
use crate::error::{AuthError, AuthResult};

pub struct SignInInput {
    pub user_name: String,
    pub password: String,
    pub remember_me: bool,
    /// Where the login redirect said to return to
    pub callback_url: Option<String>,
}

pub struct SignInOutput {
    /// Signed session token for the cookie
    pub session_token: String,
    pub public_id: String,
    /// Cookie Max-Age; matches the session TTL
    pub max_age_secs: u64,
    pub redirect_to: CallbackUrl,
}

pub struct SignInUseCase<A, S>
where
    A: AccountDirectory,
    S: SessionRepository,
{
    accounts: Arc<A>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<A, S> SignInUseCase<A, S>
where
    A: AccountDirectory,
    S: SessionRepository,
{
    pub fn new(accounts: Arc<A>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            accounts,
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let password =
            ClearTextPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        let account = self
            .accounts
            .find_by_user_name(input.user_name.trim())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !account.verify_password(&password) {
            return Err(AuthError::InvalidCredentials);
        }

        let ttl = self.config.session_ttl(input.remember_me);
        let chrono_ttl = chrono::Duration::from_std(ttl)
            .map_err(|e| AuthError::Internal(format!("Invalid session TTL: {e}")))?;

        let session = Session::new(account.user.clone(), input.remember_me, chrono_ttl);
        self.session_repo.create(&session).await?;

        tracing::info!(
            session_id = %session.session_id,
            public_id = %account.user.public_id,
            remember_me = input.remember_me,
            "User signed in"
        );

        Ok(SignInOutput {
            session_token: SessionToken::new(session.session_id).sign(&self.config.session_secret),
            public_id: account.user.public_id.to_string(),
            max_age_secs: ttl.as_secs(),
            redirect_to: CallbackUrl::sanitize(
                input.callback_url.as_deref(),
                &self.config.default_redirect,
            ),
        })
    }
}
