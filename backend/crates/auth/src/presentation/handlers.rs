//! HTTP Handlers

use std::collections::HashMap;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;

use crate::application::config::AuthConfig;
use crate::application::{CookieSessionResolver, SignInInput, SignInUseCase, SignOutUseCase};
use crate::domain::repository::{AccountDirectory, SessionRepository};
use crate::domain::value_object::callback_url::CallbackUrl;
use crate::error::AuthResult;
use crate::presentation::dto::{
    LoginPageResponse, SessionResponse, SignInRequest, SignInResponse,
};

pub const SIGN_IN_ENDPOINT: &str = "/api/auth/signin";

/// Shared state for auth handlers
pub struct AuthAppState<S, A>
where
    S: SessionRepository + Send + Sync + 'static,
    A: AccountDirectory + Send + Sync + 'static,
{
    pub sessions: Arc<S>,
    pub accounts: Arc<A>,
    pub config: Arc<AuthConfig>,
}

impl<S, A> Clone for AuthAppState<S, A>
where
    S: SessionRepository + Send + Sync + 'static,
    A: AccountDirectory + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            sessions: self.sessions.clone(),
            accounts: self.accounts.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /api/auth/signin
pub async fn sign_in<S, A>(
    State(state): State<AuthAppState<S, A>>,
    Json(req): Json<SignInRequest>,
) -> AuthResult<impl IntoResponse>
where
    S: SessionRepository + Send + Sync + 'static,
    A: AccountDirectory + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(
        state.accounts.clone(),
        state.sessions.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(SignInInput {
            user_name: req.user_name,
            password: req.password,
            remember_me: req.remember_me,
            callback_url: req.callback_url,
        })
        .await?;

    // Max-Age must match the session TTL
    let cookie = state
        .config
        .session_cookie()
        .build_set_cookie(&output.session_token, Some(output.max_age_secs));

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(SignInResponse {
            public_id: output.public_id,
            redirect_to: output.redirect_to,
        }),
    ))
}

// ============================================================================
// Sign Out
// ============================================================================

/// POST /api/auth/signout
pub async fn sign_out<S, A>(
    State(state): State<AuthAppState<S, A>>,
    headers: HeaderMap,
) -> impl IntoResponse
where
    S: SessionRepository + Send + Sync + 'static,
    A: AccountDirectory + Send + Sync + 'static,
{
    if let Some(token) = platform::cookie::extract_cookie(&headers, &state.config.session_cookie_name)
    {
        let use_case = SignOutUseCase::new(state.sessions.clone(), state.config.clone());
        // The cookie is cleared either way
        if let Err(e) = use_case.execute(&token).await {
            tracing::warn!(error = %e, "Failed to delete session on sign-out");
        }
    }

    let cookie = state.config.session_cookie().build_delete_cookie();

    (StatusCode::NO_CONTENT, [(header::SET_COOKIE, cookie)])
}

// ============================================================================
// Session
// ============================================================================

/// GET /api/auth/session
///
/// The current session, or `null` when there is none.
pub async fn session<S, A>(
    State(state): State<AuthAppState<S, A>>,
    headers: HeaderMap,
) -> AuthResult<Json<Option<SessionResponse>>>
where
    S: SessionRepository + Send + Sync + 'static,
    A: AccountDirectory + Send + Sync + 'static,
{
    let resolver = CookieSessionResolver::new(state.sessions.clone(), state.config.clone());
    let session = resolver.resolve_headers(&headers).await?;

    Ok(Json(session.as_ref().map(SessionResponse::from)))
}

// ============================================================================
// Login page
// ============================================================================

/// GET /login
///
/// Tells the client where to post credentials and which callback to send along.
pub async fn login_page<S, A>(
    State(state): State<AuthAppState<S, A>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<LoginPageResponse>
where
    S: SessionRepository + Send + Sync + 'static,
    A: AccountDirectory + Send + Sync + 'static,
{
    let raw = params.get(&state.config.callback_param).map(String::as_str);

    Json(LoginPageResponse {
        sign_in_endpoint: SIGN_IN_ENDPOINT,
        callback_url: CallbackUrl::sanitize(raw, &state.config.default_redirect),
    })
}
