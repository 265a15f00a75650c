//! Auth Router

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::{self, Next},
    routing::{get, post},
};

use crate::application::config::AuthConfig;
use crate::domain::repository::{AccountDirectory, SessionRepository};
use crate::domain::resolver::SessionResolver;
use crate::presentation::handlers::{self, AuthAppState, SIGN_IN_ENDPOINT};
use crate::presentation::middleware::{GuardState, require_session};

/// Sign-in, sign-out, session and login page routes
pub fn auth_router<S, A>(sessions: Arc<S>, accounts: Arc<A>, config: Arc<AuthConfig>) -> Router
where
    S: SessionRepository + Send + Sync + 'static,
    A: AccountDirectory + Send + Sync + 'static,
{
    let login_path = config.login_path.clone();
    let state = AuthAppState {
        sessions,
        accounts,
        config,
    };

    Router::new()
        .route(SIGN_IN_ENDPOINT, post(handlers::sign_in::<S, A>))
        .route("/api/auth/signout", post(handlers::sign_out::<S, A>))
        .route("/api/auth/session", get(handlers::session::<S, A>))
        .route(&login_path, get(handlers::login_page::<S, A>))
        .with_state(state)
}

/// Put every route of `router` behind the access guard
pub fn protect<R>(router: Router, state: GuardState<R>) -> Router
where
    R: SessionResolver + Send + Sync + 'static,
{
    router.route_layer(middleware::from_fn(move |req: Request<Body>, next: Next| {
        require_session(state.clone(), req, next)
    }))
}
