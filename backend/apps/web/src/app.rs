//! Router assembly

use std::sync::Arc;

use auth::domain::repository::{AccountDirectory, SessionRepository};
use auth::{
    AccessGuard, AuthConfig, CookieSessionResolver, GuardState, NavigationRedirector,
    TemporaryRedirect, auth_router, protect,
};
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::pages;

/// Auth endpoints plus the guarded `/profile` area
pub fn build_router<S, A>(sessions: Arc<S>, accounts: Arc<A>, config: Arc<AuthConfig>) -> Router
where
    S: SessionRepository + Send + Sync + 'static,
    A: AccountDirectory + Send + Sync + 'static,
{
    let resolver = Arc::new(CookieSessionResolver::new(sessions.clone(), config.clone()));
    let redirector: Arc<dyn NavigationRedirector> = Arc::new(TemporaryRedirect);
    let guard = GuardState {
        guard: Arc::new(AccessGuard::new(resolver, config.clone())),
        redirector,
    };

    let protected = Router::new()
        .route("/profile", get(pages::profile))
        .route("/profile/{*section}", get(pages::profile_section));

    Router::new()
        .merge(protect(protected, guard))
        .merge(auth_router(sessions, accounts, config))
        .fallback(pages::not_found)
        .layer(TraceLayer::new_for_http())
}
