//! Auth Middleware
//!
//! Route guard for protected pages.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::OriginalUri;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::application::AccessGuard;
use crate::domain::access::{Decision, RequestContext};
use crate::domain::resolver::SessionResolver;
use crate::domain::value_object::protected_path::ProtectedPath;
use crate::presentation::redirector::NavigationRedirector;

/// Middleware state
pub struct GuardState<R>
where
    R: SessionResolver + Send + Sync + 'static,
{
    pub guard: Arc<AccessGuard<R>>,
    pub redirector: Arc<dyn NavigationRedirector>,
}

impl<R> Clone for GuardState<R>
where
    R: SessionResolver + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            guard: self.guard.clone(),
            redirector: self.redirector.clone(),
        }
    }
}

/// Middleware that requires a session
///
/// With a session, the `Session` is stored in request extensions (see
/// `CurrentSession`) and the inner handler runs. Without one, the client is
/// redirected to the login page with the requested path as callback.
/// Resolver errors are rendered as error responses.
pub async fn require_session<R>(
    state: GuardState<R>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: SessionResolver + Send + Sync + 'static,
{
    // Nested routers see a stripped URI; the callback needs the full path
    let uri = match req.extensions().get::<OriginalUri>() {
        Some(OriginalUri(original)) => original,
        None => req.uri(),
    };
    let path = ProtectedPath::from_uri(uri).map_err(IntoResponse::into_response)?;

    let decision = {
        let ctx = RequestContext::new(&path, req.headers());
        state
            .guard
            .evaluate(&ctx)
            .await
            .map_err(IntoResponse::into_response)?
    };

    match decision {
        Decision::Allow(session) => {
            tracing::debug!(
                path = %path,
                session_id = %session.session_id,
                "Access allowed"
            );
            req.extensions_mut().insert(session);
            Ok(next.run(req).await)
        }
        Decision::RedirectTo(target) => {
            let location = target.to_location();
            tracing::debug!(path = %path, location = %location, "No session, redirecting to login");
            Err(state.redirector.redirect(&location))
        }
    }
}
