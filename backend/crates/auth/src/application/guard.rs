//! Access Guard
//!
//! Decides whether a request may reach protected content. The session is
//! resolved exactly once; presence allows, absence redirects to the login
//! page with the requested path as the callback. Resolver failures are
//! returned as errors and never become `Allow`.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::access::{Decision, RedirectTarget, RequestContext};
use crate::domain::resolver::SessionResolver;
use crate::domain::value_object::protected_path::ProtectedPath;
use crate::error::AuthResult;

pub struct AccessGuard<R>
where
    R: SessionResolver + Send + Sync + 'static,
{
    resolver: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> AccessGuard<R>
where
    R: SessionResolver + Send + Sync + 'static,
{
    pub fn new(resolver: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { resolver, config }
    }

    pub async fn evaluate(&self, ctx: &RequestContext<'_>) -> AuthResult<Decision> {
        let decision = match self.resolver.resolve(ctx).await? {
            Some(session) => Decision::Allow(session),
            None => Decision::RedirectTo(self.redirect_target(ctx.path())),
        };

        Ok(decision)
    }

    /// Login redirect that returns the user to `path`
    pub fn redirect_target(&self, path: &ProtectedPath) -> RedirectTarget {
        RedirectTarget::new(
            self.config.login_path.clone(),
            self.config.callback_param.clone(),
            Some(path.clone()),
        )
    }
}
