//! Access Decision
//!
//! What the access guard decides for one request, and the inputs it
//! decides from. A redirect is a value here; sending it is the job of a
//! `NavigationRedirector` in the presentation layer.

use axum::http::HeaderMap;

use crate::domain::entity::session::Session;
use crate::domain::value_object::protected_path::ProtectedPath;

/// The request as seen by a session resolver
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    path: &'a ProtectedPath,
    headers: &'a HeaderMap,
}

impl<'a> RequestContext<'a> {
    pub fn new(path: &'a ProtectedPath, headers: &'a HeaderMap) -> Self {
        Self { path, headers }
    }

    /// The path the user asked for
    #[inline]
    pub fn path(&self) -> &'a ProtectedPath {
        self.path
    }

    #[inline]
    pub fn headers(&self) -> &'a HeaderMap {
        self.headers
    }
}

/// Outcome of evaluating the guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// A session exists; the request may reach the protected content
    Allow(Session),
    /// No session; send the client to the login page
    RedirectTo(RedirectTarget),
}

impl Decision {
    pub fn is_allow(&self) -> bool {
        matches!(self, Decision::Allow(_))
    }
}

/// Login location plus the optional return path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTarget {
    login_path: String,
    callback_param: String,
    callback: Option<ProtectedPath>,
}

impl RedirectTarget {
    pub fn new(
        login_path: impl Into<String>,
        callback_param: impl Into<String>,
        callback: Option<ProtectedPath>,
    ) -> Self {
        Self {
            login_path: login_path.into(),
            callback_param: callback_param.into(),
            callback,
        }
    }

    pub fn callback(&self) -> Option<&ProtectedPath> {
        self.callback.as_ref()
    }

    /// The `Location` value, e.g. `/login?callbackUrl=/profile`
    pub fn to_location(&self) -> String {
        match &self.callback {
            Some(path) => format!(
                "{}?{}={}",
                self.login_path,
                self.callback_param,
                path.to_query_value()
            ),
            None => self.login_path.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_with_callback() {
        let target = RedirectTarget::new(
            "/login",
            "callbackUrl",
            Some(ProtectedPath::parse("/profile/settings").unwrap()),
        );
        assert_eq!(target.to_location(), "/login?callbackUrl=/profile/settings");
    }

    #[test]
    fn test_location_without_callback() {
        let target = RedirectTarget::new("/signin", "next", None);
        assert_eq!(target.to_location(), "/signin");
        assert!(target.callback().is_none());
    }
}
