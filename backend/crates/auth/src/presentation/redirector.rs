//! Navigation Redirector
//!
//! Ends normal handling of a request and sends the client elsewhere.

use axum::response::{IntoResponse, Redirect, Response};

pub trait NavigationRedirector: Send + Sync {
    fn redirect(&self, location: &str) -> Response;
}

/// 307 Temporary Redirect; the method and body are preserved
#[derive(Debug, Clone, Copy, Default)]
pub struct TemporaryRedirect;

impl NavigationRedirector for TemporaryRedirect {
    fn redirect(&self, location: &str) -> Response {
        Redirect::temporary(location).into_response()
    }
}

/// 303 See Other; the follow-up request is always a GET
#[derive(Debug, Clone, Copy, Default)]
pub struct SeeOther;

impl NavigationRedirector for SeeOther {
    fn redirect(&self, location: &str) -> Response {
        Redirect::to(location).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{StatusCode, header};

    #[test]
    fn test_temporary_redirect() {
        let response = TemporaryRedirect.redirect("/login?callbackUrl=/profile");
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers()[header::LOCATION],
            "/login?callbackUrl=/profile"
        );
    }

    #[test]
    fn test_see_other() {
        let response = SeeOther.redirect("/login");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/login");
    }
}
