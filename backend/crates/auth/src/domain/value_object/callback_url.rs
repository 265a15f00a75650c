//! Callback URL Value Object
//!
//! Where to send the user after a successful sign-in. Only same-origin
//! relative paths are honoured; anything else collapses to the fallback so
//! the login form cannot be used as an open redirect.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CallbackUrl(String);

impl CallbackUrl {
    /// Accept `raw` when it is a same-origin path, otherwise use `fallback`
    pub fn sanitize(raw: Option<&str>, fallback: &str) -> Self {
        match raw.map(str::trim) {
            Some(candidate) if Self::is_same_origin_path(candidate) => {
                Self(candidate.to_string())
            }
            Some(rejected) => {
                tracing::debug!(callback_url = %rejected, "Rejected non-local callback URL");
                Self(fallback.to_string())
            }
            None => Self(fallback.to_string()),
        }
    }

    fn is_same_origin_path(candidate: &str) -> bool {
        // "//host" and "/\host" are protocol-relative in browsers
        candidate.starts_with('/')
            && !candidate.starts_with("//")
            && !candidate.starts_with("/\\")
            && !candidate.chars().any(char::is_control)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CallbackUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_paths_are_kept() {
        assert_eq!(
            CallbackUrl::sanitize(Some("/profile/settings"), "/").as_str(),
            "/profile/settings"
        );
        assert_eq!(
            CallbackUrl::sanitize(Some("/search?q=1"), "/").as_str(),
            "/search?q=1"
        );
    }

    #[test]
    fn test_foreign_targets_fall_back() {
        for raw in [
            "https://evil.example/",
            "//evil.example",
            "/\\evil.example",
            "javascript:alert(1)",
            "profile",
            "/pro\nfile",
        ] {
            assert_eq!(CallbackUrl::sanitize(Some(raw), "/").as_str(), "/", "{raw}");
        }
    }

    #[test]
    fn test_missing_falls_back() {
        assert_eq!(CallbackUrl::sanitize(None, "/home").as_str(), "/home");
    }
}
