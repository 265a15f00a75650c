//! Protected Path Value Object
//!
//! The path component of a request for a protected area. It travels through
//! the login redirect as the `callbackUrl` query value and must come back
//! unchanged.
//!
//! ## 不変条件
//! - Starts with `/`
//! - Contains no query (`?`) or fragment (`#`)
//!
//! ## Encoding
//! Inside the login query only the characters that would change how the
//! query parses are escaped. `/` stays literal, so `/profile/settings`
//! renders as `callbackUrl=/profile/settings`. `%` is escaped too, so
//! decoding the query value gives back the exact original path.

use std::fmt;

use axum::http::Uri;
use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

use crate::error::{AuthError, AuthResult};

/// Characters escaped when a path is embedded in a query value
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>');

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProtectedPath(String);

impl ProtectedPath {
    pub fn parse(path: &str) -> AuthResult<Self> {
        if !path.starts_with('/') {
            return Err(AuthError::MalformedPath(path.to_string()));
        }
        if path.contains(['?', '#']) {
            return Err(AuthError::MalformedPath(path.to_string()));
        }
        Ok(Self(path.to_string()))
    }

    /// Take the path component of a request URI (query dropped)
    pub fn from_uri(uri: &Uri) -> AuthResult<Self> {
        Self::parse(uri.path())
    }

    /// Rebuild a path from a decoded `callbackUrl` query value
    pub fn from_query_value(encoded: &str) -> AuthResult<Self> {
        let decoded = percent_decode_str(encoded)
            .decode_utf8()
            .map_err(|_| AuthError::MalformedPath(encoded.to_string()))?;
        Self::parse(&decoded)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Render for use as a query value
    pub fn to_query_value(&self) -> String {
        utf8_percent_encode(&self.0, QUERY_VALUE).to_string()
    }
}

impl fmt::Display for ProtectedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_paths_render_verbatim() {
        for path in ["/profile", "/profile/settings", "/a/b-c_d.e~f", "/"] {
            let parsed = ProtectedPath::parse(path).unwrap();
            assert_eq!(parsed.to_query_value(), path);
        }
    }

    #[test]
    fn test_query_breaking_characters_are_escaped() {
        let path = ProtectedPath::parse("/docs/a&b=c+d").unwrap();
        assert_eq!(path.to_query_value(), "/docs/a%26b%3Dc%2Bd");
    }

    #[test]
    fn test_percent_is_escaped_for_exact_round_trip() {
        let path = ProtectedPath::parse("/files/a%20b").unwrap();
        let encoded = path.to_query_value();
        assert_eq!(encoded, "/files/a%2520b");
        assert_eq!(ProtectedPath::from_query_value(&encoded).unwrap(), path);
    }

    #[test]
    fn test_from_uri_drops_query() {
        let uri: Uri = "/profile/settings?tab=security".parse().unwrap();
        let path = ProtectedPath::from_uri(&uri).unwrap();
        assert_eq!(path.as_str(), "/profile/settings");
    }

    #[test]
    fn test_rejects_relative_and_query_paths() {
        assert!(ProtectedPath::parse("profile").is_err());
        assert!(ProtectedPath::parse("").is_err());
        assert!(ProtectedPath::parse("/profile?x=1").is_err());
        assert!(ProtectedPath::parse("/profile#top").is_err());
    }
}
