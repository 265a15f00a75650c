//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::session::Session;
use crate::domain::value_object::callback_url::CallbackUrl;

// ============================================================================
// Sign In
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub user_name: String,
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
    /// Value of the `callbackUrl` the login redirect carried
    pub callback_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub public_id: String,
    /// Where the client should navigate now
    pub redirect_to: CallbackUrl,
}

// ============================================================================
// Session
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUserResponse {
    pub id: String,
    pub name: String,
    pub role: String,
}

/// Body of `GET /api/auth/session`; the endpoint returns `null` without a session
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user: SessionUserResponse,
    pub expires: Option<DateTime<Utc>>,
    pub expires_at_ms: i64,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        Self {
            user: SessionUserResponse {
                id: session.user.public_id.to_string(),
                name: session.user.user_name.clone(),
                role: session.user.role.code().to_string(),
            },
            expires: session.expires_at(),
            expires_at_ms: session.expires_at_ms,
        }
    }
}

// ============================================================================
// Login page
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginPageResponse {
    pub sign_in_endpoint: &'static str,
    /// Sanitized callback to submit along with the credentials
    pub callback_url: CallbackUrl,
}
