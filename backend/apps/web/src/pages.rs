//! Protected pages
//!
//! Everything here sits behind the access guard, so handlers can take the
//! session without checking for it.

use auth::CurrentSession;
use auth::presentation::dto::SessionResponse;
use axum::Json;
use axum::extract::Path;
use axum::http::Uri;
use kernel::error::app_error::{AppError, AppResult};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePage {
    pub title: &'static str,
    pub session: SessionResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSectionPage {
    pub section: String,
    pub user_name: String,
    pub remember_me: bool,
}

pub async fn profile(CurrentSession(session): CurrentSession) -> Json<ProfilePage> {
    Json(ProfilePage {
        title: "Profile",
        session: SessionResponse::from(&session),
    })
}

/// `/profile/{*section}`
pub async fn profile_section(
    CurrentSession(session): CurrentSession,
    Path(section): Path<String>,
) -> Json<ProfileSectionPage> {
    Json(ProfileSectionPage {
        section,
        user_name: session.user.user_name,
        remember_me: session.remember_me,
    })
}

pub async fn not_found(uri: Uri) -> AppResult<()> {
    Err(AppError::not_found(format!("No page at {}", uri.path())))
}
