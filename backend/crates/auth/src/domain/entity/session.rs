//! Session Entity
//!
//! A server-side record asserting that requests carrying its token belong
//! to an authenticated user. Stored by a `SessionRepository`; the cookie only
//! carries a signed reference to `session_id`.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::value_object::{public_id::PublicId, user_role::UserRole};

/// The identity a session speaks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub public_id: PublicId,
    pub user_name: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Session ID (UUID v4)
    pub session_id: Uuid,
    pub user: SessionUser,
    /// Expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
    /// Whether "Remember Me" was checked
    pub remember_me: bool,
    pub created_at: DateTime<Utc>,
    pub last_activity_at: DateTime<Utc>,
}

impl Session {
    /// TTL comes from configuration, not from here.
    pub fn new(user: SessionUser, remember_me: bool, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            session_id: Uuid::new_v4(),
            user,
            expires_at_ms: (now + ttl).timestamp_millis(),
            remember_me,
            created_at: now,
            last_activity_at: now,
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }

    pub fn touch(&mut self) {
        self.last_activity_at = Utc::now();
    }

    pub fn remaining_ms(&self) -> i64 {
        let now_ms = Utc::now().timestamp_millis();
        (self.expires_at_ms - now_ms).max(0)
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.expires_at_ms)
    }

    /// Slide a remember-me session forward.
    ///
    /// Only remember-me sessions move, and only once less than half of
    /// `ttl_long` remains; they are then pushed to `now + ttl_long`.
    pub fn extend_if_needed(&mut self, ttl_long: Duration) -> bool {
        if !self.remember_me {
            return false;
        }

        let now = Utc::now();
        if self.expires_at_ms < (now + (ttl_long / 2)).timestamp_millis() {
            self.expires_at_ms = (now + ttl_long).timestamp_millis();
            return true;
        }
        false
    }
}
