//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Sessions, the access decision, repository and resolver traits
//! - `application/` - The access guard and sign-in/sign-out use cases
//! - `infra/` - Session stores (in-memory, PostgreSQL) and the account directory
//! - `presentation/` - Guard middleware, redirector, HTTP handlers, DTOs, router
//!
//! ## Access guard
//! A protected request resolves its session once. With a session it
//! proceeds; without one it is redirected to
//! `/login?callbackUrl=<requested path>`. A failure to resolve is an error
//! response, never an allow.
//!
//! ## Security Model
//! - Server-side sessions referenced by an HMAC-signed cookie
//! - Passwords verified against Argon2id hashes
//! - Post-login callbacks restricted to same-origin paths

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::{AccessGuard, CookieSessionResolver};
pub use domain::{Decision, RedirectTarget, RequestContext, Session, SessionResolver};
pub use error::{AuthError, AuthResult};
pub use infra::{InMemorySessionStore, PgSessionStore, StaticAccountDirectory};
pub use presentation::{
    CurrentSession, GuardState, NavigationRedirector, SeeOther, TemporaryRedirect, auth_router,
    protect,
};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
