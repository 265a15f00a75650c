//! Application Layer
//!
//! Use cases and application services.

pub mod check_session;
pub mod config;
pub mod guard;
pub mod sign_in;
pub mod sign_out;

// Re-exports
pub use check_session::CookieSessionResolver;
pub use config::AuthConfig;
pub use guard::AccessGuard;
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;
