//! Domain Layer
//!
//! Entities, value objects, the access decision, and the traits at the
//! persistence and session-resolution seams.

pub mod access;
pub mod entity;
pub mod repository;
pub mod resolver;
pub mod value_object;

// Re-exports
pub use access::{Decision, RedirectTarget, RequestContext};
pub use entity::{account::Account, session::Session, session::SessionUser};
pub use repository::{AccountDirectory, SessionRepository};
pub use resolver::SessionResolver;
