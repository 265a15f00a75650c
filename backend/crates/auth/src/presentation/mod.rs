//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, the guard middleware and its redirector.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod redirector;
pub mod router;

pub use extract::CurrentSession;
pub use handlers::AuthAppState;
pub use middleware::{GuardState, require_session};
pub use redirector::{NavigationRedirector, SeeOther, TemporaryRedirect};
pub use router::{auth_router, protect};
