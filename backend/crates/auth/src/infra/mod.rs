//! Infrastructure Layer
//!
//! Session stores and the account directory.

pub mod accounts;
pub mod memory;
pub mod postgres;

pub use accounts::StaticAccountDirectory;
pub use memory::InMemorySessionStore;
pub use postgres::PgSessionStore;
