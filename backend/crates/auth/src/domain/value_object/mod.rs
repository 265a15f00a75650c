//! Value Object Module

pub mod callback_url;
pub mod protected_path;
pub mod public_id;
pub mod session_token;
pub mod user_role;
