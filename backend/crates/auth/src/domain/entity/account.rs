//! Account Entity
//!
//! A user able to sign in: identity plus the stored password hash.

use platform::password::{ClearTextPassword, HashedPassword};

use crate::domain::entity::session::SessionUser;

#[derive(Debug, Clone)]
pub struct Account {
    pub user: SessionUser,
    pub password_hash: HashedPassword,
}

impl Account {
    pub fn new(user: SessionUser, password_hash: HashedPassword) -> Self {
        Self {
            user,
            password_hash,
        }
    }

    pub fn verify_password(&self, password: &ClearTextPassword) -> bool {
        self.password_hash.verify(password)
    }
}
