//! Static account directory
//!
//! Accounts come from configuration, one entry per account:
//!
//! ```text
//! # role defaults to user
//! alice:$argon2id$v=19$m=19456,t=2,p=1$...
//! bob:admin:$argon2id$v=19$m=19456,t=2,p=1$...
//! ```
//!
//! Entries are separated by newlines or `;`. Public ids are derived from
//! the user name so they stay stable across restarts.

use std::collections::HashMap;
use std::sync::Arc;

use platform::password::HashedPassword;

use crate::domain::entity::{account::Account, session::SessionUser};
use crate::domain::repository::AccountDirectory;
use crate::domain::value_object::{public_id::PublicId, user_role::UserRole};
use crate::error::{AuthError, AuthResult};

#[derive(Clone, Default)]
pub struct StaticAccountDirectory {
    accounts: Arc<HashMap<String, Account>>,
}

impl StaticAccountDirectory {
    pub fn new(accounts: impl IntoIterator<Item = Account>) -> Self {
        let accounts = accounts
            .into_iter()
            .map(|account| (account.user.user_name.to_ascii_lowercase(), account))
            .collect();
        Self {
            accounts: Arc::new(accounts),
        }
    }

    /// Parse the configuration format described in the module docs
    pub fn parse(entries: &str) -> AuthResult<Self> {
        let mut accounts = Vec::new();

        for entry in entries
            .split(['\n', ';'])
            .map(str::trim)
            .filter(|e| !e.is_empty() && !e.starts_with('#'))
        {
            accounts.push(Self::parse_entry(entry)?);
        }

        Ok(Self::new(accounts))
    }

    fn parse_entry(entry: &str) -> AuthResult<Account> {
        let (user_name, rest) = entry
            .split_once(':')
            .ok_or_else(|| AuthError::Internal(format!("Account entry without hash: {entry}")))?;

        let user_name = user_name.trim();
        if user_name.is_empty() {
            return Err(AuthError::Internal("Account entry without user name".to_string()));
        }

        // PHC strings start with '$'; anything before that is a role
        let (role, phc) = match rest.split_once(':') {
            Some((role, phc)) if !rest.starts_with('$') => {
                let role = UserRole::from_code(role.trim()).ok_or_else(|| {
                    AuthError::Internal(format!("Unknown role for {user_name}: {role}"))
                })?;
                (role, phc)
            }
            _ => (UserRole::User, rest),
        };

        let password_hash = HashedPassword::from_phc_string(phc.trim())?;

        Ok(Account::new(
            SessionUser {
                public_id: PublicId::derive(&user_name.to_ascii_lowercase()),
                user_name: user_name.to_string(),
                role,
            },
            password_hash,
        ))
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl AccountDirectory for StaticAccountDirectory {
    async fn find_by_user_name(&self, user_name: &str) -> AuthResult<Option<Account>> {
        Ok(self.accounts.get(&user_name.to_ascii_lowercase()).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::ClearTextPassword;

    fn phc(password: &str) -> String {
        ClearTextPassword::new(password.to_string())
            .unwrap()
            .hash()
            .unwrap()
            .as_phc_string()
            .to_string()
    }

    #[tokio::test]
    async fn test_parse_entries_with_and_without_role() {
        let entries = format!(
            "alice:{}\n# comment\nbob:admin:{}",
            phc("alice-pass"),
            phc("bob-pass")
        );
        let directory = StaticAccountDirectory::parse(&entries).unwrap();
        assert_eq!(directory.len(), 2);

        let alice = directory.find_by_user_name("Alice").await.unwrap().unwrap();
        assert_eq!(alice.user.role, UserRole::User);
        assert_eq!(alice.user.public_id, PublicId::derive("alice"));
        assert!(alice.verify_password(&ClearTextPassword::new("alice-pass".into()).unwrap()));

        let bob = directory.find_by_user_name("bob").await.unwrap().unwrap();
        assert_eq!(bob.user.role, UserRole::Admin);
    }

    #[test]
    fn test_parse_rejects_bad_entries() {
        assert!(StaticAccountDirectory::parse("nohash").is_err());
        assert!(StaticAccountDirectory::parse("carol:plaintext").is_err());
        assert!(StaticAccountDirectory::parse(&format!("dave:root:{}", phc("x"))).is_err());
    }

    #[test]
    fn test_parse_empty() {
        assert!(StaticAccountDirectory::parse("  \n ; ").unwrap().is_empty());
    }
}
