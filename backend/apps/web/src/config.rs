//! Server configuration
//!
//! Everything comes from the environment (after `.env` is loaded):
//!
//! | Variable               | Meaning                                             |
//! |------------------------|-----------------------------------------------------|
//! | `AUTH_SESSION_SECRET`  | base64, 32 bytes; required in release builds        |
//! | `AUTH_USERS`           | account entries, see `StaticAccountDirectory::parse` |
//! | `AUTH_COOKIE_SECURE`   | `true`/`false`; defaults to `true` in release builds |
//! | `AUTH_COOKIE_SAMESITE` | `strict`, `lax` or `none`                           |
//! | `DATABASE_URL`         | optional; in-memory sessions when unset             |
//! | `BIND_ADDR`            | listen address, default `0.0.0.0:31113`             |

use std::net::SocketAddr;

use anyhow::{Context, bail, ensure};
use auth::application::config::SameSite;
use auth::{AuthConfig, StaticAccountDirectory};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";

pub struct WebConfig {
    pub auth: AuthConfig,
    pub accounts: StaticAccountDirectory,
    pub database_url: Option<String>,
    pub bind_addr: SocketAddr,
}

impl WebConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), cfg!(debug_assertions))
    }

    /// Build from any variable source. `development` relaxes the secret and
    /// cookie requirements the way debug builds do.
    pub fn from_lookup<F>(lookup: F, development: bool) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut auth = match var("AUTH_SESSION_SECRET") {
            Some(secret_b64) => AuthConfig {
                session_secret: decode_secret(&secret_b64)?,
                ..AuthConfig::default()
            },
            None if development => {
                tracing::warn!("AUTH_SESSION_SECRET not set, using a random development secret");
                AuthConfig::development()
            }
            None => bail!("AUTH_SESSION_SECRET must be set in production"),
        };

        auth.cookie_secure = match var("AUTH_COOKIE_SECURE") {
            Some(value) => parse_bool(&value).context("AUTH_COOKIE_SECURE")?,
            None => !development,
        };

        if let Some(value) = var("AUTH_COOKIE_SAMESITE") {
            auth.cookie_same_site = SameSite::parse(&value)
                .with_context(|| format!("AUTH_COOKIE_SAMESITE: unknown policy {value:?}"))?;
        }

        let accounts = match var("AUTH_USERS") {
            Some(users) => StaticAccountDirectory::parse(&users).context("AUTH_USERS")?,
            None => StaticAccountDirectory::default(),
        };
        if accounts.is_empty() {
            tracing::warn!("No accounts configured, sign-in will always fail");
        }

        let bind_addr = var("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR")?;

        Ok(Self {
            auth,
            accounts,
            database_url: var("DATABASE_URL"),
            bind_addr,
        })
    }
}

fn decode_secret(secret_b64: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = platform::crypto::from_base64(secret_b64.trim())
        .context("AUTH_SESSION_SECRET is not valid base64")?;
    ensure!(
        bytes.len() == 32,
        "AUTH_SESSION_SECRET must decode to 32 bytes, got {}",
        bytes.len()
    );

    let mut secret = [0u8; 32];
    secret.copy_from_slice(&bytes);
    Ok(secret)
}

fn parse_bool(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected a boolean, got {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_development_defaults() {
        let config = WebConfig::from_lookup(lookup(&[]), true).unwrap();
        assert!(!config.auth.cookie_secure);
        assert_ne!(config.auth.session_secret, [0u8; 32]);
        assert!(config.database_url.is_none());
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse().unwrap());
        assert!(config.accounts.is_empty());
    }

    #[test]
    fn test_production_requires_secret() {
        assert!(WebConfig::from_lookup(lookup(&[]), false).is_err());
    }

    #[test]
    fn test_explicit_values() {
        // 32 bytes of 0x09
        let secret = "CQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQk=";
        let config = WebConfig::from_lookup(
            lookup(&[
                ("AUTH_SESSION_SECRET", secret),
                ("AUTH_COOKIE_SECURE", "false"),
                ("AUTH_COOKIE_SAMESITE", "strict"),
                ("DATABASE_URL", "postgres://localhost/app"),
                ("BIND_ADDR", "127.0.0.1:8080"),
            ]),
            false,
        )
        .unwrap();

        assert_eq!(config.auth.session_secret, [9u8; 32]);
        assert!(!config.auth.cookie_secure);
        assert_eq!(config.auth.cookie_same_site, SameSite::Strict);
        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/app")
        );
        assert_eq!(config.bind_addr, "127.0.0.1:8080".parse().unwrap());
    }

    #[test]
    fn test_secret_must_be_32_bytes() {
        let short = "AQEBAQEBAQEBAQEBAQEBAQ==";
        assert!(WebConfig::from_lookup(lookup(&[("AUTH_SESSION_SECRET", short)]), true).is_err());
        assert!(
            WebConfig::from_lookup(lookup(&[("AUTH_SESSION_SECRET", "%%%")]), true).is_err()
        );
    }

    #[test]
    fn test_bad_values_rejected() {
        assert!(WebConfig::from_lookup(lookup(&[("AUTH_COOKIE_SECURE", "maybe")]), true).is_err());
        assert!(WebConfig::from_lookup(lookup(&[("BIND_ADDR", "nowhere")]), true).is_err());
        assert!(
            WebConfig::from_lookup(lookup(&[("AUTH_COOKIE_SAMESITE", "sometimes")]), true).is_err()
        );
    }
}
