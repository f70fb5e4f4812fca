//! Startup configuration for the server.
//!
//! The configuration is resolved once in `main` and handed to the parts of
//! the app that need it, there is no global configuration.

use std::{net::SocketAddr, path::PathBuf};

/// Where the SQLite database is stored when no path is given.
pub const DEFAULT_DB_PATH: &str = "data/expenses.db";

/// The name of the environment variable that holds the cookie secret.
pub const COOKIE_SECRET_ENV_VAR: &str = "SECRET_KEY";

/// The secret used for signing cookies when [COOKIE_SECRET_ENV_VAR] is not set.
///
/// Only suitable for local development.
pub const DEFAULT_COOKIE_SECRET: &str = "dev-secret";

/// Everything the server needs to know before it can start.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// File path to the SQLite database.
    pub db_path: PathBuf,
    /// The address to serve the app from.
    pub address: SocketAddr,
    /// The secret for signing and encrypting the flash message cookie.
    pub cookie_secret: String,
}

impl Config {
    /// Create a config, reading the cookie secret from the environment.
    pub fn new(db_path: PathBuf, address: SocketAddr) -> Self {
        let cookie_secret = resolve_cookie_secret(std::env::var(COOKIE_SECRET_ENV_VAR).ok());

        Self {
            db_path,
            address,
            cookie_secret,
        }
    }
}

/// Pick the cookie secret, falling back to [DEFAULT_COOKIE_SECRET] when
/// `secret` is missing or blank.
pub fn resolve_cookie_secret(secret: Option<String>) -> String {
    match secret {
        Some(secret) if !secret.trim().is_empty() => secret,
        _ => {
            tracing::warn!(
                "{COOKIE_SECRET_ENV_VAR} is not set, using an insecure default secret. \
                Set {COOKIE_SECRET_ENV_VAR} before exposing the server to other people."
            );
            DEFAULT_COOKIE_SECRET.to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_COOKIE_SECRET, resolve_cookie_secret};

    #[test]
    fn uses_given_secret() {
        let secret = resolve_cookie_secret(Some("hunter2".to_owned()));

        assert_eq!(secret, "hunter2");
    }

    #[test]
    fn falls_back_to_default_secret() {
        assert_eq!(resolve_cookie_secret(None), DEFAULT_COOKIE_SECRET);
        assert_eq!(
            resolve_cookie_secret(Some("   ".to_owned())),
            DEFAULT_COOKIE_SECRET
        );
    }
}
