//! Connection parameters read from the environment.
//!
//! All four discrete variables must be present, even when `MYSQL_URL`
//! already carries a full connection string.

use std::fmt;

use crate::ConfigError;

/// Variables that must be present before any operation is attempted.
pub const REQUIRED_VARS: [&str; 4] = ["DB_HOST", "DB_USER", "DB_PASSWORD", "DB_NAME"];

/// Optional composed connection string; takes precedence over the parts.
pub const URL_VAR: &str = "MYSQL_URL";

#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub name: String,
    /// Connection URL handed to the driver.
    pub url: String,
}

impl DbConfig {
    /// Read the configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` beforehand if `.env` files should be honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::MissingVar(key))
        };

        let host = get(REQUIRED_VARS[0])?;
        let user = get(REQUIRED_VARS[1])?;
        let password = get(REQUIRED_VARS[2])?;
        let name = get(REQUIRED_VARS[3])?;

        let url = match lookup(URL_VAR).filter(|v| !v.is_empty()) {
            Some(url) => url,
            None => format!(
                "mysql://{}:{}@{}/{}",
                urlencoding::encode(&user),
                urlencoding::encode(&password),
                host,
                name
            ),
        };

        Ok(Self { host, user, password, name, url })
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("url", &"<redacted>")
            .finish()
    }
}
