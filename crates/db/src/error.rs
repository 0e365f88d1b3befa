//! Typed error types for the db crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    /// The shared connection could not be established.
    #[error("failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Configuration could not be assembled from the environment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set in the environment or .env file")]
    MissingVar(&'static str),
}
