//! `portfolio-db` crate — persistence layer for portfolio projects.
//!
//! Provides a lazily connected shared handle, the project row and outcome
//! types, and the four repository operations over the `projects` table.
//! The table itself is expected to exist already.

pub mod config;
pub mod connection;
pub mod error;
pub mod models;
pub mod repository;

pub use config::DbConfig;
pub use connection::{Database, SharedConnection};
pub use error::{ConfigError, DbError};
pub use models::{DeleteOutcome, NewProject, Project, SaveOutcome, UpdateResult};
