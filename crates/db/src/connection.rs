//! Shared database connection, established on first use.

use std::sync::Arc;

use sqlx::{AnyConnection, Connection};
use tokio::sync::{Mutex, OnceCell};
use tracing::{error, info};

use crate::DbError;

/// Handle to the single connection shared by every repository call.
pub type SharedConnection = Arc<Mutex<AnyConnection>>;

/// Owns the lazily created connection for one store.
///
/// The first call to [`Database::acquire`] connects; every later call gets
/// the cached handle back without checking that the link is still alive.
/// Concurrent first calls are serialised so only one connection is ever made.
pub struct Database {
    url: String,
    conn: OnceCell<SharedConnection>,
}

impl Database {
    /// Create a handle for `database_url` without connecting yet.
    ///
    /// `mysql://` URLs are the production store; `sqlite:` URLs work too.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            url: database_url.into(),
            conn: OnceCell::new(),
        }
    }

    /// Return the shared connection, connecting if none exists yet.
    ///
    /// A failed attempt leaves the slot empty and returns `DbError::Connect`.
    pub async fn acquire(&self) -> Result<SharedConnection, DbError> {
        let conn = self
            .conn
            .get_or_try_init(|| async {
                sqlx::any::install_default_drivers();
                match AnyConnection::connect(&self.url).await {
                    Ok(conn) => {
                        info!("Connected to database ({})", conn.backend_name());
                        Ok(Arc::new(Mutex::new(conn)))
                    }
                    Err(e) => {
                        error!("Failed to connect to database: {e}");
                        Err(DbError::Connect(e))
                    }
                }
            })
            .await?;

        Ok(Arc::clone(conn))
    }

    /// Whether the connection has been established.
    pub fn is_connected(&self) -> bool {
        self.conn.initialized()
    }
}
