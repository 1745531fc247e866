//! Postgres-backed implementations of the rate and directory stores.
//! Each mutating call is a single statement, so every apply is atomic on its own.

pub mod directory;
pub mod init;
pub mod models;
pub mod rate;

use crate::exchange::StoreError;
use sqlx::{Pool, Postgres};

/// A type alias for the database connection pool (`Pool<Postgres>`).
pub type DbPool = Pool<Postgres>;

/// Rate and directory store over one connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Database(Box::new(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn driver_errors_keep_their_source() {
        let e: StoreError = sqlx::Error::RowNotFound.into();
        assert!(matches!(e, StoreError::Database(_)));
        assert!(e.to_string().starts_with("database error:"));
        assert!(e.source().is_some());
    }
}
