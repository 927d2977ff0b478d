//! Database connection pooling and schema migrations.
//!
//! The store is a single SQLite file behind an r2d2 pool of Diesel
//! connections. Every connection is opened with WAL journaling and a busy
//! timeout so concurrent batch upserts from overlapping ingestion runs
//! serialize at the database instead of failing with `SQLITE_BUSY`.
//!
//! Migrations are embedded in the binary and run once at startup; a failure
//! here is fatal to the process.

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

use crate::error::StoreError;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Applies SQLite pragmas to every pooled connection.
#[derive(Debug)]
struct ConnectionOptions;

impl r2d2::CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(
            "PRAGMA busy_timeout = 5000; \
             PRAGMA journal_mode = WAL; \
             PRAGMA synchronous = NORMAL;",
        )
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Create the connection pool for the given SQLite database URL.
pub fn create_pool(database_url: &str) -> Result<DbPool, StoreError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
        .connection_customizer(Box::new(ConnectionOptions))
        .build(manager)?;
    Ok(pool)
}

/// Run all pending embedded migrations.
///
/// Called once at startup, before the server starts accepting requests.
pub fn run_migrations(conn: &mut SqliteConnection) -> Result<(), StoreError> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| StoreError::MigrationFailed(e.to_string()))?;
    info!(count = applied.len(), "Database migrations applied");
    Ok(())
}
