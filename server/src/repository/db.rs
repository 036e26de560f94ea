//! Database Connection and Setup
//!
//! Opens the SQLite file and runs migrations.

use rusqlite::Connection;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::DomainResult;

/// Path accepted for a throwaway in-memory database
pub const IN_MEMORY: &str = ":memory:";

/// Shared connection handle
pub type DbConn = Arc<Mutex<Connection>>;

/// Open (or create) the database at `db_path` and migrate it
pub fn init_db(db_path: &str) -> DomainResult<DbConn> {
    let conn = if db_path == IN_MEMORY {
        Connection::open_in_memory()?
    } else {
        Connection::open(db_path)?
    };
    run_migrations(&conn)?;
    Ok(Arc::new(Mutex::new(conn)))
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    // Items are stored inline as a JSON document per list
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS pack_lists (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            items TEXT NOT NULL DEFAULT '[]',
            created_at INTEGER NOT NULL,
            updated_at INTEGER NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_pack_lists_created ON pack_lists(created_at);",
    )?;
    Ok(())
}
