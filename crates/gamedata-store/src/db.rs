//! Database connection management
//!
//! Provides utilities for opening and managing SQLite connections

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, io_error, Result};
use crate::migrations::apply_migrations;
use rusqlite::Connection;
use std::path::Path;

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Configure a connection with the settings the schema relies on
pub fn configure(conn: &Connection) -> Result<()> {
    // characters.room_id references rooms.id
    conn.pragma_update(None, "foreign_keys", 1)
        .map_err(from_rusqlite)?;

    // In-memory databases answer "memory" here, which is fine
    conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get::<_, String>(0))
        .map_err(from_rusqlite)?;

    Ok(())
}

/// Open the store at `path`, creating the parent directory if needed, then
/// configure the connection and apply pending migrations
///
/// This is the single entry point the console uses at process start.
pub fn open_store<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_error("create_store_dir", e))?;
    }

    let mut conn = open(path)?;
    configure(&conn)?;
    apply_migrations(&mut conn)?;

    tracing::debug!(path = %path.display(), "store opened");
    Ok(conn)
}

/// In-memory counterpart of [`open_store`]
pub fn open_store_in_memory() -> Result<Connection> {
    let mut conn = open_in_memory()?;
    configure(&conn)?;
    apply_migrations(&mut conn)?;
    Ok(conn)
}
