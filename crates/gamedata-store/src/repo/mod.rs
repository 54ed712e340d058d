//! Repository layer for persisting rooms and characters to SQLite
//!
//! Every read and write is an explicit SQL statement; there is no change
//! tracking. Functions take `&Connection`, so a `Transaction` can be passed
//! wherever a caller needs several statements to commit together.

pub mod hydration;
pub mod sqlite_repo;

pub use sqlite_repo::SqliteRepo;
