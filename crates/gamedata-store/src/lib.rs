//! Game Data Store - SQLite persistence for rooms and characters
//!
//! Provides:
//! - Connection management (open, configure, open-and-migrate)
//! - Embedded SQL migrations with checksums and idempotent application
//! - `SqliteRepo`, the explicit data-access layer (no change tracking)
//! - Hydration of rooms together with their characters

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use errors::Result;
pub use repo::SqliteRepo;
