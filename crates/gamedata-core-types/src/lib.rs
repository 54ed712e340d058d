//! Core types shared across the game data facilities
//!
//! Holds the canonical field keys and event names used by the logging
//! facility and by tests that assert on captured log events.

pub mod schema;
