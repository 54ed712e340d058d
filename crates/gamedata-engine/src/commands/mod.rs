//! Command handlers for the Game Data Service.
//!
//! ## Logging Ownership
//!
//! The engine layer owns lifecycle logging for every operation:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Lower layers (store, core) use only `tracing::debug!()` or `info!` for
//! internal details.

pub mod characters;
pub mod rooms;

/// Operation names used in log events
pub mod ops {
    pub const LIST_ROOMS: &str = "list_rooms";
    pub const CREATE_ROOM: &str = "create_room";
    pub const LIST_CHARACTERS: &str = "list_characters";
    pub const CREATE_CHARACTER: &str = "create_character";
    pub const FIND_CHARACTER_BY_NAME: &str = "find_character_by_name";
    pub const UPDATE_CHARACTER_LEVEL: &str = "update_character_level";
}
