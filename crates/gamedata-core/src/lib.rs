//! Game Data Core - domain kernel for the rooms and characters console
//!
//! This crate provides:
//! - Room and Character models plus the composed read models returned by
//!   the service layer
//! - Input validation rules (required text, integer parsing)
//! - The canonical error facility (`GameDataError` and `ExError`)
//! - The structured logging facility and its test capture mode
//! - Console rendering of rooms, characters and confirmations

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod render;
pub mod rules;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, GameDataError, Result};
pub use model::{
    Character, CharacterListing, CharacterWithRoom, CreatedCharacter, NewCharacter, NewRoom, Room,
    RoomWithCharacters,
};
