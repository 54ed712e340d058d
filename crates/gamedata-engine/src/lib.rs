//! Game Data Engine - the Game Data Service
//!
//! Six operations over rooms and characters. Each one receives the store
//! handle explicitly, validates raw console input through the core rules,
//! and reads or writes through `SqliteRepo`.

pub mod commands;

pub use commands::characters::{
    create_character, find_character_by_name, list_characters, update_character_level,
};
pub use commands::rooms::{create_room, list_rooms};
