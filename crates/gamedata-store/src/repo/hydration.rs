//! Hydration of rooms together with their characters
//!
//! Replaces an eager-loaded navigation property with a two-step fetch:
//! all rooms, then all characters, grouped by `room_id` in memory.

#![allow(clippy::result_large_err)]

use std::collections::HashMap;

use crate::errors::Result;
use crate::repo::SqliteRepo;
use gamedata_core::model::{Character, RoomWithCharacters};
use rusqlite::Connection;

/// Load every room with the characters that belong to it
///
/// Rooms keep store order; characters keep store order within each room.
/// Characters whose room is missing are not attached anywhere.
pub fn load_rooms_with_characters(conn: &Connection) -> Result<Vec<RoomWithCharacters>> {
    let rooms = SqliteRepo::list_rooms(conn)?;
    let characters = SqliteRepo::list_characters(conn)?;

    let mut by_room: HashMap<i64, Vec<Character>> = HashMap::new();
    for character in characters {
        by_room.entry(character.room_id).or_default().push(character);
    }

    let hydrated = rooms
        .into_iter()
        .map(|room| {
            let characters = by_room.remove(&room.id).unwrap_or_default();
            RoomWithCharacters { room, characters }
        })
        .collect();

    Ok(hydrated)
}
