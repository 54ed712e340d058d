//! SQLite repository implementation
//!
//! Persists Rooms and Characters to the `rooms` and `characters` tables.
//! Listings follow rowid order, which is the store's native order.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use gamedata_core::errors::{ExError, ExErrorKind};
use gamedata_core::model::{Character, CharacterWithRoom, NewCharacter, NewRoom, Room};
use rusqlite::{Connection, OptionalExtension, Row};

/// SQLite repository for Rooms and Characters
pub struct SqliteRepo;

impl SqliteRepo {
    /// Insert a Room and return it with its generated id
    pub fn insert_room(conn: &Connection, room: NewRoom) -> Result<Room> {
        conn.execute(
            "INSERT INTO rooms (name, description) VALUES (?1, ?2)",
            rusqlite::params![room.name, room.description],
        )
        .map_err(from_rusqlite)?;

        Ok(room.into_room(conn.last_insert_rowid()))
    }

    /// Get a Room by ID
    pub fn get_room(conn: &Connection, room_id: i64) -> Result<Option<Room>> {
        conn.query_row(
            "SELECT id, name, description FROM rooms WHERE id = ?1",
            [room_id],
            room_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// List all Rooms
    pub fn list_rooms(conn: &Connection) -> Result<Vec<Room>> {
        let mut stmt = conn
            .prepare("SELECT id, name, description FROM rooms ORDER BY id")
            .map_err(from_rusqlite)?;

        let rooms = stmt
            .query_map([], room_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(rooms)
    }

    pub fn count_rooms(conn: &Connection) -> Result<i64> {
        conn.query_row("SELECT COUNT(*) FROM rooms", [], |row| row.get(0))
            .map_err(from_rusqlite)
    }

    /// Insert a Character and return it with its generated id
    ///
    /// The caller is responsible for checking that the room exists; the
    /// foreign key only backs that check up.
    pub fn insert_character(conn: &Connection, character: NewCharacter) -> Result<Character> {
        conn.execute(
            "INSERT INTO characters (name, level, room_id) VALUES (?1, ?2, ?3)",
            rusqlite::params![character.name, character.level, character.room_id],
        )
        .map_err(from_rusqlite)?;

        Ok(character.into_character(conn.last_insert_rowid()))
    }

    /// Get a Character by ID
    pub fn get_character(conn: &Connection, character_id: i64) -> Result<Option<Character>> {
        conn.query_row(
            "SELECT id, name, level, room_id FROM characters WHERE id = ?1",
            [character_id],
            character_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// List all Characters
    pub fn list_characters(conn: &Connection) -> Result<Vec<Character>> {
        let mut stmt = conn
            .prepare("SELECT id, name, level, room_id FROM characters ORDER BY id")
            .map_err(from_rusqlite)?;

        let characters = stmt
            .query_map([], character_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(characters)
    }

    pub fn count_characters(conn: &Connection) -> Result<i64> {
        conn.query_row("SELECT COUNT(*) FROM characters", [], |row| row.get(0))
            .map_err(from_rusqlite)
    }

    /// First Character whose name matches `name` ignoring case
    ///
    /// Case folding happens in Rust rather than SQL because SQLite's
    /// `lower()` only folds ASCII.
    pub fn find_character_by_name(conn: &Connection, name: &str) -> Result<Option<Character>> {
        let characters = Self::list_characters(conn)?;
        Ok(characters.into_iter().find(|c| c.name_matches(name)))
    }

    /// First Character whose name matches `name` ignoring case, joined with
    /// the name of its room
    pub fn find_character_with_room_by_name(
        conn: &Connection,
        name: &str,
    ) -> Result<Option<CharacterWithRoom>> {
        let mut stmt = conn
            .prepare(
                "SELECT c.id, c.name, c.level, c.room_id, r.name
                 FROM characters c
                 JOIN rooms r ON r.id = c.room_id
                 ORDER BY c.id",
            )
            .map_err(from_rusqlite)?;

        let mut rows = stmt.query([]).map_err(from_rusqlite)?;
        while let Some(row) = rows.next().map_err(from_rusqlite)? {
            let character = character_from_row(row).map_err(from_rusqlite)?;
            if character.name_matches(name) {
                let room_name: String = row.get(4).map_err(from_rusqlite)?;
                return Ok(Some(CharacterWithRoom {
                    character,
                    room_name,
                }));
            }
        }

        Ok(None)
    }

    /// Save a Character's level
    ///
    /// Only `level` is written; id, name and room stay as stored.
    ///
    /// # Errors
    /// * `NotFound` - If no row has the character's id
    pub fn save_character_level(conn: &Connection, character: &Character) -> Result<()> {
        let updated = conn
            .execute(
                "UPDATE characters SET level = ?1 WHERE id = ?2",
                rusqlite::params![character.level, character.id],
            )
            .map_err(from_rusqlite)?;

        if updated == 0 {
            return Err(ExError::new(ExErrorKind::NotFound)
                .with_op("save_character_level")
                .with_entity_id(character.id.to_string())
                .with_message(format!("Character {} no longer exists", character.id)));
        }

        Ok(())
    }
}

fn room_from_row(row: &Row<'_>) -> rusqlite::Result<Room> {
    Ok(Room {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
    })
}

fn character_from_row(row: &Row<'_>) -> rusqlite::Result<Character> {
    Ok(Character {
        id: row.get(0)?,
        name: row.get(1)?,
        level: row.get(2)?,
        room_id: row.get(3)?,
    })
}
