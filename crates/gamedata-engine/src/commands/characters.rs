//! Character command handlers.
//!
//! Numeric answers arrive as raw text and are parsed here, so a bad level
//! or room id is an input error rather than a crash. Name lookups fold
//! case on both sides and take the first match in store order.

#![allow(clippy::result_large_err)]

use super::ops;
use gamedata_core::errors::GameDataError;
use gamedata_core::model::{
    Character, CharacterListing, CharacterWithRoom, CreatedCharacter, NewCharacter,
};
use gamedata_core::rules::validation::{
    parse_integer, require_text, FIELD_CHARACTER_NAME, FIELD_LEVEL, FIELD_ROOM_ID,
};
use gamedata_core::{log_op_end, log_op_error, log_op_start};
use gamedata_store::errors::{from_rusqlite, Result};
use gamedata_store::SqliteRepo;
use rusqlite::Connection;

/// List every character
///
/// ## Returns
///
/// `CharacterListing::NoCharacters` when the table is empty, otherwise all
/// characters in store order.
///
/// ## Errors
///
/// - `Persistence`: Database error
pub fn list_characters(conn: &Connection) -> Result<CharacterListing> {
    log_op_start!(ops::LIST_CHARACTERS);
    let start = std::time::Instant::now();

    let characters = SqliteRepo::list_characters(conn).map_err(|e| {
        log_op_error!(
            ops::LIST_CHARACTERS,
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e.with_op(ops::LIST_CHARACTERS)
    })?;

    log_op_end!(
        ops::LIST_CHARACTERS,
        duration_ms = start.elapsed().as_millis() as u64,
        character_count = characters.len() as u64
    );

    Ok(CharacterListing::from_vec(characters))
}

/// Create a character in an existing room
///
/// ## Arguments
///
/// - `name`: Character name, must not be blank
/// - `level`: Level as typed, parsed as an integer
/// - `room_id`: Room id as typed, parsed as an integer
///
/// ## Returns
///
/// The stored character plus the room's name for the confirmation message
///
/// ## Errors
///
/// - `InvalidInput`: Blank name, or level / room id not an integer
/// - `NotFound`: No room with that id (nothing is written)
/// - `Persistence`: Database error
pub fn create_character(
    conn: &mut Connection,
    name: &str,
    level: &str,
    room_id: &str,
) -> Result<CreatedCharacter> {
    log_op_start!(ops::CREATE_CHARACTER);
    let start = std::time::Instant::now();

    let created = create_character_impl(conn, name, level, room_id).map_err(|e| {
        log_op_error!(
            ops::CREATE_CHARACTER,
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e.with_op(ops::CREATE_CHARACTER)
    })?;

    log_op_end!(
        ops::CREATE_CHARACTER,
        duration_ms = start.elapsed().as_millis() as u64,
        character_id = created.character.id,
        room_id = created.character.room_id
    );

    Ok(created)
}

fn create_character_impl(
    conn: &mut Connection,
    name: &str,
    level: &str,
    room_id: &str,
) -> Result<CreatedCharacter> {
    let name = require_text(FIELD_CHARACTER_NAME, name)?;
    let level: i32 = parse_integer(FIELD_LEVEL, level)?;
    let room_id: i64 = parse_integer(FIELD_ROOM_ID, room_id)?;

    let tx = conn.transaction().map_err(from_rusqlite)?;

    let room = SqliteRepo::get_room(&tx, room_id)?
        .ok_or(GameDataError::RoomNotFound { room_id })?;

    let character = SqliteRepo::insert_character(&tx, NewCharacter::new(name, level, room.id))?;
    tx.commit().map_err(from_rusqlite)?;

    Ok(CreatedCharacter {
        character,
        room_name: room.name,
    })
}

/// Find a character by name, joined with its room's name
///
/// Matching ignores case but is otherwise exact. Names are not unique; the
/// first match in store order wins. Read-only.
///
/// ## Errors
///
/// - `InvalidInput`: Blank search name
/// - `NotFound`: No character has that name
/// - `Persistence`: Database error
pub fn find_character_by_name(conn: &Connection, name: &str) -> Result<CharacterWithRoom> {
    log_op_start!(ops::FIND_CHARACTER_BY_NAME, search = name);
    let start = std::time::Instant::now();

    let found = find_character_by_name_impl(conn, name).map_err(|e| {
        log_op_error!(
            ops::FIND_CHARACTER_BY_NAME,
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e.with_op(ops::FIND_CHARACTER_BY_NAME)
    })?;

    log_op_end!(
        ops::FIND_CHARACTER_BY_NAME,
        duration_ms = start.elapsed().as_millis() as u64,
        character_id = found.character.id
    );

    Ok(found)
}

fn find_character_by_name_impl(conn: &Connection, name: &str) -> Result<CharacterWithRoom> {
    let name = require_text(FIELD_CHARACTER_NAME, name)?;

    let found = SqliteRepo::find_character_with_room_by_name(conn, name)?.ok_or_else(|| {
        GameDataError::CharacterNotFound {
            name: name.to_string(),
        }
    })?;

    Ok(found)
}

/// Set a character's level
///
/// The character is looked up the same way as [`find_character_by_name`]
/// before the new level is parsed, so an unknown name is reported even
/// when the level is also bad. Load, change `level`, save, commit: no other
/// field is written. Repeating the call with the same level is a no-op.
///
/// ## Errors
///
/// - `InvalidInput`: Blank name, or new level not an integer
/// - `NotFound`: No character has that name
/// - `Persistence`: Database error
pub fn update_character_level(
    conn: &mut Connection,
    name: &str,
    new_level: &str,
) -> Result<Character> {
    log_op_start!(ops::UPDATE_CHARACTER_LEVEL, search = name);
    let start = std::time::Instant::now();

    let character = update_character_level_impl(conn, name, new_level).map_err(|e| {
        log_op_error!(
            ops::UPDATE_CHARACTER_LEVEL,
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e.with_op(ops::UPDATE_CHARACTER_LEVEL)
    })?;

    log_op_end!(
        ops::UPDATE_CHARACTER_LEVEL,
        duration_ms = start.elapsed().as_millis() as u64,
        character_id = character.id,
        level = character.level
    );

    Ok(character)
}

fn update_character_level_impl(
    conn: &mut Connection,
    name: &str,
    new_level: &str,
) -> Result<Character> {
    let name = require_text(FIELD_CHARACTER_NAME, name)?;

    let tx = conn.transaction().map_err(from_rusqlite)?;

    let mut character = SqliteRepo::find_character_by_name(&tx, name)?.ok_or_else(|| {
        GameDataError::CharacterNotFound {
            name: name.to_string(),
        }
    })?;

    character.level = parse_integer(FIELD_LEVEL, new_level)?;

    SqliteRepo::save_character_level(&tx, &character)?;
    tx.commit().map_err(from_rusqlite)?;

    tracing::debug!(character_id = character.id, level = character.level, "level saved");
    Ok(character)
}
