//! Room command handlers.

#![allow(clippy::result_large_err)]

use super::ops;
use gamedata_core::model::{NewRoom, Room, RoomWithCharacters};
use gamedata_core::rules::validation::{require_text, FIELD_ROOM_DESCRIPTION, FIELD_ROOM_NAME};
use gamedata_core::{log_op_end, log_op_error, log_op_start};
use gamedata_store::errors::{from_rusqlite, Result};
use gamedata_store::repo::hydration;
use gamedata_store::SqliteRepo;
use rusqlite::Connection;

/// List every room with its characters
///
/// Rooms come back in store order, each carrying the characters whose
/// `room_id` points at it. Read-only.
///
/// ## Errors
///
/// - `Persistence`: Database error
pub fn list_rooms(conn: &Connection) -> Result<Vec<RoomWithCharacters>> {
    log_op_start!(ops::LIST_ROOMS);
    let start = std::time::Instant::now();

    let rooms = hydration::load_rooms_with_characters(conn).map_err(|e| {
        log_op_error!(
            ops::LIST_ROOMS,
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e.with_op(ops::LIST_ROOMS)
    })?;

    log_op_end!(
        ops::LIST_ROOMS,
        duration_ms = start.elapsed().as_millis() as u64,
        room_count = rooms.len() as u64
    );

    Ok(rooms)
}

/// Create a room
///
/// Name and description must both contain something other than
/// whitespace; they are stored exactly as given. The insert is committed
/// before returning.
///
/// ## Errors
///
/// - `InvalidInput`: Name or description is empty (nothing is written)
/// - `Persistence`: Database error
pub fn create_room(conn: &mut Connection, name: &str, description: &str) -> Result<Room> {
    log_op_start!(ops::CREATE_ROOM);
    let start = std::time::Instant::now();

    let room = create_room_impl(conn, name, description).map_err(|e| {
        log_op_error!(
            ops::CREATE_ROOM,
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e.with_op(ops::CREATE_ROOM)
    })?;

    log_op_end!(
        ops::CREATE_ROOM,
        duration_ms = start.elapsed().as_millis() as u64,
        room_id = room.id
    );

    Ok(room)
}

fn create_room_impl(conn: &mut Connection, name: &str, description: &str) -> Result<Room> {
    let name = require_text(FIELD_ROOM_NAME, name)?;
    let description = require_text(FIELD_ROOM_DESCRIPTION, description)?;

    let tx = conn.transaction().map_err(from_rusqlite)?;
    let room = SqliteRepo::insert_room(&tx, NewRoom::new(name, description))?;
    tx.commit().map_err(from_rusqlite)?;

    Ok(room)
}
