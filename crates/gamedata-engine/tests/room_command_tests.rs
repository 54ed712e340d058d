//! Integration tests for the room commands
//!
//! Every test runs against a fresh in-memory store with migrations applied.

use gamedata_core::ExErrorKind;
use gamedata_engine::{create_character, create_room, list_rooms};
use gamedata_store::SqliteRepo;
use rusqlite::Connection;

fn setup() -> Connection {
    gamedata_store::db::open_store_in_memory().unwrap()
}

#[test]
fn test_list_rooms_on_empty_store() {
    let conn = setup();
    assert!(list_rooms(&conn).unwrap().is_empty());
}

#[test]
fn test_create_room_returns_stored_room() {
    let mut conn = setup();

    let room = create_room(&mut conn, "Tavern", "A cozy inn").unwrap();

    assert_eq!(room.id, 1);
    assert_eq!(room.name, "Tavern");
    assert_eq!(room.description, "A cozy inn");
    assert_eq!(SqliteRepo::get_room(&conn, 1).unwrap(), Some(room));
}

#[test]
fn test_create_room_keeps_text_exactly() {
    let mut conn = setup();

    let room = create_room(&mut conn, "  Great Hall ", "Echoing, vast").unwrap();

    assert_eq!(room.name, "  Great Hall ");
    assert_eq!(room.description, "Echoing, vast");
}

#[test]
fn test_create_room_rejects_blank_name() {
    let mut conn = setup();

    let err = create_room(&mut conn, "   ", "A cozy inn").unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    assert_eq!(err.field(), Some("Room name"));
    assert_eq!(err.message(), "Room name cannot be empty.");
    assert_eq!(err.op(), Some("create_room"));
    assert_eq!(SqliteRepo::count_rooms(&conn).unwrap(), 0);
}

#[test]
fn test_create_room_rejects_blank_description() {
    let mut conn = setup();

    let err = create_room(&mut conn, "Tavern", "").unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    assert_eq!(err.message(), "Room description cannot be empty.");
    assert_eq!(SqliteRepo::count_rooms(&conn).unwrap(), 0);
}

#[test]
fn test_list_rooms_groups_characters_under_their_room() {
    let mut conn = setup();
    create_room(&mut conn, "Tavern", "A cozy inn").unwrap();
    create_room(&mut conn, "Cellar", "Damp and dark").unwrap();
    create_character(&mut conn, "Bram", "3", "1").unwrap();
    create_character(&mut conn, "Rat", "1", "2").unwrap();
    create_character(&mut conn, "Aria", "7", "1").unwrap();

    let rooms = list_rooms(&conn).unwrap();

    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms[0].room.name, "Tavern");
    let tavern: Vec<&str> = rooms[0]
        .characters
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(tavern, vec!["Bram", "Aria"]);
    assert_eq!(rooms[1].room.name, "Cellar");
    assert_eq!(rooms[1].characters.len(), 1);
}

#[test]
fn test_list_rooms_includes_empty_rooms() {
    let mut conn = setup();
    create_room(&mut conn, "Attic", "Dusty").unwrap();

    let rooms = list_rooms(&conn).unwrap();

    assert_eq!(rooms.len(), 1);
    assert!(rooms[0].characters.is_empty());
}

#[test]
fn test_created_room_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.db");

    {
        let mut conn = gamedata_store::db::open_store(&path).unwrap();
        create_room(&mut conn, "Tavern", "A cozy inn").unwrap();
    }

    let conn = gamedata_store::db::open_store(&path).unwrap();
    let rooms = list_rooms(&conn).unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].room.name, "Tavern");
}
