//! Integration tests for the character commands

use gamedata_core::{CharacterListing, ExErrorKind};
use gamedata_engine::{
    create_character, create_room, find_character_by_name, list_characters,
    update_character_level,
};
use gamedata_store::SqliteRepo;
use rusqlite::Connection;

fn setup() -> Connection {
    gamedata_store::db::open_store_in_memory().unwrap()
}

fn setup_with_tavern() -> Connection {
    let mut conn = setup();
    create_room(&mut conn, "Tavern", "A cozy inn").unwrap();
    conn
}

// ---------------------------------------------------------------------------
// list_characters
// ---------------------------------------------------------------------------

#[test]
fn test_list_characters_reports_no_characters() {
    let conn = setup();
    assert_eq!(
        list_characters(&conn).unwrap(),
        CharacterListing::NoCharacters
    );
}

#[test]
fn test_list_characters_in_creation_order() {
    let mut conn = setup_with_tavern();
    create_character(&mut conn, "Bram", "3", "1").unwrap();
    create_character(&mut conn, "Aria", "7", "1").unwrap();

    let listing = list_characters(&conn).unwrap();

    let names: Vec<&str> = listing.as_slice().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Bram", "Aria"]);
}

// ---------------------------------------------------------------------------
// create_character
// ---------------------------------------------------------------------------

#[test]
fn test_create_character_returns_room_name() {
    let mut conn = setup_with_tavern();

    let created = create_character(&mut conn, "Bram", "3", "1").unwrap();

    assert_eq!(created.character.id, 1);
    assert_eq!(created.character.name, "Bram");
    assert_eq!(created.character.level, 3);
    assert_eq!(created.character.room_id, 1);
    assert_eq!(created.room_name, "Tavern");
}

#[test]
fn test_create_character_accepts_negative_and_padded_numbers() {
    let mut conn = setup_with_tavern();

    let created = create_character(&mut conn, "Ghost", " -2 ", " 1").unwrap();

    assert_eq!(created.character.level, -2);
    assert_eq!(created.character.room_id, 1);
}

#[test]
fn test_create_character_unknown_room_writes_nothing() {
    let mut conn = setup_with_tavern();

    let err = create_character(&mut conn, "Nia", "2", "99").unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert_eq!(err.entity_id(), Some("Room 99"));
    assert_eq!(err.message(), "Room with ID 99 does not exist.");
    assert_eq!(err.op(), Some("create_character"));
    assert_eq!(SqliteRepo::count_characters(&conn).unwrap(), 0);
}

#[test]
fn test_create_character_rejects_blank_name() {
    let mut conn = setup_with_tavern();

    let err = create_character(&mut conn, " ", "2", "1").unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    assert_eq!(err.message(), "Character name cannot be empty.");
    assert_eq!(SqliteRepo::count_characters(&conn).unwrap(), 0);
}

#[test]
fn test_create_character_rejects_non_numeric_level() {
    let mut conn = setup_with_tavern();

    let err = create_character(&mut conn, "Bram", "three", "1").unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    assert_eq!(err.field(), Some("level"));
    assert_eq!(err.message(), "Invalid level. Please enter a valid number.");
    assert_eq!(SqliteRepo::count_characters(&conn).unwrap(), 0);
}

#[test]
fn test_create_character_rejects_non_numeric_room_id() {
    let mut conn = setup_with_tavern();

    let err = create_character(&mut conn, "Bram", "3", "one").unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    assert_eq!(err.message(), "Invalid room ID. Please enter a valid number.");
    assert_eq!(SqliteRepo::count_characters(&conn).unwrap(), 0);
}

#[test]
fn test_create_character_rejects_level_out_of_range() {
    let mut conn = setup_with_tavern();

    let err = create_character(&mut conn, "Bram", "99999999999", "1").unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    assert_eq!(SqliteRepo::count_characters(&conn).unwrap(), 0);
}

// ---------------------------------------------------------------------------
// find_character_by_name
// ---------------------------------------------------------------------------

#[test]
fn test_find_character_ignores_case() {
    let mut conn = setup_with_tavern();
    create_character(&mut conn, "Aria", "4", "1").unwrap();

    for search in ["aria", "ARIA", "Aria"] {
        let found = find_character_by_name(&conn, search).unwrap();
        assert_eq!(found.character.name, "Aria");
        assert_eq!(found.room_name, "Tavern");
    }
}

#[test]
fn test_find_character_returns_first_of_duplicates() {
    let mut conn = setup_with_tavern();
    create_room(&mut conn, "Cellar", "Damp").unwrap();
    create_character(&mut conn, "Bram", "3", "2").unwrap();
    create_character(&mut conn, "bram", "9", "1").unwrap();

    let found = find_character_by_name(&conn, "BRAM").unwrap();

    assert_eq!(found.character.id, 1);
    assert_eq!(found.room_name, "Cellar");
}

#[test]
fn test_find_character_missing() {
    let mut conn = setup_with_tavern();
    create_character(&mut conn, "Aria", "4", "1").unwrap();

    let err = find_character_by_name(&conn, "Ari").unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert_eq!(err.entity_id(), Some("Ari"));
    assert_eq!(err.message(), "Character with name 'Ari' not found.");
}

#[test]
fn test_find_character_blank_search_is_invalid_input() {
    let conn = setup_with_tavern();

    let err = find_character_by_name(&conn, "  ").unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    assert_eq!(err.op(), Some("find_character_by_name"));
}

// ---------------------------------------------------------------------------
// update_character_level
// ---------------------------------------------------------------------------

#[test]
fn test_update_level_changes_only_level() {
    let mut conn = setup_with_tavern();
    let created = create_character(&mut conn, "Bram", "3", "1").unwrap();

    let updated = update_character_level(&mut conn, "bram", "5").unwrap();

    assert_eq!(updated.level, 5);
    assert_eq!(updated.id, created.character.id);
    assert_eq!(updated.name, "Bram");
    assert_eq!(updated.room_id, 1);

    let stored = SqliteRepo::get_character(&conn, updated.id).unwrap().unwrap();
    assert_eq!(stored, updated);
}

#[test]
fn test_update_level_is_idempotent() {
    let mut conn = setup_with_tavern();
    create_character(&mut conn, "Bram", "3", "1").unwrap();

    let first = update_character_level(&mut conn, "Bram", "5").unwrap();
    let second = update_character_level(&mut conn, "Bram", "5").unwrap();

    assert_eq!(first, second);
    assert_eq!(SqliteRepo::count_characters(&conn).unwrap(), 1);
}

#[test]
fn test_update_level_unknown_name_reported_before_bad_level() {
    let mut conn = setup_with_tavern();

    let err = update_character_level(&mut conn, "Nobody", "abc").unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert_eq!(err.message(), "Character with name 'Nobody' not found.");
}

#[test]
fn test_update_level_rejects_non_numeric_level() {
    let mut conn = setup_with_tavern();
    create_character(&mut conn, "Bram", "3", "1").unwrap();

    let err = update_character_level(&mut conn, "Bram", "five").unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    let stored = find_character_by_name(&conn, "Bram").unwrap();
    assert_eq!(stored.character.level, 3);
}

#[test]
fn test_update_level_targets_first_match() {
    let mut conn = setup_with_tavern();
    create_character(&mut conn, "Bram", "3", "1").unwrap();
    create_character(&mut conn, "BRAM", "8", "1").unwrap();

    let updated = update_character_level(&mut conn, "bram", "10").unwrap();

    assert_eq!(updated.id, 1);
    let second = SqliteRepo::get_character(&conn, 2).unwrap().unwrap();
    assert_eq!(second.level, 8);
}
