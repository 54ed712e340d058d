// Integration tests for loading rooms with their characters

use gamedata_core::model::{NewCharacter, NewRoom};
use gamedata_store::repo::hydration::load_rooms_with_characters;
use gamedata_store::SqliteRepo;

#[test]
fn test_characters_grouped_under_their_rooms() {
    let conn = gamedata_store::db::open_store_in_memory().unwrap();
    let tavern = SqliteRepo::insert_room(&conn, NewRoom::new("Tavern", "A cozy inn")).unwrap();
    let cellar = SqliteRepo::insert_room(&conn, NewRoom::new("Cellar", "Damp")).unwrap();
    SqliteRepo::insert_character(&conn, NewCharacter::new("Bram", 3, tavern.id)).unwrap();
    SqliteRepo::insert_character(&conn, NewCharacter::new("Rat", 1, cellar.id)).unwrap();
    SqliteRepo::insert_character(&conn, NewCharacter::new("Nia", 2, tavern.id)).unwrap();

    let rooms = load_rooms_with_characters(&conn).unwrap();

    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms[0].room, tavern);
    let tavern_names: Vec<&str> = rooms[0]
        .characters
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(tavern_names, vec!["Bram", "Nia"]);
    assert_eq!(rooms[1].room, cellar);
    assert_eq!(rooms[1].characters.len(), 1);
}

#[test]
fn test_room_without_characters_has_empty_list() {
    let conn = gamedata_store::db::open_store_in_memory().unwrap();
    SqliteRepo::insert_room(&conn, NewRoom::new("Attic", "Dusty")).unwrap();

    let rooms = load_rooms_with_characters(&conn).unwrap();

    assert_eq!(rooms.len(), 1);
    assert!(rooms[0].characters.is_empty());
}

#[test]
fn test_empty_store_loads_nothing() {
    let conn = gamedata_store::db::open_store_in_memory().unwrap();
    assert!(load_rooms_with_characters(&conn).unwrap().is_empty());
}
