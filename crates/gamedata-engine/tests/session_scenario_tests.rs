//! End-to-end walk through a short session on a file-backed store

use gamedata_core::{CharacterListing, ExErrorKind};
use gamedata_engine::{
    create_character, create_room, find_character_by_name, list_characters, list_rooms,
    update_character_level,
};
use gamedata_store::db::open_store;
use tempfile::TempDir;

#[test]
fn test_tavern_session() {
    let temp_dir = TempDir::new().unwrap();
    let mut conn = open_store(temp_dir.path().join("store.db")).unwrap();

    assert!(list_rooms(&conn).unwrap().is_empty());
    assert!(list_characters(&conn).unwrap().is_empty());

    let tavern = create_room(&mut conn, "Tavern", "A cozy inn").unwrap();
    assert_eq!(tavern.id, 1);

    let bram = create_character(&mut conn, "Bram", "3", "1").unwrap();
    assert_eq!(bram.character.id, 1);
    assert_eq!(bram.room_name, "Tavern");

    let found = find_character_by_name(&conn, "bram").unwrap();
    assert_eq!(found.character.level, 3);
    assert_eq!(found.room_name, "Tavern");

    let updated = update_character_level(&mut conn, "Bram", "5").unwrap();
    assert_eq!(updated.level, 5);

    let err = create_character(&mut conn, "Nia", "2", "99").unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert_eq!(err.entity_id(), Some("Room 99"));

    match list_characters(&conn).unwrap() {
        CharacterListing::Characters(characters) => {
            assert_eq!(characters.len(), 1);
            assert_eq!(characters[0].level, 5);
        }
        CharacterListing::NoCharacters => panic!("expected Bram to be listed"),
    }

    let rooms = list_rooms(&conn).unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].characters[0].name, "Bram");
}
