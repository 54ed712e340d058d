//! Plain-text rendering for the console front end
//!
//! Every function returns a complete block of text ending in a newline so
//! callers can write it straight to stdout.

use crate::model::{
    Character, CharacterListing, CharacterWithRoom, CreatedCharacter, Room, RoomWithCharacters,
};

/// Render every room followed by its characters, indented by four spaces
///
/// An empty slice renders as an empty string.
pub fn render_rooms(rooms: &[RoomWithCharacters]) -> String {
    let mut output = String::new();

    for entry in rooms {
        let room = &entry.room;
        output.push_str(&format!(
            "Room ID: {}, Name: {} - {}\n",
            room.id, room.name, room.description
        ));

        for character in &entry.characters {
            output.push_str(&format!(
                "    Character: {}, Level: {}\n",
                character.name, character.level
            ));
        }
    }

    output
}

/// Render the character table, or the "no data" message
pub fn render_character_listing(listing: &CharacterListing) -> String {
    match listing {
        CharacterListing::NoCharacters => "No characters available.\n".to_string(),
        CharacterListing::Characters(characters) => {
            let mut output = String::from("\nCharacters:\n");
            for character in characters {
                output.push_str(&render_character_row(character));
            }
            output
        }
    }
}

fn render_character_row(character: &Character) -> String {
    format!(
        "Character ID: {}, Name: {}, Level: {}, Room ID: {}\n",
        character.id, character.name, character.level, character.room_id
    )
}

pub fn render_room_created(room: &Room) -> String {
    format!("Room '{}' added to the game.\n", room.name)
}

pub fn render_character_created(created: &CreatedCharacter) -> String {
    format!(
        "Character '{}' added to room '{}'.\n",
        created.character.name, created.room_name
    )
}

pub fn render_character_found(found: &CharacterWithRoom) -> String {
    let character = &found.character;
    format!(
        "Character found: ID: {}, Name: {}, Level: {}, Room: {}\n",
        character.id, character.name, character.level, found.room_name
    )
}

pub fn render_level_updated(character: &Character) -> String {
    format!(
        "Character '{}' level updated to {}.\n",
        character.name, character.level
    )
}
