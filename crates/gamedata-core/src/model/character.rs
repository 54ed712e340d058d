use serde::{Deserialize, Serialize};

/// Character - a named entity with a level, placed in exactly one Room
///
/// `level` is the only field that changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Store-generated identifier
    pub id: i64,

    /// Display name; lookups fold case and the name is not unique
    pub name: String,

    /// Unbounded integer level
    pub level: i32,

    /// Room the character was created in
    pub room_id: i64,
}

impl Character {
    /// Case-insensitive exact comparison against a search term
    ///
    /// Both sides are folded with Unicode lowercase before comparing.
    pub fn name_matches(&self, search: &str) -> bool {
        self.name.to_lowercase() == search.to_lowercase()
    }
}

/// A character that has been validated but not yet stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCharacter {
    pub name: String,
    pub level: i32,
    pub room_id: i64,
}

impl NewCharacter {
    pub fn new(name: impl Into<String>, level: i32, room_id: i64) -> Self {
        Self {
            name: name.into(),
            level,
            room_id,
        }
    }

    /// Attach the id handed out by the store
    pub fn into_character(self, id: i64) -> Character {
        Character {
            id,
            name: self.name,
            level: self.level,
            room_id: self.room_id,
        }
    }
}

/// A character joined with the name of its room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterWithRoom {
    #[serde(flatten)]
    pub character: Character,
    pub room_name: String,
}

/// Result of creating a character: the stored record plus the room name
/// used in the confirmation message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedCharacter {
    #[serde(flatten)]
    pub character: Character,
    pub room_name: String,
}

/// Outcome of listing characters
///
/// An empty table is reported as `NoCharacters` rather than as an empty
/// list so the front end can show a message instead of a blank listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharacterListing {
    Characters(Vec<Character>),
    NoCharacters,
}

impl CharacterListing {
    pub fn from_vec(characters: Vec<Character>) -> Self {
        if characters.is_empty() {
            CharacterListing::NoCharacters
        } else {
            CharacterListing::Characters(characters)
        }
    }

    /// Borrow the listed characters; empty for `NoCharacters`
    pub fn as_slice(&self) -> &[Character] {
        match self {
            CharacterListing::Characters(characters) => characters,
            CharacterListing::NoCharacters => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CharacterListing::NoCharacters)
    }
}
