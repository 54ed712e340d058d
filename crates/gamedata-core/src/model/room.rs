use serde::{Deserialize, Serialize};

use super::character::Character;

/// Room - a named location that owns zero or more Characters
///
/// Rooms are append-only: once stored, none of their fields change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Store-generated identifier
    pub id: i64,

    /// Display name
    pub name: String,

    /// Free-text description shown next to the name
    pub description: String,
}

/// A room that has been validated but not yet stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRoom {
    pub name: String,
    pub description: String,
}

impl NewRoom {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Attach the id handed out by the store
    pub fn into_room(self, id: i64) -> Room {
        Room {
            id,
            name: self.name,
            description: self.description,
        }
    }
}

/// A room together with the characters whose `room_id` points at it
///
/// Built by an explicit two-step fetch; there is no lazy navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomWithCharacters {
    #[serde(flatten)]
    pub room: Room,
    pub characters: Vec<Character>,
}

impl RoomWithCharacters {
    pub fn new(room: Room) -> Self {
        Self {
            room,
            characters: Vec::new(),
        }
    }
}
