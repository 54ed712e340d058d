pub mod character;
pub mod room;

pub use character::{Character, CharacterListing, CharacterWithRoom, CreatedCharacter, NewCharacter};
pub use room::{NewRoom, Room, RoomWithCharacters};
