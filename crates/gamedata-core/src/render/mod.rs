pub mod console_render;

pub use console_render::{
    render_character_created, render_character_found, render_character_listing,
    render_level_updated, render_room_created, render_rooms,
};
