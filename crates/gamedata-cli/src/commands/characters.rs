//! Characters command
//!
//! Usage: gamedata characters list [--json]
//!        gamedata characters add --name <NAME> --level <LEVEL> --room-id <ROOM_ID>
//!        gamedata characters find <NAME>
//!        gamedata characters set-level <NAME> <LEVEL>
//!
//! Level and room id are taken as text and validated by the engine, so a
//! bad number gets the same message here as in the interactive session.

use clap::{Args, Subcommand};
use gamedata_core::render;
use rusqlite::Connection;

#[derive(Debug, Args)]
pub struct CharactersArgs {
    #[command(subcommand)]
    pub command: CharactersCommand,
}

#[derive(Debug, Subcommand)]
pub enum CharactersCommand {
    /// List all characters
    List(super::rooms::ListArgs),
    /// Add a character to an existing room
    Add(AddCharacterArgs),
    /// Find a character by name (case-insensitive)
    Find(FindArgs),
    /// Set a character's level
    SetLevel(SetLevelArgs),
}

#[derive(Debug, Args)]
pub struct AddCharacterArgs {
    /// Character name
    #[arg(long)]
    pub name: String,

    /// Starting level
    #[arg(long, allow_hyphen_values = true)]
    pub level: String,

    /// Room the character is placed in
    #[arg(long)]
    pub room_id: String,
}

#[derive(Debug, Args)]
pub struct FindArgs {
    /// Name to search for
    pub name: String,
}

#[derive(Debug, Args)]
pub struct SetLevelArgs {
    /// Name of the character to update
    pub name: String,

    /// New level
    #[arg(allow_hyphen_values = true)]
    pub level: String,
}

/// Execute characters command
pub fn execute(
    args: CharactersArgs,
    conn: &mut Connection,
) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        CharactersCommand::List(list_args) => {
            let listing = gamedata_engine::list_characters(conn)?;
            if list_args.json {
                println!("{}", super::to_json(listing.as_slice())?);
            } else {
                print!("{}", render::render_character_listing(&listing));
            }
        }
        CharactersCommand::Add(add_args) => {
            let created = gamedata_engine::create_character(
                conn,
                &add_args.name,
                &add_args.level,
                &add_args.room_id,
            )?;
            print!("{}", render::render_character_created(&created));
        }
        CharactersCommand::Find(find_args) => {
            let found = gamedata_engine::find_character_by_name(conn, &find_args.name)?;
            print!("{}", render::render_character_found(&found));
        }
        CharactersCommand::SetLevel(set_args) => {
            let character =
                gamedata_engine::update_character_level(conn, &set_args.name, &set_args.level)?;
            print!("{}", render::render_level_updated(&character));
        }
    }

    Ok(())
}
