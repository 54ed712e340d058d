//! Rooms command
//!
//! Usage: gamedata rooms list [--json]
//!        gamedata rooms add --name <NAME> --description <DESCRIPTION>

use clap::{Args, Subcommand};
use gamedata_core::render;
use rusqlite::Connection;

#[derive(Debug, Args)]
pub struct RoomsArgs {
    #[command(subcommand)]
    pub command: RoomsCommand,
}

#[derive(Debug, Subcommand)]
pub enum RoomsCommand {
    /// List rooms with the characters in each
    List(ListArgs),
    /// Add a room
    Add(AddRoomArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct AddRoomArgs {
    /// Room name
    #[arg(long)]
    pub name: String,

    /// Room description
    #[arg(long)]
    pub description: String,
}

/// Execute rooms command
pub fn execute(args: RoomsArgs, conn: &mut Connection) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        RoomsCommand::List(list_args) => {
            let rooms = gamedata_engine::list_rooms(conn)?;
            if list_args.json {
                println!("{}", super::to_json(&rooms)?);
            } else {
                print!("{}", render::render_rooms(&rooms));
            }
        }
        RoomsCommand::Add(add_args) => {
            let room = gamedata_engine::create_room(conn, &add_args.name, &add_args.description)?;
            print!("{}", render::render_room_created(&room));
        }
    }

    Ok(())
}
