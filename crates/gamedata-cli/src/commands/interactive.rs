//! Interactive session
//!
//! Usage: gamedata interactive
//!
//! A numbered menu over the six operations. Every answer is checked as soon
//! as it is typed, so a bad answer ends that operation before the next
//! prompt. Input and lookup problems are printed and the menu comes back;
//! store failures end the session. End of input ends it cleanly.

#![allow(clippy::result_large_err)]

use gamedata_core::render;
use gamedata_core::rules::validation::{
    parse_integer, require_text, FIELD_CHARACTER_NAME, FIELD_LEVEL, FIELD_ROOM_DESCRIPTION,
    FIELD_ROOM_ID, FIELD_ROOM_NAME,
};
use gamedata_store::errors::{io_error, Result};
use rusqlite::Connection;
use std::io::{BufRead, Write};

const MENU: &str = "\
Choose an option:
1. Display rooms
2. Display characters
3. Add room
4. Add character
5. Find character
6. Update character level
0. Exit
> ";

/// Execute interactive command on the process's stdin/stdout
pub fn execute(conn: &mut Connection) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(conn, stdin.lock(), stdout.lock());
    console.run()?;
    Ok(())
}

/// What the loop does after an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Exit,
}

/// Prompt/response driver over any reader and writer
pub struct Console<'c, R, W> {
    conn: &'c mut Connection,
    input: R,
    output: W,
}

impl<'c, R: BufRead, W: Write> Console<'c, R, W> {
    pub fn new(conn: &'c mut Connection, input: R, output: W) -> Self {
        Self {
            conn,
            input,
            output,
        }
    }

    /// Run the menu until the user exits or input runs out
    ///
    /// ## Errors
    ///
    /// Returns the first non-recoverable error (store or console I/O).
    pub fn run(&mut self) -> Result<()> {
        loop {
            let Some(choice) = self.ask(MENU)? else {
                return Ok(());
            };

            let outcome = match choice.trim() {
                "1" => self.display_rooms(),
                "2" => self.display_characters(),
                "3" => self.add_room(),
                "4" => self.add_character(),
                "5" => self.find_character(),
                "6" => self.update_character_level(),
                "0" => Ok(Step::Exit),
                _ => self.say("Invalid option. Please try again.\n"),
            };

            match outcome {
                Ok(Step::Continue) => {}
                Ok(Step::Exit) => return Ok(()),
                Err(err) if err.is_recoverable() => {
                    self.say(&format!("{}\n", err.message()))?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn display_rooms(&mut self) -> Result<Step> {
        let rooms = gamedata_engine::list_rooms(self.conn)?;
        self.say(&render::render_rooms(&rooms))
    }

    fn display_characters(&mut self) -> Result<Step> {
        let listing = gamedata_engine::list_characters(self.conn)?;
        self.say(&render::render_character_listing(&listing))
    }

    fn add_room(&mut self) -> Result<Step> {
        let Some(name) = self.ask("Enter room name: ")? else {
            return Ok(Step::Exit);
        };
        require_text(FIELD_ROOM_NAME, &name)?;

        let Some(description) = self.ask("Enter room description: ")? else {
            return Ok(Step::Exit);
        };
        require_text(FIELD_ROOM_DESCRIPTION, &description)?;

        let room = gamedata_engine::create_room(self.conn, &name, &description)?;
        self.say(&render::render_room_created(&room))
    }

    fn add_character(&mut self) -> Result<Step> {
        let Some(name) = self.ask("Enter character name: ")? else {
            return Ok(Step::Exit);
        };
        require_text(FIELD_CHARACTER_NAME, &name)?;

        let Some(level) = self.ask("Enter character level: ")? else {
            return Ok(Step::Exit);
        };
        parse_integer::<i32>(FIELD_LEVEL, &level)?;

        let Some(room_id) = self.ask("Enter room ID for the character: ")? else {
            return Ok(Step::Exit);
        };
        parse_integer::<i64>(FIELD_ROOM_ID, &room_id)?;

        let created = gamedata_engine::create_character(self.conn, &name, &level, &room_id)?;
        self.say(&render::render_character_created(&created))
    }

    fn find_character(&mut self) -> Result<Step> {
        let Some(name) = self.ask("Enter character name to search: ")? else {
            return Ok(Step::Exit);
        };

        let found = gamedata_engine::find_character_by_name(self.conn, &name)?;
        self.say(&render::render_character_found(&found))
    }

    fn update_character_level(&mut self) -> Result<Step> {
        let Some(name) = self.ask("Enter character name to update: ")? else {
            return Ok(Step::Exit);
        };

        let current = gamedata_engine::find_character_by_name(self.conn, &name)?;
        let prompt = format!("Current Level: {}. Enter new level: ", current.character.level);
        let Some(level) = self.ask(&prompt)? else {
            return Ok(Step::Exit);
        };

        let character = gamedata_engine::update_character_level(self.conn, &name, &level)?;
        self.say(&render::render_level_updated(&character))
    }

    /// Print a prompt and read one line; `None` at end of input
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        self.say(prompt)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| io_error("console_read", e))?;
        if read == 0 {
            return Ok(None);
        }

        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(Some(answer.to_string()))
    }

    fn say(&mut self, text: &str) -> Result<Step> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|_| self.output.flush())
            .map_err(|e| io_error("console_write", e))?;
        Ok(Step::Continue)
    }
}
