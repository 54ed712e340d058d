//! Game data console
//!
//! Command-line interface for the rooms and characters store

use clap::{Parser, Subcommand, ValueEnum};
use gamedata_core::logging_facility::{init, Profile};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "gamedata")]
#[command(about = "Game data - rooms and characters", long_about = None)]
struct Cli {
    /// SQLite database path
    #[arg(long, global = true, default_value = ".gamedata/store.db")]
    db: PathBuf,

    /// Log output written to stderr
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Off)]
    log: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Off,
    Pretty,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Room operations
    Rooms(commands::rooms::RoomsArgs),
    /// Character operations
    Characters(commands::characters::CharactersArgs),
    /// Menu-driven prompt session on stdin/stdout
    Interactive,
}

fn main() {
    let cli = Cli::parse();

    match cli.log {
        LogFormat::Off => {}
        LogFormat::Pretty => init(Profile::Development),
        LogFormat::Json => init(Profile::Production),
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut conn = gamedata_store::db::open_store(&cli.db)?;

    match cli.command {
        Commands::Rooms(args) => commands::rooms::execute(args, &mut conn),
        Commands::Characters(args) => commands::characters::execute(args, &mut conn),
        Commands::Interactive => commands::interactive::execute(&mut conn),
    }
}
