// src/cli/args.rs
use crate::constants::BASE_URL_ENV;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Base URL of the notes API (overrides the config file)
    #[arg(short = 'u', long, value_name = "URL", env = BASE_URL_ENV, global = true)]
    pub base_url: Option<String>,

    /// Path to a TOML config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List all notes
    List {
        /// Print the raw JSON response instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Search notes by title or content
    Search {
        /// Search term
        #[arg(value_name = "QUERY")]
        query: String,

        /// Print the raw JSON response instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Create a new note
    Create {
        #[arg(value_name = "TITLE")]
        title: String,

        #[arg(value_name = "CONTENT")]
        content: String,
    },

    /// Replace the title and content of an existing note
    Update {
        #[arg(value_name = "NOTE_ID")]
        id: String,

        #[arg(value_name = "TITLE")]
        title: String,

        #[arg(value_name = "CONTENT")]
        content: String,
    },

    /// Delete a note by ID
    Delete {
        #[arg(value_name = "NOTE_ID")]
        id: String,
    },

    /// Check whether the API is reachable
    Ping,
}
