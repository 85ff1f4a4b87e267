// src/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use url::Url;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Base URL of the note server (overrides the config file)
    #[arg(short, long, value_name = "URL", global = true)]
    pub server: Option<Url>,

    /// Path to the config file (optional)
    #[arg(long, value_name = "CONFIG", global = true)]
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
    /// Create a note
    Add {
        /// Title for the new note (must not be blank)
        #[arg(value_name = "TITLE")]
        title: String,

        /// Note body
        #[arg(short, long, value_name = "TEXT", default_value = "")]
        content: String,

        /// Image to attach (png, jpg, jpeg, gif, bmp, webp; up to 16 MiB)
        #[arg(short, long, value_name = "PATH")]
        image: Option<PathBuf>,
    },

    /// Update a note, prefilled from the server copy
    Edit {
        /// Note ID to edit
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,

        /// New title (keeps the current one when omitted)
        #[arg(short, long, value_name = "TITLE")]
        title: Option<String>,

        /// New body (keeps the current one when omitted)
        #[arg(short, long, value_name = "TEXT")]
        content: Option<String>,

        /// Replacement image
        #[arg(short, long, value_name = "PATH")]
        image: Option<PathBuf>,
    },

    /// View a note in the browser
    View {
        /// Note ID to view
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,

        /// Output note as JSON instead of opening in browser
        #[arg(long)]
        json: bool,
    },

    /// Delete a note from the server
    Delete {
        /// Note ID to delete
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Validate an image and preview it locally without uploading
    Preview {
        /// Path to the image file
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
}
