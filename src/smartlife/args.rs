use clap::{Parser, Subcommand};
use smartlife::model::{EventKind, RecordId, Theme};
use std::path::PathBuf;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

#[derive(Parser, Debug)]
#[command(name = "smartlife", version = VERSION)]
#[command(about = "Events, tasks and notes, kept locally", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $SMARTLIFE_DATA, then the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Overview of events, tasks and notes
    #[command(alias = "ls")]
    List,

    /// Manage events and reminders
    #[command(alias = "e")]
    Event {
        #[command(subcommand)]
        action: EventAction,
    },

    /// Manage tasks
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },

    /// Manage notes
    #[command(alias = "n")]
    Note {
        #[command(subcommand)]
        action: NoteAction,
    },

    /// Show or change preferences
    Prefs {
        #[command(subcommand)]
        action: Option<PrefsAction>,
    },

    /// Seed empty collections with example records
    Init,

    /// Delete every event, task, note and the preferences
    Clear {
        /// Confirm the wipe
        #[arg(long)]
        yes: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., key-prefix)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum EventAction {
    /// List events
    #[command(alias = "ls")]
    List,

    /// Add an event
    Add {
        title: String,

        /// When it happens, e.g. "10h" or "2024-05-01 09:30"
        time: String,

        /// Category (reminder, course, or anything else)
        #[arg(short = 'k', long = "type", default_value = "reminder")]
        kind: EventKind,
    },

    /// Change an event
    Edit {
        id: RecordId,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        time: Option<String>,

        #[arg(short = 'k', long = "type")]
        kind: Option<EventKind>,
    },

    /// Delete an event
    #[command(alias = "rm")]
    Delete { id: RecordId },
}

#[derive(Subcommand, Debug)]
pub enum TaskAction {
    /// List tasks
    #[command(alias = "ls")]
    List {
        /// Only show tasks that are not done yet
        #[arg(long)]
        pending: bool,
    },

    /// Add a task
    Add { text: String },

    /// Change a task's text
    Edit { id: RecordId, text: String },

    /// Toggle a task between done and not done
    #[command(alias = "toggle")]
    Done { id: RecordId },

    /// Delete a task
    #[command(alias = "rm")]
    Delete { id: RecordId },
}

#[derive(Subcommand, Debug)]
pub enum NoteAction {
    /// List notes
    #[command(alias = "ls")]
    List,

    /// Print a note in full
    #[command(alias = "v")]
    Show { id: RecordId },

    /// Add a note
    Add {
        title: String,

        #[arg(default_value = "")]
        content: String,
    },

    /// Change a note
    Edit {
        id: RecordId,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        content: Option<String>,
    },

    /// Delete a note
    #[command(alias = "rm")]
    Delete { id: RecordId },
}

#[derive(Subcommand, Debug)]
pub enum PrefsAction {
    /// Print the current preferences
    Show,

    /// Change one or more preferences
    Set {
        #[arg(long)]
        user_name: Option<String>,

        #[arg(long)]
        theme: Option<Theme>,

        #[arg(long)]
        notifications: Option<bool>,
    },
}
