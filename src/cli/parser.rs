use clap::{Parser, Subcommand};

/// Command-line interface definition for rWorklog
/// CLI application to record and browse work-log entries with SQLite
#[derive(Parser)]
#[command(
    name = "rworklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple work log CLI: record work entries and browse, search, edit or delete them using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Run the full interactive session (main menu)
    Menu,

    /// Add a new work entry interactively
    Add,

    /// Search entries and browse the results interactively
    Search,

    /// List entries without entering the interactive browser
    List {
        #[arg(long, help = "Filter by employee name (substring, as stored)")]
        name: Option<String>,

        #[arg(long, help = "Filter by exact date (MM/DD/YYYY)")]
        date: Option<String>,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
