use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rAttendance
/// CLI application to keep a daily present/absent register with SQLite
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance register: mark employees present or absent each day and see the totals",
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
        /// Print the current configuration
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL)
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Add an employee to the roster
    Add {
        /// Employee name (must be unique)
        name: String,

        /// Photo reference (URL or path); the configured placeholder is used when omitted
        #[arg(long = "photo")]
        photo: Option<String>,
    },

    /// Mark an employee present or absent for today
    Mark {
        /// Employee position (as shown by `list`) or exact name
        employee: String,

        /// present | absent (p | a)
        status: String,

        /// Day key to record instead of today's (same format as `date_format`)
        #[arg(long = "date")]
        date: Option<String>,
    },

    /// List employees with their present/absent counts
    List,

    /// Show one employee: photo, counts and full attendance history
    Show {
        /// Employee position (as shown by `list`) or exact name
        employee: String,
    },

    /// Show roster-wide present/absent totals
    Summary {
        /// Also print every mark ("<name> was <status> on <date>")
        #[arg(long = "log")]
        log: bool,
    },

    /// Inspect or repair the stored roster
    Db {
        #[arg(long = "info", help = "Show database and roster information")]
        info: bool,

        #[arg(long = "check", help = "Check the stored roster for duplicate names or days")]
        check: bool,

        #[arg(long = "repair", help = "Drop duplicate employees/marks and save the roster")]
        repair: bool,
    },

    /// Print the internal log table
    Log {
        /// Print rows from the internal `log` table
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        /// Overwrite an existing backup without asking
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export attendance data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Absolute path of the output file
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite an existing file without asking
        #[arg(long, short = 'f')]
        force: bool,
    },
}
