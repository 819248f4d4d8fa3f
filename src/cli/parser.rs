use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimesheet
/// CLI application to record and review biweekly timesheets
#[derive(Parser)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "A biweekly timesheet CLI: enter hours by category per pay period and review them for payroll",
    long_about = None
)]
pub struct Cli {
    /// Select the user (defaults to `default_user` from the configuration)
    #[arg(global = true, long = "user", short = 'u')]
    pub user: Option<String>,

    /// Shared access password (or set RTIMESHEET_PASSWORD)
    #[arg(global = true, long = "password")]
    pub password: Option<String>,

    /// Use the SQLite store at this path (useful for tests or custom DB)
    #[arg(global = true, long = "db", conflicts_with = "docs")]
    pub db: Option<String>,

    /// Use the document store in this directory
    #[arg(global = true, long = "docs")]
    pub docs: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the record store
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// List selectable pay periods
    Periods,

    /// Show the grid and biweekly totals for a period
    Show {
        /// Any date inside the period (YYYY-MM-DD or MM/DD/YYYY); default: current period
        #[arg(long, short)]
        period: Option<String>,

        /// Also write the grid to a CSV file (edit it and load it back with `import`)
        #[arg(long = "csv", value_name = "FILE")]
        csv: Option<String>,
    },

    /// Set hours for one day and save
    Set {
        /// Day to edit (YYYY-MM-DD or MM/DD/YYYY)
        date: String,

        #[arg(long, help = "Regular hours")]
        regular: Option<f64>,

        #[arg(long, help = "Holiday hours")]
        holiday: Option<f64>,

        #[arg(long, help = "Sick hours")]
        sick: Option<f64>,

        #[arg(long, help = "Vacation hours")]
        vacation: Option<f64>,
    },

    /// Save a whole period from a grid CSV file
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Any date inside the period; default: current period
        #[arg(long, short)]
        period: Option<String>,
    },

    /// Enter a period for payment, or reset it (reviewer only)
    Pay {
        /// Any date inside the period; default: current period
        #[arg(long, short)]
        period: Option<String>,

        #[arg(long, help = "Clear the entered-for-payment mark instead")]
        reset: bool,
    },

    /// Export time records
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
