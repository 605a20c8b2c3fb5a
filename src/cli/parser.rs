use crate::config::StorageBackend;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for stempeluhr
/// CLI punch clock: record clock-in/out and breaks, summarize weekly overtime
#[derive(Parser)]
#[command(
    name = "stempeluhr",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple CLI punch clock: record working time and breaks, calculate weekly overtime",
    long_about = None
)]
pub struct Cli {
    /// Override the storage path (useful for tests or a custom database)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the storage backend (sqlite or csv)
    #[arg(global = true, long = "storage", value_enum)]
    pub storage: Option<StorageBackend>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and database
    Init,

    /// Show the active configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Clock in
    In {
        /// Worker first name (falls back to the last recorded worker)
        first_name: Option<String>,

        /// Worker last name
        last_name: Option<String>,
    },

    /// Clock out
    Out {
        first_name: Option<String>,
        last_name: Option<String>,
    },

    /// Start a break
    BreakStart {
        first_name: Option<String>,
        last_name: Option<String>,
    },

    /// End the current break
    BreakEnd {
        first_name: Option<String>,
        last_name: Option<String>,
    },

    /// Show the current punch status
    Status {
        first_name: Option<String>,
        last_name: Option<String>,
    },

    /// Show recorded events, newest first
    History {
        first_name: Option<String>,
        last_name: Option<String>,

        #[arg(long = "all", help = "Show events of all workers")]
        all: bool,
    },

    /// Weekly work time and overtime for one month
    Report {
        /// Month to aggregate (YYYY-MM)
        month: String,

        first_name: Option<String>,
        last_name: Option<String>,

        #[arg(long = "pdf", value_name = "FILE", help = "Write the monthly report PDF")]
        pdf: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing PDF without asking")]
        force: bool,
    },

    /// Export raw events
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

    /// Print the internal operations log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
