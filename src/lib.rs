//! stempeluhr library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::{Config, StorageBackend};
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::In { .. }
        | Commands::Out { .. }
        | Commands::BreakStart { .. }
        | Commands::BreakEnd { .. } => cli::commands::clock::handle(&cli.command, cfg),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, cfg),
        Commands::History { .. } => cli::commands::history::handle(&cli.command, cfg),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    if let Some(backend) = cli.storage {
        cfg.storage = backend;
    }

    // --db overrides the path of whichever backend is active.
    if let Some(custom_db) = &cli.db {
        match cfg.storage {
            StorageBackend::Sqlite => cfg.database = custom_db.clone(),
            StorageBackend::Csv => cfg.csv_file = custom_db.clone(),
        }
    }

    dispatch(&cli, &cfg)
}
