//! rTimesheet library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    // Init and Config manage the setup itself; everything else reads records
    if !matches!(cli.command, Commands::Init | Commands::Config { .. }) {
        crate::core::auth::check_password(cfg, cli.password.as_deref())?;
    }

    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Periods => cli::commands::periods::handle(cli, cfg),
        Commands::Show { .. } => cli::commands::show::handle(cli, cfg),
        Commands::Set { .. } => cli::commands::set::handle(cli, cfg),
        Commands::Import { .. } => cli::commands::import::handle(cli, cfg),
        Commands::Pay { .. } => cli::commands::pay::handle(cli, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load the configuration once
    let mut cfg = Config::load()?;

    // 3️⃣ --db / --docs select the store for this run
    cfg.apply_overrides(cli.db.as_ref(), cli.docs.as_ref());

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
