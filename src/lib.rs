//! rtimesheet library root.
//! Exposes the CLI parser, the high-level run() function and the timesheet
//! modules: notation parsing, row totals, sheet editing and export.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Parse { .. } => cli::commands::parse::handle(&cli.command),
        Commands::New { .. } => cli::commands::new::handle(&cli.command, cfg),
        Commands::Set { .. } => cli::commands::set::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::Period { .. } => cli::commands::period::handle(&cli.command, cfg),
        Commands::Totals { .. } => cli::commands::totals::handle(&cli.command, cfg),
        Commands::Import { .. } => cli::commands::import::handle(&cli.command, cfg),
        Commands::Dups { .. } => cli::commands::dups::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config ONCE
    let mut cfg = Config::load()?;

    // 3️⃣ command line override of the sheets directory
    if let Some(dir) = &cli.sheet_dir {
        cfg.sheets_dir = dir.clone();
    }

    // 4️⃣ diagnostics go to the log file; a broken log file is not fatal
    if let Err(e) = logging::init(&cfg, cli.verbose) {
        ui::messages::warning(format!("Logging disabled: {e}"));
    }

    // 5️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
