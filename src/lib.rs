//! sheetlens library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod errors;
pub mod llm;
pub mod models;
pub mod source;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::AppConfig;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &AppConfig) -> AppResult<()> {
    match &cli.command {
        Commands::Analyze { .. } => cli::commands::analyze::handle(cli, cfg),
        Commands::Test { .. } => cli::commands::test::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once, before any row is read; format errors stop
    // the run here
    let cfg = AppConfig::load()?;
    ui::messages::debug(
        cli.debug,
        format!("config loaded, llm enabled: {}", cfg.is_llm_enabled()),
    );

    dispatch(&cli, &cfg)
}
