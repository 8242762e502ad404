//! rfidconv library root.
//! Exposes the CLI parser, the high-level run() function and the conversion
//! pipeline (reader, writer, archiver, dwell calculator).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod observability;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Convert { .. } => cli::commands::convert::handle(&cli.command, cfg),
        Commands::Dwell => cli::commands::dwell::handle(cfg),
        Commands::Config { .. } => {
            cli::commands::config::handle(&cli.command, cfg, cli.config.as_deref())
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    observability::init_tracing();

    let cli = Cli::parse();

    // config is loaded once, then the global overrides apply on top;
    // `config --init` must still work over a broken file
    let mut cfg = match (&cli.command, Config::load(cli.config.as_deref())) {
        (_, Ok(cfg)) => cfg,
        (Commands::Config { init: true, .. }, Err(e)) => {
            tracing::warn!(error = %e, "ignoring unreadable configuration for --init");
            Config::default()
        }
        (_, Err(e)) => return Err(e),
    };
    if let Some(input) = &cli.input {
        cfg.input_file = input.clone();
    }
    if let Some(dir) = &cli.output_dir {
        cfg.output_dir = dir.clone();
    }

    dispatch(&cli, &cfg)
}
