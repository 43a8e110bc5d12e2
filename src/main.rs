use clap::Parser;
use colored::*;
use dfc_core::DfcError;
use std::process;
use tracing_subscriber::EnvFilter;

mod cli;

use crate::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // -v flags win over DFC_LOG; RUST_LOG wins over both
    let log_level = match cli.verbose {
        0 => std::env::var("DFC_LOG").unwrap_or_else(|_| "warn".to_string()),
        1 => "info".to_string(),
        _ => "debug".to_string(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);

        // Use appropriate exit codes based on error type
        let exit_code = match e.downcast_ref::<DfcError>() {
            Some(DfcError::Configuration(_)) => 2,
            Some(DfcError::Io(_)) | Some(DfcError::NotFound(_)) => 3,
            Some(DfcError::Parse(_)) => 4,
            Some(DfcError::ToolExecution(_)) | Some(DfcError::Version(_)) => 5,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config.clone();
    match cli.command {
        Commands::Trnascan { command } => {
            crate::cli::commands::trnascan::run(command, config_path.as_deref())
        }
        Commands::Config { command } => {
            crate::cli::commands::config::run(command, config_path.as_deref())
        }
    }
}
