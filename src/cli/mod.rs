pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "dfc",
    version,
    about = "Structural genome annotation with external prediction tools",
    long_about = "dfc runs external feature predictors such as tRNAscan-SE on a genome \
                  and converts their output into annotation records grouped by sequence, \
                  exported as JSON or GFF3."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to $DFC_HOME/config.toml when present)
    #[arg(short, long, global = true, value_name = "PATH", env = "DFC_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Predict tRNAs with tRNAscan-SE
    Trnascan {
        #[command(subcommand)]
        command: commands::trnascan::TrnascanCommands,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommands,
    },
}

/// Export format for annotation records
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Json,
    Gff,
}
