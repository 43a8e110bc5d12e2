use crate::cli::output::*;
use anyhow::Context;
use clap::{Args, Subcommand};
use dfc_core::{default_config_path, save_config, Config};
use std::fs;
use std::path::Path;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write a configuration file with default values
    Init(InitArgs),

    /// Print the configuration in effect
    Show,
}

#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

pub fn run(command: ConfigCommands, config_path: Option<&Path>) -> anyhow::Result<()> {
    match command {
        ConfigCommands::Init(args) => {
            let path = config_path
                .map(Path::to_path_buf)
                .unwrap_or_else(default_config_path);

            if path.exists() && !args.force {
                warning(&format!(
                    "{} already exists, use --force to overwrite",
                    path.display()
                ));
                return Ok(());
            }

            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("Failed to create {}", parent.display()))?;
                }
            }
            save_config(&path, &Config::default())?;
            success(&format!("Wrote default configuration to {}", path.display()));
            Ok(())
        }
        ConfigCommands::Show => {
            let config = super::resolve_config(config_path)?;
            print!("{}", config.to_toml_string()?);
            Ok(())
        }
    }
}
