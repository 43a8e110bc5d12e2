pub mod config;
pub mod trnascan;

use anyhow::Context;
use dfc_core::{default_config_path, load_config, Config};
use std::path::Path;

/// Load the configuration from an explicit path, the default location, or
/// fall back to built-in defaults when neither exists
pub fn resolve_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
        return load_config(path)
            .with_context(|| format!("Failed to load config from {}", path.display()));
    }

    let default_path = default_config_path();
    if default_path.exists() {
        tracing::debug!("Using config {}", default_path.display());
        return load_config(&default_path)
            .with_context(|| format!("Failed to load config from {}", default_path.display()));
    }

    Ok(Config::default())
}
