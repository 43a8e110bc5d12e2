use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// Cache the home path to avoid repeated environment lookups
static DFC_HOME: OnceLock<PathBuf> = OnceLock::new();

/// Get the dfc home directory
/// Checks DFC_HOME environment variable, falls back to ${HOME}/.dfc
pub fn dfc_home() -> PathBuf {
    DFC_HOME
        .get_or_init(|| {
            if let Ok(path) = std::env::var("DFC_HOME") {
                PathBuf::from(path)
            } else {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".dfc")
            }
        })
        .clone()
}

/// Default location of the configuration file
pub fn default_config_path() -> PathBuf {
    dfc_home().join("config.toml")
}

/// Directory under a work dir where tool outputs and logs are written
pub fn tools_output_dir(work_dir: &Path) -> PathBuf {
    work_dir.join("tools")
}
