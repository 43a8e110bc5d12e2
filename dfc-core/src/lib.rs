//! Core utilities and types shared across all dfc crates

pub mod config;
pub mod error;
pub mod system;

pub use config::{default_config, load_config, save_config, Config, GeneralConfig, TrnaScanConfig};
pub use error::{DfcError, DfcResult};
pub use system::{default_config_path, dfc_home, tools_output_dir};
