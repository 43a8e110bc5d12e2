//! Configuration types for dfc

use crate::DfcError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub trnascan: TrnaScanConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Directory tool outputs and logs are written under
    #[serde(default = "default_work_dir")]
    pub work_dir: String,
}

/// Options for the tRNAscan-SE adapter.
///
/// `model` selects the organism domain and is passed to the tool as-is
/// (`--bact`, `--arch`, `--organ`, `--general`, ...). `cmd_options` is a raw
/// string of extra flags forwarded verbatim, e.g. `"--nopseudo"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrnaScanConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub cmd_options: String,
}

fn default_work_dir() -> String { "OUT".to_string() }
fn default_model() -> String { "--bact".to_string() }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            work_dir: default_work_dir(),
        }
    }
}

impl Default for TrnaScanConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            cmd_options: String::new(),
        }
    }
}

impl TrnaScanConfig {
    /// Reject settings that cannot produce a usable command line.
    ///
    /// Flag legality is left to tRNAscan-SE itself.
    pub fn validate(&self) -> Result<(), DfcError> {
        if self.model.trim().is_empty() {
            return Err(DfcError::Configuration(
                "tRNAscan model flag must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Config {
    pub fn to_toml_string(&self) -> Result<String, DfcError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, DfcError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| DfcError::Configuration(format!("Failed to parse config: {}", e)))?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), DfcError> {
    std::fs::write(path, config.to_toml_string()?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.general.work_dir, "OUT");
        assert_eq!(config.trnascan.model, "--bact");
        assert_eq!(config.trnascan.cmd_options, "");
        assert_eq!(config, default_config());
    }

    #[test]
    fn test_load_valid_config() {
        let toml_content = r#"
[general]
work_dir = "/data/run1"

[trnascan]
model = "--arch"
cmd_options = "--nopseudo -D"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.general.work_dir, "/data/run1");
        assert_eq!(config.trnascan.model, "--arch");
        assert_eq!(config.trnascan.cmd_options, "--nopseudo -D");
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let toml_content = r#"
[trnascan]
cmd_options = "--nopseudo"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.trnascan.model, "--bact");
        assert_eq!(config.trnascan.cmd_options, "--nopseudo");
        assert_eq!(config.general.work_dir, "OUT");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let toml_content = r#"
[trnascan]
model = "--organ"
threshold = 20

[aragorn]
gc = 11
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.trnascan.model, "--organ");
    }

    #[test]
    fn test_load_invalid_config() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "this is not valid TOML {{").unwrap();

        match load_config(temp_file.path()).unwrap_err() {
            DfcError::Configuration(msg) => assert!(msg.contains("Failed to parse config")),
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_nonexistent_file() {
        match load_config("/nonexistent/path/to/config.toml").unwrap_err() {
            DfcError::Io(_) => {}
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_config_round_trip() {
        let mut config = Config::default();
        config.general.work_dir = "results".to_string();
        config.trnascan.model = "--general".to_string();
        config.trnascan.cmd_options = "--nopseudo".to_string();

        let temp_file = NamedTempFile::new().unwrap();
        save_config(temp_file.path(), &config).unwrap();
        let loaded = load_config(temp_file.path()).unwrap();

        assert_eq!(config, loaded);
    }

    #[test]
    fn test_to_toml_string_has_sections() {
        let text = Config::default().to_toml_string().unwrap();
        assert!(text.contains("[general]"));
        assert!(text.contains("[trnascan]"));
        assert!(text.contains("model = \"--bact\""));
    }

    #[test]
    fn test_validate_rejects_blank_model() {
        let config = TrnaScanConfig {
            model: "  ".to_string(),
            cmd_options: String::new(),
        };
        assert!(matches!(config.validate(), Err(DfcError::Configuration(_))));
        assert!(TrnaScanConfig::default().validate().is_ok());
    }
}
