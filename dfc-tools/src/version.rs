//! Version detection for installed tools

use dfc_core::{DfcError, DfcResult};
use regex::Regex;
use std::process::Command;
use tracing::debug;

/// Shell command that prints a tool's version, and the pattern whose first
/// capture group holds it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionCheck {
    pub command: String,
    pub pattern: String,
}

impl VersionCheck {
    pub fn new(command: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            pattern: pattern.into(),
        }
    }
}

/// Run the check and pull the version out of its output.
///
/// Help screens often exit non-zero, so only a failure to start counts.
pub fn detect_version(check: &VersionCheck) -> DfcResult<String> {
    let output = Command::new("sh")
        .arg("-c")
        .arg(&check.command)
        .output()
        .map_err(|e| {
            DfcError::ToolExecution(format!("failed to start `{}`: {}", check.command, e))
        })?;

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));

    let version = extract_version(&check.pattern, &text)?;
    debug!("`{}` reports version {}", check.command, version);
    Ok(version)
}

/// First capture group of `pattern` in `text`
pub fn extract_version(pattern: &str, text: &str) -> DfcResult<String> {
    let re = Regex::new(pattern)
        .map_err(|e| DfcError::Version(format!("invalid version pattern {}: {}", pattern, e)))?;

    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .ok_or_else(|| DfcError::Version(format!("no match for {} in tool output", pattern)))
}
