//! Command lines for external tools and their execution through the shell

use dfc_core::{DfcError, DfcResult};
use std::fmt;
use std::process::Command;
use tracing::{debug, warn};

/// An external program invocation as an ordered list of tokens.
///
/// Tokens may contain spaces and shell syntax such as `2>`; the command is
/// handed to `sh -c` as one string, so the shell does the final splitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    tokens: Vec<String>,
}

impl ToolCommand {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn program(&self) -> Option<&str> {
        self.tokens.first().map(String::as_str)
    }

    pub fn to_shell_string(&self) -> String {
        self.tokens.join(" ")
    }

    /// Run the command and wait for it to exit
    pub fn run(&self) -> DfcResult<()> {
        let script = self.to_shell_string();
        let output = Command::new("sh")
            .arg("-c")
            .arg(&script)
            .output()
            .map_err(|e| DfcError::ToolExecution(format!("failed to start `{}`: {}", script, e)))?;

        if !output.stdout.is_empty() {
            debug!("stdout: {}", String::from_utf8_lossy(&output.stdout).trim_end());
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if !stderr.trim().is_empty() {
                warn!("stderr: {}", stderr.trim_end());
            }
            return Err(DfcError::ToolExecution(format!(
                "`{}` exited with {}",
                script, output.status
            )));
        }

        Ok(())
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_shell_string())
    }
}
