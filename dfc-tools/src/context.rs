//! Paths a tool reads from and writes to during one pipeline run

use dfc_core::{tools_output_dir, DfcResult};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolContext {
    pub genome_fasta: PathBuf,
    pub output_file: PathBuf,
    pub log_file: PathBuf,
}

impl ToolContext {
    pub fn new(
        genome_fasta: impl Into<PathBuf>,
        output_file: impl Into<PathBuf>,
        log_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            genome_fasta: genome_fasta.into(),
            output_file: output_file.into(),
            log_file: log_file.into(),
        }
    }

    /// Place the output and log of `tool_name` under `<work_dir>/tools/`
    pub fn in_work_dir(work_dir: &Path, genome_fasta: &Path, tool_name: &str) -> Self {
        let tools_dir = tools_output_dir(work_dir);
        Self::new(
            genome_fasta,
            tools_dir.join(format!("{}.out", tool_name)),
            tools_dir.join(format!("{}.log", tool_name)),
        )
    }

    /// Create the directories the output and log will be written into
    pub fn prepare(&self) -> DfcResult<()> {
        for path in [&self.output_file, &self.log_file] {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
        }
        Ok(())
    }
}
