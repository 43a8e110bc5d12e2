/// Traits for structural annotation tools
use crate::command::ToolCommand;
use crate::context::ToolContext;
use crate::version::{detect_version, VersionCheck};
use dfc_bio::FeatureMap;
use dfc_core::DfcResult;
use std::path::Path;
use tracing::info;

/// An external program that predicts features on a genome.
///
/// Implementors build the invocation for the program and turn its output
/// file into records grouped by sequence. Running the process is shared.
pub trait StructuralAnnotator {
    /// Name used in record identifiers and output file names
    fn name(&self) -> &'static str;

    /// Name of the program as cited in provenance strings
    fn display_name(&self) -> &'static str;

    /// Executable invoked by the command line
    fn program(&self) -> &str;

    /// Feature type every record is tagged with
    fn feature_type(&self) -> &'static str;

    /// How to ask the installed program for its version
    fn version_check(&self) -> VersionCheck;

    /// Build the command line for the given paths
    fn command(&self, ctx: &ToolContext) -> ToolCommand;

    /// Parse a finished output file.
    ///
    /// `version` is cited in each record's provenance.
    fn parse_output(&self, output: &Path, version: &str) -> DfcResult<FeatureMap>;

    /// Check if the program can be found on PATH
    fn is_available(&self) -> bool {
        which::which(self.program()).is_ok()
    }

    /// Query the installed program for its version
    fn detect_version(&self) -> DfcResult<String> {
        detect_version(&self.version_check())
    }

    /// Run the program to completion, then parse what it wrote
    fn run(&self, ctx: &ToolContext, version: &str) -> DfcResult<FeatureMap> {
        ctx.prepare()?;
        let command = self.command(ctx);
        info!("Running {}: {}", self.display_name(), command);
        command.run()?;
        self.parse_output(&ctx.output_file, version)
    }
}
