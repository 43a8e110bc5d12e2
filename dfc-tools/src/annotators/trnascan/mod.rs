//! tRNAscan-SE adapter
//!
//! Builds the tRNAscan-SE command line from a [`TrnaScanConfig`] and turns
//! its brief tabular output into `tRNA` features, e.g.
//!
//! ```text
//! tRNAscan-SE --bact --nopseudo --brief --forceow --output OUT/tools/tRNAscan.out genome.fna 2> OUT/tools/tRNAscan.log
//! ```

mod parser;

pub use parser::{parse_line, read_hits, TrnaHit, TrnaHitReader, FIELD_COUNT};

use crate::command::ToolCommand;
use crate::context::ToolContext;
use crate::traits::StructuralAnnotator;
use crate::version::VersionCheck;
use dfc_bio::{insert_feature, Feature, FeatureMap};
use dfc_core::{DfcResult, TrnaScanConfig};
use indexmap::IndexMap;
use std::path::Path;
use tracing::debug;

/// Flags always passed: headerless output, overwrite without prompting
const FIXED_FLAGS: &str = "--brief --forceow";

pub struct TrnaScan {
    config: TrnaScanConfig,
    program: String,
}

impl TrnaScan {
    pub const NAME: &'static str = "tRNAscan";
    pub const DISPLAY_NAME: &'static str = "tRNAscan-SE";
    pub const BINARY: &'static str = "tRNAscan-SE";
    pub const FEATURE_TYPE: &'static str = "tRNA";
    pub const VERSION_PATTERN: &'static str = r"tRNAscan-SE (.+) \(";

    /// Create the adapter, rejecting a blank model flag
    pub fn new(config: TrnaScanConfig) -> DfcResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            program: Self::BINARY.to_string(),
        })
    }

    /// Use a specific executable instead of `tRNAscan-SE` from PATH
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn config(&self) -> &TrnaScanConfig {
        &self.config
    }

    fn build_feature(&self, hit: TrnaHit, index: usize, version: &str) -> Feature {
        let location = hit.location();
        let mut annotations = IndexMap::new();
        annotations.insert("anticodon".to_string(), hit.anticodon);

        let mut feature = Feature::new(
            location,
            Self::FEATURE_TYPE,
            format!("{}_{}", Self::NAME, index),
            hit.sequence,
            annotations,
        );
        feature.add_qualifier("product", format!("tRNA-{}", hit.amino_acid));
        feature.add_qualifier(
            "inference",
            format!(
                "COORDINATES:ab initio prediction:{}:{}",
                Self::DISPLAY_NAME,
                version
            ),
        );
        feature
    }
}

impl StructuralAnnotator for TrnaScan {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn display_name(&self) -> &'static str {
        Self::DISPLAY_NAME
    }

    fn program(&self) -> &str {
        &self.program
    }

    fn feature_type(&self) -> &'static str {
        Self::FEATURE_TYPE
    }

    fn version_check(&self) -> VersionCheck {
        VersionCheck::new(format!("{} -h 2>&1", self.program), Self::VERSION_PATTERN)
    }

    fn command(&self, ctx: &ToolContext) -> ToolCommand {
        ToolCommand::new([
            self.program.clone(),
            self.config.model.clone(),
            self.config.cmd_options.clone(),
            FIXED_FLAGS.to_string(),
            "--output".to_string(),
            ctx.output_file.to_string_lossy().into_owned(),
            ctx.genome_fasta.to_string_lossy().into_owned(),
            "2>".to_string(),
            ctx.log_file.to_string_lossy().into_owned(),
        ])
    }

    fn parse_output(&self, output: &Path, version: &str) -> DfcResult<FeatureMap> {
        let mut features = FeatureMap::new();
        let mut index = 0;

        for hit in read_hits(output)? {
            index += 1;
            insert_feature(&mut features, self.build_feature(hit?, index, version));
        }

        debug!(
            "Parsed {} tRNAs on {} sequences from {}",
            index,
            features.len(),
            output.display()
        );
        Ok(features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dfc_bio::{feature_count, Location, Strand};
    use dfc_core::DfcError;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn adapter() -> TrnaScan {
        TrnaScan::new(TrnaScanConfig::default()).unwrap()
    }

    fn write_output(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("tRNAscan.out");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_command_token_order() {
        let config = TrnaScanConfig {
            model: "--arch".to_string(),
            cmd_options: "--nopseudo -D".to_string(),
        };
        let ctx = ToolContext::new("genome.fna", "OUT/tRNAscan.out", "OUT/tRNAscan.log");

        let cmd = TrnaScan::new(config).unwrap().command(&ctx);
        assert_eq!(
            cmd.tokens(),
            &[
                "tRNAscan-SE",
                "--arch",
                "--nopseudo -D",
                "--brief --forceow",
                "--output",
                "OUT/tRNAscan.out",
                "genome.fna",
                "2>",
                "OUT/tRNAscan.log",
            ]
        );
    }

    #[test]
    fn test_command_with_default_config() {
        let ctx = ToolContext::new("g.fna", "o.tsv", "o.log");
        let cmd = adapter().command(&ctx);

        assert_eq!(cmd.tokens().len(), 9);
        assert_eq!(cmd.tokens()[1], "--bact");
        assert_eq!(cmd.tokens()[2], "");
        assert_eq!(
            cmd.to_shell_string(),
            "tRNAscan-SE --bact  --brief --forceow --output o.tsv g.fna 2> o.log"
        );
    }

    #[test]
    fn test_custom_program() {
        let trnascan = adapter().with_program("/opt/trnascan/bin/tRNAscan-SE");
        let cmd = trnascan.command(&ToolContext::default());
        assert_eq!(cmd.program(), Some("/opt/trnascan/bin/tRNAscan-SE"));
        assert_eq!(
            trnascan.version_check().command,
            "/opt/trnascan/bin/tRNAscan-SE -h 2>&1"
        );
    }

    #[test]
    fn test_blank_model_is_rejected() {
        let config = TrnaScanConfig {
            model: String::new(),
            cmd_options: "--nopseudo".to_string(),
        };
        assert!(matches!(TrnaScan::new(config), Err(DfcError::Configuration(_))));
    }

    #[test]
    fn test_reverse_strand_record() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_output(&temp_dir, "chr1  \t1\t100\t72\tGly\tGCC\tx\ty\t85.3\n");

        let features = adapter().parse_output(&path, "2.0.12").unwrap();
        let records = &features["chr1"];
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.location, Location::new(72, 100, Strand::Reverse));
        assert_eq!(record.feature_type, "tRNA");
        assert_eq!(record.id, "tRNAscan_1");
        assert_eq!(record.seq_id, "chr1");
        assert_eq!(record.annotation("anticodon"), Some("GCC"));
        assert_eq!(record.qualifier("product").unwrap(), &["tRNA-Gly".to_string()]);
        assert_eq!(
            record.qualifier("inference").unwrap(),
            &["COORDINATES:ab initio prediction:tRNAscan-SE:2.0.12".to_string()]
        );
    }

    #[test]
    fn test_index_is_global_across_sequences() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_output(
            &temp_dir,
            "chr1\t1\t10\t80\tGly\tGCC\t0\t0\t60.1\n\
             chr2\t1\t500\t420\tAla\tTGC\t0\t0\t70.2\n\
             chr1 \t2\t900\t980\tLeu\tCAG\t0\t0\t55.0\n",
        );

        let features = adapter().parse_output(&path, "2.0.12").unwrap();

        let keys: Vec<&str> = features.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["chr1", "chr2"]);
        let chr1_ids: Vec<&str> = features["chr1"].iter().map(|f| f.id.as_str()).collect();
        assert_eq!(chr1_ids, vec!["tRNAscan_1", "tRNAscan_3"]);
        assert_eq!(features["chr2"][0].id, "tRNAscan_2");
        assert_eq!(feature_count(&features), 3);
    }

    #[test]
    fn test_empty_output() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_output(&temp_dir, "");
        assert!(adapter().parse_output(&path, "2.0.12").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_line_fails_parse() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_output(
            &temp_dir,
            "chr1\t1\t10\t80\tGly\tGCC\t0\t0\t60.1\nchr1\t2\t100\t172\tGly\n",
        );

        match adapter().parse_output(&path, "2.0.12").unwrap_err() {
            DfcError::Parse(msg) => assert!(msg.contains(":2:")),
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_output_file() {
        let err = adapter()
            .parse_output(Path::new("/nonexistent/tRNAscan.out"), "2.0.12")
            .unwrap_err();
        assert!(matches!(err, DfcError::NotFound(_)));
    }

    #[test]
    fn test_metadata() {
        let trnascan = adapter();
        assert_eq!(trnascan.name(), "tRNAscan");
        assert_eq!(trnascan.display_name(), "tRNAscan-SE");
        assert_eq!(trnascan.feature_type(), "tRNA");
        assert_eq!(trnascan.version_check().pattern, r"tRNAscan-SE (.+) \(");
    }
}
