use crate::cli::output::*;
use crate::cli::ExportFormat;
use anyhow::Context;
use clap::{Args, Subcommand};
use dfc_bio::{feature_count, write_gff3, write_gff3_to_writer, FeatureMap};
use dfc_core::{Config, DfcError, TrnaScanConfig};
use dfc_tools::{StructuralAnnotator, ToolContext, TrnaScan};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Subcommand)]
pub enum TrnascanCommands {
    /// Print the tRNAscan-SE command line for a genome
    Command(CommandArgs),

    /// Convert an existing tRNAscan-SE output file
    Parse(ParseArgs),

    /// Run tRNAscan-SE on a genome and export the predictions
    Run(RunArgs),
}

/// Overrides for the [trnascan] section of the configuration
#[derive(Args, Default)]
pub struct AdapterArgs {
    /// Organism model flag, e.g. --bact, --arch, --organ, --general
    #[arg(long, allow_hyphen_values = true)]
    pub model: Option<String>,

    /// Extra flags passed to tRNAscan-SE verbatim
    #[arg(long, allow_hyphen_values = true)]
    pub cmd_options: Option<String>,

    /// tRNAscan-SE executable to use instead of the one on PATH
    #[arg(long, value_name = "PATH")]
    pub program: Option<String>,
}

#[derive(Args)]
pub struct CommandArgs {
    /// Genome FASTA file
    #[arg(short, long)]
    pub genome: PathBuf,

    /// Work directory (defaults to general.work_dir from the config)
    #[arg(short, long)]
    pub work_dir: Option<PathBuf>,

    #[command(flatten)]
    pub adapter: AdapterArgs,
}

#[derive(Args)]
pub struct ParseArgs {
    /// tRNAscan-SE output file (brief format)
    pub input: PathBuf,

    /// tRNAscan-SE version cited in the inference qualifier
    #[arg(long)]
    pub tool_version: String,

    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct RunArgs {
    /// Genome FASTA file
    #[arg(short, long)]
    pub genome: PathBuf,

    /// Work directory (defaults to general.work_dir from the config)
    #[arg(short, long)]
    pub work_dir: Option<PathBuf>,

    /// Skip version detection and cite this version instead
    #[arg(long)]
    pub tool_version: Option<String>,

    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub adapter: AdapterArgs,
}

pub fn run(command: TrnascanCommands, config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = super::resolve_config(config_path)?;

    match command {
        TrnascanCommands::Command(args) => {
            let trnascan = build_adapter(&config, &args.adapter)?;
            let ctx = tool_context(&config, args.work_dir.as_deref(), &args.genome);
            println!("{}", trnascan.command(&ctx));
            Ok(())
        }
        TrnascanCommands::Parse(args) => {
            let trnascan = build_adapter(&config, &AdapterArgs::default())?;
            let features = trnascan.parse_output(&args.input, &args.tool_version)?;
            info(&format!(
                "Parsed {} tRNAs on {} sequences",
                feature_count(&features),
                features.len()
            ));
            export(&features, args.format, args.output.as_deref())
        }
        TrnascanCommands::Run(args) => run_trnascan(&config, args),
    }
}

fn run_trnascan(config: &Config, args: RunArgs) -> anyhow::Result<()> {
    if !args.genome.exists() {
        return Err(DfcError::NotFound(args.genome.display().to_string()).into());
    }

    let trnascan = build_adapter(config, &args.adapter)?;
    if !trnascan.is_available() {
        warning(&format!("{} not found on PATH", trnascan.program()));
    }

    let version = match args.tool_version {
        Some(version) => version,
        None => trnascan
            .detect_version()
            .context("Could not determine the tRNAscan-SE version")?,
    };

    let ctx = tool_context(config, args.work_dir.as_deref(), &args.genome);
    info(&format!("Running {} {}", trnascan.display_name(), version));
    let features = trnascan.run(&ctx, &version)?;

    success(&format!(
        "Predicted {} tRNAs on {} sequences",
        feature_count(&features),
        features.len()
    ));
    export(&features, args.format, args.output.as_deref())
}

fn build_adapter(config: &Config, overrides: &AdapterArgs) -> anyhow::Result<TrnaScan> {
    let mut options: TrnaScanConfig = config.trnascan.clone();
    if let Some(model) = &overrides.model {
        options.model = model.clone();
    }
    if let Some(cmd_options) = &overrides.cmd_options {
        options.cmd_options = cmd_options.clone();
    }

    let mut trnascan = TrnaScan::new(options)?;
    if let Some(program) = &overrides.program {
        trnascan = trnascan.with_program(program.clone());
    }
    Ok(trnascan)
}

fn tool_context(config: &Config, work_dir: Option<&Path>, genome: &Path) -> ToolContext {
    let work_dir = work_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&config.general.work_dir));
    ToolContext::in_work_dir(&work_dir, genome, TrnaScan::NAME)
}

fn export(features: &FeatureMap, format: ExportFormat, output: Option<&Path>) -> anyhow::Result<()> {
    match (format, output) {
        (ExportFormat::Json, Some(path)) => {
            let json = serde_json::to_string_pretty(features)?;
            fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        (ExportFormat::Json, None) => {
            println!("{}", serde_json::to_string_pretty(features)?);
        }
        (ExportFormat::Gff, Some(path)) => {
            write_gff3(path, features, TrnaScan::DISPLAY_NAME)?;
        }
        (ExportFormat::Gff, None) => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_gff3_to_writer(&mut handle, features, TrnaScan::DISPLAY_NAME)?;
            handle.flush()?;
        }
    }
    Ok(())
}
