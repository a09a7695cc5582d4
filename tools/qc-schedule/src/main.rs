//! QC-Schedule: Quantum-Chain Fork Schedule Inspector
//!
//! Loads a genesis file and reports its fork schedule, the validators in
//! effect at a height, and configuration warnings.

mod report;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use qc_18_fork_schedule::{
    lint, FileGenesisSource, ForkSchedule, GenesisSource, LoaderConfig, ScheduleLoader,
};

/// QC-Schedule: Quantum-Chain Fork Schedule Inspector
#[derive(Parser, Debug)]
#[command(name = "qc-schedule")]
#[command(about = "Inspect fork schedules and validator transitions in a genesis file")]
struct Args {
    /// Reject genesis files without a consensus engine block
    #[arg(long, global = true)]
    require_engine: bool,

    /// Fail when the schedule has configuration warnings
    #[arg(long, global = true)]
    deny_warnings: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the schedule, optionally evaluated at a block height
    Inspect {
        /// Genesis file (full genesis or bare config object)
        genesis: PathBuf,

        /// Block height to evaluate milestones and validators at
        #[arg(short, long)]
        block: Option<u64>,
    },

    /// Print the validator set in effect at a block height
    Validators {
        /// Genesis file
        genesis: PathBuf,

        /// Block height
        #[arg(short, long)]
        block: u64,
    },

    /// Report configuration warnings
    Lint {
        /// Genesis file
        genesis: PathBuf,
    },

    /// Print the normalized config document as JSON
    Render {
        /// Genesis file
        genesis: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing()?;
    print!("{}", run(&args)?);
    Ok(())
}

/// Log level from `QC_LOG_LEVEL`, then `RUST_LOG`, else `warn`.
fn init_tracing() -> Result<()> {
    let level = std::env::var("QC_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());
    let filter = EnvFilter::try_new(&level).with_context(|| format!("invalid log filter '{level}'"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}

fn loader_config(args: &Args) -> LoaderConfig {
    let mut config = LoaderConfig::from_env();
    config.require_explicit_engine |= args.require_engine;
    config.deny_warnings |= args.deny_warnings;
    config
}

fn load_schedule(path: &Path, config: LoaderConfig) -> Result<ForkSchedule> {
    let source = FileGenesisSource::new(path);
    let document = source
        .read_document()
        .with_context(|| format!("reading {}", source.describe()))?;
    let schedule = ScheduleLoader::new(config)
        .load(&document)
        .with_context(|| format!("loading fork schedule from {}", source.describe()))?;
    debug!(path = %path.display(), engine = schedule.consensus_engine_name(), "Schedule loaded");
    Ok(schedule)
}

fn run(args: &Args) -> Result<String> {
    let config = loader_config(args);
    match &args.command {
        Command::Inspect { genesis, block } => {
            let schedule = load_schedule(genesis, config)?;
            Ok(report::describe_schedule(&schedule, *block))
        }
        Command::Validators { genesis, block } => {
            let schedule = load_schedule(genesis, config)?;
            Ok(report::describe_validators(&schedule, *block))
        }
        Command::Lint { genesis } => {
            // Load permissively so every warning is listed, then apply the policy.
            let deny = config.deny_warnings;
            let schedule = load_schedule(
                genesis,
                LoaderConfig {
                    deny_warnings: false,
                    ..config
                },
            )?;
            let warnings = lint(&schedule);
            let text = report::describe_warnings(&warnings);
            if deny && !warnings.is_empty() {
                bail!("{text}{} warning(s) denied", warnings.len());
            }
            Ok(text)
        }
        Command::Render { genesis } => {
            let schedule = load_schedule(genesis, config)?;
            let mut text = serde_json::to_string_pretty(&schedule.to_document())
                .context("rendering schedule")?;
            text.push('\n');
            Ok(text)
        }
    }
}
