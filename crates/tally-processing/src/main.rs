//! CLI entry point for the record statistics pipeline.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueEnum};
use std::fs;
use std::io::Read;
use tally_processing::{Pipeline, PipelineConfig, PresenterKind, StatisticKind};
use tracing::{debug, info};

/// CLI-compatible statistic enum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliStatistic {
    /// Arithmetic mean of the extracted values
    Mean,
    /// Middle value after ascending sort
    Median,
    /// Most frequent value, ties to the smallest
    Mode,
}

impl From<CliStatistic> for StatisticKind {
    fn from(cli: CliStatistic) -> Self {
        match cli {
            CliStatistic::Mean => StatisticKind::Mean,
            CliStatistic::Median => StatisticKind::Median,
            CliStatistic::Mode => StatisticKind::Mode,
        }
    }
}

/// CLI-compatible presenter enum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliPresenter {
    /// Print "label: value" to stdout
    Print,
    /// Emit a structured log event
    Log,
    /// No presentation
    None,
}

impl From<CliPresenter> for PresenterKind {
    fn from(cli: CliPresenter) -> Self {
        match cli {
            CliPresenter::Print => PresenterKind::Print,
            CliPresenter::Log => PresenterKind::Log,
            CliPresenter::None => PresenterKind::None,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Summarize string records with a pluggable statistic",
    long_about = "Reads one record per line, cleans and extracts the numeric entries,\n\
                  and reduces them to a single summary value.\n\n\
                  EXAMPLES:\n  \
                  # Mean of the numeric lines in a file\n  \
                  tally-processing -i data.txt\n\n  \
                  # Median from stdin, labeled\n  \
                  printf '1\\n2\\n3\\n4\\n' | tally-processing -s median -l 'Median score'\n\n  \
                  # Machine-readable run report\n  \
                  tally-processing -i data.txt --json | jq .value"
)]
struct Args {
    /// Path to a file with one record per line (reads stdin when omitted)
    #[arg(short, long)]
    input: Option<String>,

    /// Statistic used to summarize the extracted numbers
    #[arg(short, long, value_enum, default_value = "mean")]
    statistic: CliStatistic,

    /// Presenter for the final (label, value) pair
    #[arg(short, long, value_enum, default_value = "print")]
    presenter: CliPresenter,

    /// Label attached to the result
    #[arg(short, long, default_value = "Result")]
    label: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show warnings and errors)
    #[arg(short, long)]
    quiet: bool,

    /// Output the run report as JSON to stdout
    ///
    /// Disables logging and the configured presenter; only JSON reaches
    /// stdout. On failure the error is emitted as JSON instead.
    #[arg(long)]
    json: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled so stdout
/// carries nothing but the JSON report.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Read records from the input file, or stdin when no file is given.
///
/// Lines are taken verbatim; the cleaner decides what survives.
fn read_records(input: Option<&str>) -> Result<Vec<String>> {
    match input {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("failed to read input file '{path}'"))?;
            Ok(contents.lines().map(str::to_string).collect())
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read records from stdin")?;
            Ok(buf.lines().map(str::to_string).collect())
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level, args.quiet, args.json);

    let records = read_records(args.input.as_deref())?;
    debug!(records = records.len(), "records loaded");

    // In JSON mode the report is the output; a presenter would pollute stdout.
    let presenter = if args.json {
        PresenterKind::None
    } else {
        args.presenter.into()
    };

    let config = PipelineConfig::builder()
        .statistic(args.statistic.into())
        .presenter(presenter)
        .label(&args.label)
        .build()
        .map_err(|e| anyhow!("invalid configuration: {e}"))?;

    let pipeline =
        Pipeline::from_config(&config).map_err(|e| anyhow!("failed to construct pipeline: {e}"))?;

    match pipeline.run_report(&records) {
        Ok(report) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else if config.presenter == PresenterKind::None {
                println!("{}: {}", report.label, report.value);
            }
            info!(value = report.value, statistic = %report.statistic, "done");
            Ok(())
        }
        Err(e) => {
            if args.json {
                println!("{}", serde_json::to_string(&e)?);
            }
            Err(e.into())
        }
    }
}
