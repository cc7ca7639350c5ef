//! Command-line surface for centroid-report.
//!
//! `centroid-report <INPUT> [--config <YAML>] [--output-dir <DIR>]`
//!
//! The input path is optional at the clap level so a missing argument can be
//! reported as a usage error with exit status 1. Any other argument error
//! clap reports (unknown flag, extra positional) is folded into the same
//! usage error through [`parse_args`].

use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::load_config::load_config;
use crate::pipeline::{generate_report, RunReport};
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

pub const USAGE: &str = "Usage: centroid-report /path/to/file/data.json";

#[derive(Debug, Parser)]
#[clap(
    name = "centroid-report",
    version,
    about = "Compute the centroid of geolocated points and write map, PDF and Markdown reports"
)]
pub struct Cli {
    /// Path to the JSON array of points (`thing-name`, `lat`, `lon`)
    pub input: Option<PathBuf>,

    /// Optional YAML run configuration
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Directory that receives the artifacts (overrides the config file)
    #[clap(long)]
    pub output_dir: Option<PathBuf>,
}

/// What the parsed command line asks for.
#[derive(Debug)]
pub enum Invocation {
    /// Generate reports.
    Run(Cli),
    /// `--help` or `--version`: clap prints it and exits successfully.
    Exit(clap::Error),
}

/// Parses arguments, turning clap's argument errors into [`ReportError::Usage`].
pub fn parse_args<I, T>(args: I) -> Result<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(Invocation::Run(cli)),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Ok(Invocation::Exit(e))
        }
        Err(e) => {
            let rendered = e.to_string();
            let message = rendered
                .lines()
                .next()
                .unwrap_or("invalid arguments")
                .trim_start_matches("error: ")
                .to_string();
            tracing::error!(kind = ?e.kind(), %message, "Invalid command-line arguments");
            Err(ReportError::Usage(message))
        }
    }
}

/// CLI entrypoint shared by main() and integration tests. Never exits the process.
pub fn run(cli: Cli) -> Result<RunReport> {
    tracing::info!("run_started");

    let result = execute(cli);
    if let Err(e) = &result {
        tracing::error!(error = %e, exit_code = e.exit_code(), "Run failed");
    }

    let exit_span = tracing::info_span!("exit");
    exit_span.in_scope(|| {
        tracing::info!(success = result.is_ok(), "Run finished");
    });

    result
}

fn execute(cli: Cli) -> Result<RunReport> {
    let input = cli
        .input
        .ok_or_else(|| ReportError::Usage("missing input file path".to_string()))?;
    if !input.exists() {
        return Err(ReportError::NotFound { path: input });
    }

    let mut config = match &cli.config {
        Some(path) => {
            load_config(path).map_err(|e| ReportError::Config(format!("{e:#}")))?
        }
        None => ReportConfig::default(),
    };
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }
    config.trace_loaded();

    generate_report(&input, &config)
}

/// Human-readable lines printed to stdout for a finished run.
pub fn summary_lines(report: &RunReport) -> Vec<String> {
    let mut lines = vec![format!(
        "Centroid of {} points: {}",
        report.points, report.centroid
    )];
    for artifact in &report.artifacts {
        lines.push(format!("Wrote {}: {}", artifact.name, artifact.path.display()));
    }
    lines.push(format!(
        "Artifacts are in {}",
        report.output_dir.display()
    ));
    lines
}
