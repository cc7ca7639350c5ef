//! Orchestrates one report run: load → centroid → links → assemble → output dir → writers.
//!
//! The run is strictly sequential and fail-fast. The first error aborts the
//! run and is returned unchanged. An output directory created before a writer
//! fails is left in place.
//!
//! # Navigation
//! - Main entrypoint: [`generate_report`]
//! - With a custom writer set (tests, alternative sinks): [`generate_report_with`]

use std::path::{Path, PathBuf};

use tracing::{error, info, info_span};

use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::geo::{calculate_centroid, Coordinate};
use crate::links::build_search_links;
use crate::load_points::load_points;
use crate::output_dir::{ensure_output_directory, DirectoryStatus};
use crate::report::assemble_report;
use crate::writers::{default_writers, ReportWriter};

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub points: usize,
    pub centroid: Coordinate,
    pub output_dir: PathBuf,
    pub directory: DirectoryStatus,
    pub artifacts: Vec<ArtifactReport>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactReport {
    pub name: &'static str,
    pub path: PathBuf,
}

/// Runs the full pipeline with the standard PDF, Markdown and map writers.
pub fn generate_report(input: &Path, config: &ReportConfig) -> Result<RunReport> {
    let writers = default_writers(config);
    generate_report_with(input, config, &writers)
}

pub fn generate_report_with(
    input: &Path,
    config: &ReportConfig,
    writers: &[Box<dyn ReportWriter>],
) -> Result<RunReport> {
    let span = info_span!("generate_report", input = %input.display());
    let _enter = span.enter();
    info!("Starting report run");

    let points = load_points(input, config.validate_ranges)?;
    let centroid = calculate_centroid(&points)?;
    let links = build_search_links(centroid, &config.search);
    if links.is_empty() {
        error!("No search queries configured");
        return Err(ReportError::Config(
            "search.queries must list at least one query term".to_string(),
        ));
    }
    let report = assemble_report(centroid, links);
    info!(centroid = %report.centroid, links = report.links.len(), "Assembled report data");

    let directory = ensure_output_directory(&config.output_dir)?;

    let mut artifacts = Vec::with_capacity(writers.len());
    for writer in writers {
        let path = config.output_dir.join(writer.file_name());
        info!(writer = writer.name(), path = %path.display(), "Writing artifact");
        if let Err(e) = writer.write(&points, &report, &path) {
            error!(writer = writer.name(), error = %e, "Artifact writer failed");
            return Err(e);
        }
        artifacts.push(ArtifactReport {
            name: writer.name(),
            path,
        });
    }

    info!(artifacts = artifacts.len(), "Report run complete");
    Ok(RunReport {
        points: points.len(),
        centroid,
        output_dir: config.output_dir.clone(),
        directory,
        artifacts,
    })
}
