//! # writers: the three report artifacts
//!
//! Each artifact (interactive map, PDF summary, Markdown summary) sits behind
//! the [`ReportWriter`] trait so the pipeline can run them in sequence without
//! knowing their formats, and tests can substitute `MockReportWriter`.
//!
//! Writers only read their inputs. They share nothing and none depends on
//! another's output. Every writer goes through [`write_atomically`], so a
//! failed run never leaves a half-written artifact behind.

pub mod map;
pub mod markdown;
pub mod pdf;

use std::io::Write;
use std::path::Path;

#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;
use tracing::{debug, error};

use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::geo::Point;
use crate::report::ReportData;

pub use map::MapWriter;
pub use markdown::MarkdownWriter;
pub use pdf::PdfWriter;

/// A sink that serializes run data into one output file.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
pub trait ReportWriter {
    /// Short artifact name used in logs and the run summary.
    fn name(&self) -> &'static str;

    /// File name of the artifact inside the output directory.
    fn file_name(&self) -> String;

    /// Write the artifact to `path`.
    fn write(&self, points: &[Point], report: &ReportData, path: &Path) -> Result<()>;
}

/// The standard writer set, in the order a run invokes them: PDF, Markdown, map.
pub fn default_writers(config: &ReportConfig) -> Vec<Box<dyn ReportWriter>> {
    vec![
        Box::new(PdfWriter::new(config.pdf.clone())),
        Box::new(MarkdownWriter::new(config.markdown.clone())),
        Box::new(MapWriter::new(config.map.clone())),
    ]
}

/// Mode of every artifact on unix: owner read/write, everyone else read.
#[cfg(unix)]
pub const ARTIFACT_MODE: u32 = 0o644;

/// Writes `bytes` to a temp file next to `path`, then renames it into place.
///
/// Temp files are created owner-only; the final artifact gets [`ARTIFACT_MODE`].
pub fn write_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| {
        error!(error = ?e, dir = %dir.display(), "Failed to create temp file for artifact");
        ReportError::io(dir, e)
    })?;
    tmp.write_all(bytes)
        .and_then(|_| tmp.flush())
        .map_err(|e| {
            error!(error = ?e, path = %path.display(), "Failed to write artifact contents");
            ReportError::io(path, e)
        })?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(ARTIFACT_MODE))
            .map_err(|e| {
                error!(error = ?e, path = %path.display(), "Failed to set artifact permissions");
                ReportError::io(path, e)
            })?;
    }
    tmp.persist(path).map_err(|e| {
        error!(error = ?e.error, path = %path.display(), "Failed to move artifact into place");
        ReportError::io(path, e.error)
    })?;

    debug!(path = %path.display(), size = bytes.len(), "Artifact written");
    Ok(())
}
