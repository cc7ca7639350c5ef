use std::fs;
use std::path::Path;

use tracing::{error, info};

use crate::error::{ReportError, Result};

/// What [`ensure_output_directory`] found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryStatus {
    Created,
    AlreadyExists,
}

/// Makes sure `dir` exists, creating missing parents. Idempotent.
///
/// A path that exists but is not a directory is an I/O error.
pub fn ensure_output_directory(dir: &Path) -> Result<DirectoryStatus> {
    if dir.is_dir() {
        info!(path = %dir.display(), "Output directory already exists");
        return Ok(DirectoryStatus::AlreadyExists);
    }
    if dir.exists() {
        error!(path = %dir.display(), "Output path exists but is not a directory");
        return Err(ReportError::io(
            dir,
            std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                "output path exists and is not a directory",
            ),
        ));
    }

    if let Err(e) = fs::create_dir_all(dir) {
        error!(error = ?e, path = %dir.display(), "Failed to create output directory");
        return Err(ReportError::io(dir, e));
    }
    info!(path = %dir.display(), "Output directory was created");
    Ok(DirectoryStatus::Created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_nested_directory_then_reports_existing() {
        let tmp = tempdir().unwrap();
        let target = tmp.path().join("a/b/output");

        assert_eq!(ensure_output_directory(&target).unwrap(), DirectoryStatus::Created);
        assert!(target.is_dir());

        assert_eq!(
            ensure_output_directory(&target).unwrap(),
            DirectoryStatus::AlreadyExists
        );
        let entries: Vec<_> = fs::read_dir(&target).unwrap().collect();
        assert!(entries.is_empty());
    }

    #[test]
    fn file_in_the_way_is_an_io_error() {
        let tmp = tempdir().unwrap();
        let target = tmp.path().join("output");
        fs::write(&target, b"not a dir").unwrap();

        let err = ensure_output_directory(&target).unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }));
        assert_eq!(err.exit_code(), 5);
    }
}
