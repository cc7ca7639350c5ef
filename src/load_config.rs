//! `load_config` module: reads an optional YAML run configuration into a [`ReportConfig`].
//!
//! This is the only place user-supplied YAML is parsed. Missing sections fall
//! back to their defaults; unknown keys and nonsensical values are rejected
//! here so the pipeline never sees them.
//!
//! All errors use `anyhow::Error`; the CLI converts them into
//! [`crate::error::ReportError::Config`] at its boundary.

use crate::config::ReportConfig;
use crate::writers::pdf::max_lines_per_page;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{error, info};

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ReportConfig> {
    let path_ref = path.as_ref();
    info!(config_path = ?path_ref, "Loading configuration from file");

    let config_content = match fs::read_to_string(path_ref) {
        Ok(content) => {
            info!(config_path = ?path_ref, "Config file read successfully");
            content
        }
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to read config file");
            return Err(anyhow::anyhow!(
                "Failed to read config file {:?}: {}",
                path_ref,
                e
            ));
        }
    };

    let config = parse_config(&config_content)
        .with_context(|| format!("Invalid config file {:?}", path_ref))?;

    info!(
        config_path = ?path_ref,
        output_dir = %config.output_dir.display(),
        "Config loaded and validated successfully"
    );
    Ok(config)
}

/// Parses and validates YAML text. An empty document yields the defaults.
pub fn parse_config(content: &str) -> Result<ReportConfig> {
    let config: ReportConfig = if content.trim().is_empty() {
        ReportConfig::default()
    } else {
        match serde_yaml::from_str(content) {
            Ok(conf) => conf,
            Err(e) => {
                error!(error = ?e, "Failed to parse config YAML");
                return Err(anyhow::anyhow!("Failed to parse config YAML: {e}"));
            }
        }
    };
    validate(&config)?;
    Ok(config)
}

fn validate(config: &ReportConfig) -> Result<()> {
    if config.search.queries.is_empty() {
        error!("search.queries is empty");
        anyhow::bail!("search.queries must list at least one query term");
    }
    if let Some(blank) = config.search.queries.iter().position(|q| q.trim().is_empty()) {
        error!(index = blank, "Blank search query term");
        anyhow::bail!("search.queries[{blank}] is blank");
    }
    if config.pdf.lines_per_page == 0 {
        anyhow::bail!("pdf.lines_per_page must be at least 1");
    }
    if !(config.pdf.font_size > 0.0 && config.pdf.line_height > 0.0) {
        anyhow::bail!("pdf.font_size and pdf.line_height must be positive");
    }
    let fits = max_lines_per_page(config.pdf.line_height);
    if config.pdf.lines_per_page > fits {
        error!(
            lines_per_page = config.pdf.lines_per_page,
            line_height = config.pdf.line_height,
            fits,
            "PDF page layout overflows the page"
        );
        anyhow::bail!(
            "pdf.lines_per_page {} at line_height {} overflows the page (at most {fits} lines fit)",
            config.pdf.lines_per_page,
            config.pdf.line_height
        );
    }
    for (key, name) in [
        ("map.file_name", &config.map.file_name),
        ("pdf.file_name", &config.pdf.file_name),
        ("markdown.file_name", &config.markdown.file_name),
    ] {
        let bare = Path::new(name).file_name().map(|f| f == name.as_str());
        if name.is_empty() || bare != Some(true) {
            error!(key, file_name = %name, "Artifact file name must be a bare file name");
            anyhow::bail!("{key} must be a plain file name, got {name:?}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(parse_config("").unwrap(), ReportConfig::default());
        assert_eq!(parse_config("  \n").unwrap(), ReportConfig::default());
    }

    #[test]
    fn rejects_empty_query_list() {
        let err = parse_config("search:\n  queries: []\n").unwrap_err();
        assert!(err.to_string().contains("search.queries"), "got: {err}");
    }

    #[test]
    fn rejects_nested_artifact_names() {
        let err = parse_config("pdf:\n  file_name: ../escape.pdf\n").unwrap_err();
        assert!(err.to_string().contains("pdf.file_name"), "got: {err}");
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = parse_config("colour_scheme: dark\n").unwrap_err();
        assert!(err.to_string().contains("parse"), "got: {err}");
    }

    #[test]
    fn rejects_pages_taller_than_the_sheet() {
        let err = parse_config("pdf:\n  lines_per_page: 100\n").unwrap_err();
        assert!(err.to_string().contains("overflows the page"), "got: {err}");

        let err = parse_config("pdf:\n  line_height: 30\n").unwrap_err();
        assert!(err.to_string().contains("at most 24 lines"), "got: {err}");

        assert!(parse_config("pdf:\n  line_height: 30\n  lines_per_page: 24\n").is_ok());
    }

    #[test]
    fn rejects_zero_lines_per_page() {
        assert!(parse_config("pdf:\n  lines_per_page: 0\n").is_err());
    }
}
