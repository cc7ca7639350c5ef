// centroid-report/src/config.rs

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info};

/// Full configuration for one report run. Every section has defaults, so an
/// empty YAML document (or no document at all) yields a working config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Root directory that receives all artifacts.
    pub output_dir: PathBuf,
    /// Reject latitudes outside [-90, 90] and longitudes outside [-180, 180] at load time.
    pub validate_ranges: bool,
    pub search: SearchConfig,
    pub map: MapConfig,
    pub pdf: PdfConfig,
    pub markdown: MarkdownConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            validate_ranges: true,
            search: SearchConfig::default(),
            map: MapConfig::default(),
            pdf: PdfConfig::default(),
            markdown: MarkdownConfig::default(),
        }
    }
}

impl ReportConfig {
    pub fn trace_loaded(&self) {
        info!(
            output_dir = %self.output_dir.display(),
            queries = self.search.queries.len(),
            validate_ranges = self.validate_ranges,
            "Loaded ReportConfig"
        );
        debug!(?self, "ReportConfig loaded (full debug)");
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Prefix the escaped query is appended to.
    pub base_url: String,
    pub zoom: u8,
    /// Query terms, in the order links are emitted.
    pub queries: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.google.com/maps/search/".to_string(),
            zoom: 14,
            queries: vec![
                "restaurants".to_string(),
                "hotels".to_string(),
                "tourist".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapConfig {
    pub file_name: String,
    pub zoom: u8,
    pub tile_url: String,
    pub attribution: String,
    pub centroid_color: String,
    pub line_color: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            file_name: "map.html".to_string(),
            zoom: 5,
            tile_url: "https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; OpenStreetMap contributors".to_string(),
            centroid_color: "red".to_string(),
            line_color: "blue".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PdfConfig {
    pub file_name: String,
    /// Points.
    pub font_size: f32,
    /// Points.
    pub line_height: f32,
    /// Lines of text before a new page starts.
    pub lines_per_page: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            file_name: "report.pdf".to_string(),
            font_size: 12.0,
            line_height: 14.0,
            lines_per_page: 48,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkdownConfig {
    pub file_name: String,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            file_name: "report.md".to_string(),
        }
    }
}
