use std::path::Path;

use regex::Regex;
use tracing::info;

use super::{write_atomically, ReportWriter};
use crate::config::MarkdownConfig;
use crate::error::Result;
use crate::geo::Point;
use crate::report::ReportData;

const CENTROID_HEADING: &str = "## Centroid Location";
const LINKS_HEADING: &str = "## Links";
const COORDINATE_PREFIX: &str = "- Latitude, Longitude: ";

pub struct MarkdownWriter {
    config: MarkdownConfig,
}

impl MarkdownWriter {
    pub fn new(config: MarkdownConfig) -> Self {
        Self { config }
    }
}

impl ReportWriter for MarkdownWriter {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn file_name(&self) -> String {
        self.config.file_name.clone()
    }

    fn write(&self, _points: &[Point], report: &ReportData, path: &Path) -> Result<()> {
        let markdown = render_markdown(report);
        write_atomically(path, markdown.as_bytes())?;
        info!(path = %path.display(), links = report.links.len(), "Wrote Markdown report");
        Ok(())
    }
}

pub fn render_markdown(report: &ReportData) -> String {
    let mut out = format!(
        "{CENTROID_HEADING}\n{COORDINATE_PREFIX}{}\n{LINKS_HEADING}\n",
        report.centroid
    );
    for link in &report.links {
        out.push_str(&format!("- [{}]({})\n", link.label(), link.url));
    }
    out
}

/// What can be recovered from a rendered Markdown report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMarkdownReport {
    /// Coordinate text exactly as written, e.g. `(20.0, 30.0)`.
    pub centroid: String,
    /// `(label, url)` pairs in document order.
    pub links: Vec<(String, String)>,
}

/// Reads a report produced by [`render_markdown`] back into its parts.
pub fn parse_markdown_report(text: &str) -> std::result::Result<ParsedMarkdownReport, String> {
    let link_line = Regex::new(r"^- \[(?P<label>[^\]]*)\]\((?P<url>[^)\s]*)\)$")
        .map_err(|e| e.to_string())?;

    let mut section = None;
    let mut centroid = None;
    let mut links = Vec::new();

    for line in text.lines() {
        match line {
            CENTROID_HEADING | LINKS_HEADING => section = Some(line),
            _ if section == Some(CENTROID_HEADING) => {
                if let Some(rest) = line.strip_prefix(COORDINATE_PREFIX) {
                    centroid = Some(rest.to_string());
                }
            }
            _ if section == Some(LINKS_HEADING) => {
                if let Some(caps) = link_line.captures(line) {
                    links.push((caps["label"].to_string(), caps["url"].to_string()));
                }
            }
            _ => {}
        }
    }

    let centroid = centroid.ok_or_else(|| "no centroid line under 'Centroid Location'".to_string())?;
    Ok(ParsedMarkdownReport { centroid, links })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;
    use crate::geo::Coordinate;
    use crate::links::build_search_links;
    use crate::report::assemble_report;

    fn report() -> ReportData {
        let centroid = Coordinate::new(20.0, 30.0);
        assemble_report(centroid, build_search_links(centroid, &SearchConfig::default()))
    }

    #[test]
    fn renders_sections_in_order() {
        let md = render_markdown(&report());
        let expected = "## Centroid Location\n\
            - Latitude, Longitude: (20.0, 30.0)\n\
            ## Links\n\
            - [Restaurants](https://www.google.com/maps/search/restaurants/@20.0,30.0,14z)\n\
            - [Hotels](https://www.google.com/maps/search/hotels/@20.0,30.0,14z)\n\
            - [Tourist](https://www.google.com/maps/search/tourist/@20.0,30.0,14z)\n";
        assert_eq!(md, expected);
    }

    #[test]
    fn parse_recovers_what_was_rendered() {
        let report = report();
        let parsed = parse_markdown_report(&render_markdown(&report)).unwrap();
        assert_eq!(parsed.centroid, report.centroid.to_string());
        let expected: Vec<_> = report
            .links
            .iter()
            .map(|l| (l.label(), l.url.clone()))
            .collect();
        assert_eq!(parsed.links, expected);
    }

    #[test]
    fn parse_without_centroid_fails() {
        assert!(parse_markdown_report("## Links\n- [A](http://a)\n").is_err());
    }
}
