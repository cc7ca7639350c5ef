//! Fixed-layout PDF summary.
//!
//! Text starts at a fixed origin near the top-left of a US Letter page and
//! runs downward one line at a time. When a page holds `lines_per_page` lines
//! the remainder continues on a new page at the same origin.

use std::path::Path;

use printpdf::{
    BuiltinFont, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, Point as PdfPoint, Pt, TextItem,
};
use tracing::{info, warn};

use super::{write_atomically, ReportWriter};
use crate::config::PdfConfig;
use crate::error::Result;
use crate::geo::Point;
use crate::report::ReportData;

const PAGE_WIDTH: Mm = Mm(215.9);
const PAGE_HEIGHT: Mm = Mm(279.4);
const ORIGIN_X: Pt = Pt(40.0);
const ORIGIN_Y: Pt = Pt(750.0);
/// Lowest baseline text may sit on.
const BOTTOM_MARGIN: Pt = Pt(36.0);
const FONT: BuiltinFont = BuiltinFont::Helvetica;

pub struct PdfWriter {
    config: PdfConfig,
}

impl PdfWriter {
    pub fn new(config: PdfConfig) -> Self {
        Self { config }
    }
}

impl ReportWriter for PdfWriter {
    fn name(&self) -> &'static str {
        "pdf"
    }

    fn file_name(&self) -> String {
        self.config.file_name.clone()
    }

    fn write(&self, _points: &[Point], report: &ReportData, path: &Path) -> Result<()> {
        let lines = report_lines(report);
        let pages = paginate(&lines, self.config.lines_per_page);
        let bytes = render_pdf(&pages, &self.config);
        write_atomically(path, &bytes)?;
        info!(
            path = %path.display(),
            pages = pages.len(),
            size = bytes.len(),
            "Wrote PDF report"
        );
        Ok(())
    }
}

/// Text lines of the report: the centroid, then one line per search link.
pub fn report_lines(report: &ReportData) -> Vec<String> {
    let mut lines = vec![format!("Centroid Location: {}", report.centroid)];
    for link in &report.links {
        lines.push(format!("{} Search: {}", link.label(), link.url));
    }
    lines
}

/// Most lines that fit between the text origin and the bottom margin at `line_height` points.
pub fn max_lines_per_page(line_height: f32) -> usize {
    if line_height <= 0.0 {
        return 0;
    }
    ((ORIGIN_Y.0 - BOTTOM_MARGIN.0) / line_height).floor() as usize + 1
}

/// Splits lines into pages of at most `per_page` lines. Always yields at least one page.
pub fn paginate(lines: &[String], per_page: usize) -> Vec<Vec<String>> {
    let per_page = per_page.max(1);
    let pages: Vec<Vec<String>> = lines.chunks(per_page).map(|c| c.to_vec()).collect();
    if pages.is_empty() {
        vec![Vec::new()]
    } else {
        pages
    }
}

fn render_pdf(pages: &[Vec<String>], config: &PdfConfig) -> Vec<u8> {
    let pdf_pages = pages
        .iter()
        .map(|lines| PdfPage::new(PAGE_WIDTH, PAGE_HEIGHT, page_ops(lines, config)))
        .collect::<Vec<_>>();

    let mut doc = PdfDocument::new("Centroid Report");
    doc.with_pages(pdf_pages);
    let mut warnings = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
    if !warnings.is_empty() {
        warn!(count = warnings.len(), "PDF serializer reported warnings");
    }
    bytes
}

fn page_ops(lines: &[String], config: &PdfConfig) -> Vec<Op> {
    let mut ops = vec![
        Op::StartTextSection,
        Op::SetTextCursor {
            pos: PdfPoint {
                x: ORIGIN_X,
                y: ORIGIN_Y,
            },
        },
        Op::SetFontSizeBuiltinFont {
            size: Pt(config.font_size),
            font: FONT,
        },
        Op::SetLineHeight {
            lh: Pt(config.line_height),
        },
    ];
    for line in lines {
        ops.push(Op::WriteTextBuiltinFont {
            items: vec![TextItem::Text(line.clone())],
            font: FONT,
        });
        ops.push(Op::AddLineBreak);
    }
    ops.push(Op::EndTextSection);
    ops
}
