//! PDF backend for layout plans, built on `printpdf` with the built-in Helvetica fonts.
//!
//! # Architecture
//! - `place_lines` is the pure pass: it wraps text to the text width, aligns
//!   lines and assigns every line a page and position. Content that does not
//!   fit above the break margin flows onto a new page.
//! - `PdfBackend::render` draws the placed lines and serializes the document.
//!
//! CPU-bound: callers on the async runtime go through `tokio::task::spawn_blocking`.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};
use tracing::debug;

use crate::layout::font_metrics::{default_page_config, get_metrics, FontStyle, PageConfig, MM_PER_PT};
use crate::layout::plan::{Align, DocumentPlan, LayoutBackend, LayoutOp, RenderError, TextStyle};
use crate::layout::wrap::{to_pdf_text, wrap_lines};

const LAYER_NAME: &str = "Layer 1";
/// Horizontal padding inside a cell, matching classic cell-based writers.
const CELL_PADDING_MM: f32 = 1.0;

/// A single line of text with its final page and position.
///
/// `x_mm` is measured from the left edge, `baseline_mm` from the top edge.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub page: usize,
    pub x_mm: f32,
    pub baseline_mm: f32,
    pub text: String,
    pub style: TextStyle,
}

struct Cursor<'a> {
    config: &'a PageConfig,
    page: usize,
    y: f32,
    placed: Vec<PlacedLine>,
}

impl<'a> Cursor<'a> {
    fn new(config: &'a PageConfig) -> Self {
        Self {
            config,
            page: 0,
            y: config.margin_top_mm,
            placed: Vec::new(),
        }
    }

    fn place(&mut self, text: String, style: TextStyle, align: Align, height: f32) {
        // A line taller than the page still lands on a fresh page instead of looping.
        if self.y + height > self.config.break_at_mm() && self.y > self.config.margin_top_mm {
            self.page += 1;
            self.y = self.config.margin_top_mm;
        }

        if !text.is_empty() {
            let width = get_metrics(style.style).width_mm(&text, style.size_pt);
            let left = self.config.margin_left_mm;
            let text_width = self.config.text_width_mm();
            let x_mm = match align {
                Align::Left => left + CELL_PADDING_MM,
                Align::Center => left + (text_width - width) / 2.0,
                Align::Right => left + text_width - CELL_PADDING_MM - width,
            }
            .max(left);
            // Text sits vertically centred in its cell.
            let baseline_mm = self.y + 0.5 * height + 0.3 * style.size_pt * MM_PER_PT;
            self.placed.push(PlacedLine {
                page: self.page,
                x_mm,
                baseline_mm,
                text,
                style,
            });
        }
        self.y += height;
    }
}

/// Resolves a plan into positioned lines across as many pages as needed.
///
/// Lines wider than the text width wrap onto continuation lines that keep
/// their alignment, so nothing is drawn outside the margins.
pub fn place_lines(plan: &DocumentPlan, config: &PageConfig) -> Vec<PlacedLine> {
    let mut cursor = Cursor::new(config);
    let max_width = config.text_width_mm() - 2.0 * CELL_PADDING_MM;

    for op in plan.ops() {
        match op {
            LayoutOp::Line {
                text,
                style,
                align,
                height,
            } => {
                let metrics = get_metrics(style.style);
                let lines = wrap_lines(&to_pdf_text(text), metrics, style.size_pt, max_width);
                if lines.is_empty() {
                    cursor.place(String::new(), *style, *align, *height);
                }
                for line in lines {
                    cursor.place(line, *style, *align, *height);
                }
            }
            LayoutOp::Paragraph {
                text,
                style,
                line_height,
            } => {
                let metrics = get_metrics(style.style);
                for line in wrap_lines(&to_pdf_text(text), metrics, style.size_pt, max_width) {
                    cursor.place(line, *style, Align::Left, *line_height);
                }
            }
            LayoutOp::Space(height) => cursor.y += height,
        }
    }
    cursor.placed
}

/// Number of pages a plan occupies (at least one).
pub fn page_count(placed: &[PlacedLine]) -> usize {
    placed.iter().map(|l| l.page + 1).max().unwrap_or(1)
}

/// Renders layout plans to PDF bytes.
#[derive(Debug, Clone)]
pub struct PdfBackend {
    config: PageConfig,
}

impl PdfBackend {
    pub fn new(config: PageConfig) -> Self {
        Self { config }
    }
}

impl Default for PdfBackend {
    fn default() -> Self {
        Self::new(default_page_config())
    }
}

fn pdf_error(e: printpdf::Error) -> RenderError {
    RenderError::Pdf(format!("{e:?}"))
}

impl LayoutBackend for PdfBackend {
    fn render(&self, plan: &DocumentPlan) -> Result<Vec<u8>, RenderError> {
        let cfg = &self.config;
        let placed = place_lines(plan, cfg);
        let pages = page_count(&placed);

        let (doc, first_page, first_layer) = PdfDocument::new(
            plan.title.as_str(),
            Mm(cfg.page_width_mm),
            Mm(cfg.page_height_mm),
            LAYER_NAME,
        );
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(pdf_error)?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_error)?;

        let mut layers: Vec<PdfLayerReference> =
            vec![doc.get_page(first_page).get_layer(first_layer)];
        while layers.len() < pages {
            let (page, layer) = doc.add_page(
                Mm(cfg.page_width_mm),
                Mm(cfg.page_height_mm),
                LAYER_NAME,
            );
            layers.push(doc.get_page(page).get_layer(layer));
        }

        for line in &placed {
            let font: &IndirectFontRef = match line.style.style {
                FontStyle::Regular => &regular,
                FontStyle::Bold => &bold,
            };
            layers[line.page].use_text(
                line.text.as_str(),
                line.style.size_pt,
                Mm(line.x_mm),
                Mm(cfg.page_height_mm - line.baseline_mm),
                font,
            );
        }

        debug!(
            title = %plan.title,
            pages,
            lines = placed.len(),
            "PDF layout complete"
        );

        doc.save_to_bytes().map_err(pdf_error)
    }
}
