// Page layout: font metrics, line wrapping, layout plans and the PDF backend.
// Rendering is CPU-bound; async callers must go through tokio::task::spawn_blocking.

pub mod font_metrics;
pub mod pdf;
pub mod plan;
pub mod wrap;

// Re-export the public API consumed by the emitters and the generation pipeline.
pub use font_metrics::default_page_config;
pub use pdf::PdfBackend;
pub use plan::{Align, DocumentPlan, LayoutBackend, RenderError, TextStyle};
