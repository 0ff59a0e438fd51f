// Document emitters: record (plus body text) in, finished document out.
// PDF emitters build a layout plan and hand it to a LayoutBackend; the
// portfolio goes through an auto-escaping askama template.

pub mod cover_letter;
pub mod portfolio;
pub mod resume;

pub use cover_letter::render_cover_letter;
pub use portfolio::render_portfolio;
pub use resume::render_resume;
