pub mod artifacts;
pub mod drafts;
pub mod resume;
