// Document generation: summary enrichment plus the resume, cover-letter and portfolio pipelines.
// All generative calls go through llm_client::GenerativeTextAdapter.

pub mod generator;
pub mod handlers;
