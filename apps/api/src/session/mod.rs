// Session shell: one in-memory record per session, edited over HTTP.

pub mod handlers;
pub mod store;
