// Content rendering: record → format-independent sections, letter bodies and prompts.
// No I/O happens in this module.

pub mod cover_letter;
pub mod prompts;
pub mod sections;
