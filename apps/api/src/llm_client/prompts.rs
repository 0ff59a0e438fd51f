// Shared prompt fragments. Feature prompts live in content::prompts.

/// Appended to every generation prompt: the response is used verbatim as document text.
pub const PLAIN_TEXT_INSTRUCTION: &str =
    "Return only the requested text without any additional explanations or markdown formatting.";
