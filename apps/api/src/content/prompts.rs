// Prompt templates for the two generative features.
// Shared fragments live in llm_client::prompts.

use crate::llm_client::prompts::PLAIN_TEXT_INSTRUCTION;
use crate::models::resume::ResumeRecord;

/// Summary enrichment prompt. Replace `{background}` and `{plain_text}` before sending.
pub const SUMMARY_PROMPT_TEMPLATE: &str = "\
Create a professional summary for a resume based on this information: {background}
Make it concise (2-3 sentences), professional, and impactful.
Focus on key strengths and career objectives.
{plain_text}";

/// Cover letter body prompt. Replace `{job_description}`, `{candidate_json}` and `{plain_text}`.
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = "\
Create a professional cover letter based on the following:

Job Description: {job_description}

Candidate Information:
{candidate_json}

Requirements:
- Address the hiring manager appropriately
- Highlight relevant skills and experiences
- Show enthusiasm for the role
- Keep it concise (1 page)
- Write only the body paragraphs, separated by blank lines. The sender block, date, \
recipient block, greeting and sign-off are added separately.
{plain_text}";

pub fn build_summary_prompt(background: &str) -> String {
    SUMMARY_PROMPT_TEMPLATE
        .replace("{background}", background.trim())
        .replace("{plain_text}", PLAIN_TEXT_INSTRUCTION)
}

/// Embeds the whole record as pretty JSON alongside the job description.
pub fn build_cover_letter_prompt(
    record: &ResumeRecord,
    job_description: &str,
) -> Result<String, serde_json::Error> {
    let candidate_json = serde_json::to_string_pretty(record)?;
    Ok(COVER_LETTER_PROMPT_TEMPLATE
        .replace("{job_description}", job_description.trim())
        .replace("{candidate_json}", &candidate_json)
        .replace("{plain_text}", PLAIN_TEXT_INSTRUCTION))
}
