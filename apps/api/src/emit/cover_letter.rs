//! Cover-letter PDF: sender block, date, recipient block, salutation, body, sign-off.

use chrono::NaiveDate;

use crate::clock::letter_date;
use crate::content::cover_letter::CoverLetterBody;
use crate::layout::{Align, DocumentPlan, LayoutBackend, RenderError, TextStyle};
use crate::models::resume::{present, ResumeRecord};

const TEXT: TextStyle = TextStyle::regular(10.0);
const LINE_HEIGHT: f32 = 5.0;
const BLOCK_GAP: f32 = 10.0;
const HEADER_GAP: f32 = 20.0;

pub const RECIPIENT_LINES: [&str; 3] = ["Hiring Manager", "Company Name", "Company Address"];
pub const SALUTATION: &str = "Dear Hiring Manager,";
pub const SIGN_OFF: &str = "Sincerely,";

/// Builds the cover-letter layout plan for an already-produced body.
pub fn cover_letter_plan(
    record: &ResumeRecord,
    body: &CoverLetterBody,
    date: NaiveDate,
) -> DocumentPlan {
    let name = record.full_name.trim();
    let mut plan = DocumentPlan::new(format!("{name} - Cover Letter"));

    let sender = [
        record.full_name.as_str(),
        record.email.as_str(),
        record.phone.as_str(),
        record.location.as_str(),
    ];
    for value in sender.into_iter().filter_map(present) {
        plan.line(value, TEXT, Align::Right, LINE_HEIGHT);
    }

    plan.space(HEADER_GAP)
        .line(letter_date(date), TEXT, Align::Left, LINE_HEIGHT)
        .space(BLOCK_GAP);

    for line in RECIPIENT_LINES {
        plan.line(line, TEXT, Align::Left, LINE_HEIGHT);
    }
    plan.space(BLOCK_GAP)
        .line(SALUTATION, TEXT, Align::Left, LINE_HEIGHT)
        .space(BLOCK_GAP);

    for paragraph in &body.paragraphs {
        plan.paragraph(paragraph.as_str(), TEXT, LINE_HEIGHT)
            .space(LINE_HEIGHT);
    }

    plan.line(SIGN_OFF, TEXT, Align::Left, LINE_HEIGHT)
        .space(BLOCK_GAP)
        .line(name, TEXT, Align::Left, LINE_HEIGHT);
    plan
}

pub fn render_cover_letter(
    record: &ResumeRecord,
    body: &CoverLetterBody,
    date: NaiveDate,
    backend: &dyn LayoutBackend,
) -> Result<Vec<u8>, RenderError> {
    backend.render(&cover_letter_plan(record, body, date))
}
