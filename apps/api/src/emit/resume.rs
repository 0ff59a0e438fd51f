//! Resume PDF: a flowing single-column layout built from the record's sections.
//!
//! Sections appear only when they have data. Page breaks are the backend's job.

use crate::content::sections::{
    contact_line, education_section, experience_section, projects_section, skills_line,
    skills_section, summary_section, SEPARATOR,
};
use crate::layout::{Align, DocumentPlan, LayoutBackend, RenderError, TextStyle};
use crate::models::resume::ResumeRecord;

const NAME: TextStyle = TextStyle::bold(16.0);
const HEADING: TextStyle = TextStyle::bold(12.0);
const ENTRY_TITLE: TextStyle = TextStyle::bold(10.0);
const BODY: TextStyle = TextStyle::regular(10.0);

const NAME_HEIGHT: f32 = 10.0;
const CONTACT_HEIGHT: f32 = 6.0;
const HEADING_HEIGHT: f32 = 8.0;
const LINE_HEIGHT: f32 = 5.0;
const ENTRY_GAP: f32 = 3.0;
const SECTION_GAP: f32 = 5.0;

pub const SUMMARY_HEADING: &str = "PROFESSIONAL SUMMARY";
pub const EDUCATION_HEADING: &str = "EDUCATION";
pub const SKILLS_HEADING: &str = "TECHNICAL SKILLS";
pub const EXPERIENCE_HEADING: &str = "PROFESSIONAL EXPERIENCE";
pub const PROJECTS_HEADING: &str = "PROJECTS";

fn heading(plan: &mut DocumentPlan, text: &str) {
    plan.line(text, HEADING, Align::Left, HEADING_HEIGHT);
}

fn body_line(plan: &mut DocumentPlan, text: String) {
    plan.line(text, BODY, Align::Left, LINE_HEIGHT);
}

/// Joins the present parts with the standard separator; `None` when nothing is present.
fn joined(parts: &[Option<&str>]) -> Option<String> {
    let present: Vec<&str> = parts.iter().flatten().copied().collect();
    if present.is_empty() {
        None
    } else {
        Some(present.join(SEPARATOR))
    }
}

/// Builds the resume layout plan. Pure: the same record always yields the same plan.
pub fn resume_plan(record: &ResumeRecord) -> DocumentPlan {
    let name = record.full_name.trim();
    let mut plan = DocumentPlan::new(format!("{name} - Resume"));

    plan.line(name, NAME, Align::Center, NAME_HEIGHT)
        .space(SECTION_GAP);
    if let Some(contact) = contact_line(record) {
        plan.line(contact, BODY, Align::Center, CONTACT_HEIGHT)
            .space(10.0);
    }

    if let Some(summary) = summary_section(record) {
        heading(&mut plan, SUMMARY_HEADING);
        plan.paragraph(summary, BODY, LINE_HEIGHT).space(SECTION_GAP);
    }

    let education = education_section(record);
    if !education.is_empty() {
        heading(&mut plan, EDUCATION_HEADING);
        for edu in education {
            plan.line(edu.degree.as_str(), ENTRY_TITLE, Align::Left, LINE_HEIGHT);
            if let Some(line) = joined(&[Some(edu.institution.as_str()), edu.location.as_deref()]) {
                body_line(&mut plan, line);
            }
            let gpa = edu.gpa.map(|gpa| format!("GPA: {gpa}"));
            if let Some(line) = joined(&[edu.dates.as_deref(), gpa.as_deref()]) {
                body_line(&mut plan, line);
            }
            if let Some(achievements) = edu.achievements {
                plan.paragraph(format!("Achievements: {achievements}"), BODY, LINE_HEIGHT);
            }
            plan.space(ENTRY_GAP);
        }
        plan.space(SECTION_GAP);
    }

    if let Some(skills) = skills_line(&skills_section(record)) {
        heading(&mut plan, SKILLS_HEADING);
        plan.paragraph(skills, BODY, LINE_HEIGHT).space(SECTION_GAP);
    }

    let experience = experience_section(record);
    if !experience.is_empty() {
        heading(&mut plan, EXPERIENCE_HEADING);
        for exp in experience {
            plan.line(exp.position.as_str(), ENTRY_TITLE, Align::Left, LINE_HEIGHT);
            if let Some(line) = joined(&[Some(exp.company.as_str()), exp.location.as_deref()]) {
                body_line(&mut plan, line);
            }
            if let Some(dates) = exp.dates {
                body_line(&mut plan, dates);
            }
            if let Some(responsibilities) = exp.responsibilities {
                plan.paragraph(responsibilities, BODY, LINE_HEIGHT);
            }
            plan.space(ENTRY_GAP);
        }
        plan.space(SECTION_GAP);
    }

    let projects = projects_section(record);
    if !projects.is_empty() {
        heading(&mut plan, PROJECTS_HEADING);
        for project in projects {
            plan.line(project.name.as_str(), ENTRY_TITLE, Align::Left, LINE_HEIGHT);
            if let Some(description) = project.description {
                plan.paragraph(description, BODY, LINE_HEIGHT);
            }
            if let Some(technologies) = project.technologies {
                plan.paragraph(format!("Technologies: {technologies}"), BODY, LINE_HEIGHT);
            }
            plan.space(ENTRY_GAP);
        }
    }

    plan
}

/// Lays out the resume and returns the finished document bytes.
pub fn render_resume(
    record: &ResumeRecord,
    backend: &dyn LayoutBackend,
) -> Result<Vec<u8>, RenderError> {
    backend.render(&resume_plan(record))
}
