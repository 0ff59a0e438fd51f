//! Cover-letter body text.
//!
//! Two strategies produce the body: the canned template below (no external
//! service, fully deterministic) and the generative prompt in `prompts.rs`.
//! The caller picks one; neither falls back to the other.

use serde::{Deserialize, Serialize};

use crate::models::resume::{present, ProjectEntry, ResumeRecord};

/// Industry phrases searched for in the job description, in priority order.
pub const INDUSTRY_KEYWORDS: &[&str] = &[
    "software development",
    "web development",
    "data science",
    "machine learning",
    "cloud computing",
];
const DEFAULT_INDUSTRY: &str = "technology";

/// Skill keywords matched against the job description, reported in this order.
pub const SKILL_KEYWORDS: &[&str] = &["python", "java", "javascript", "react", "node", "sql", "aws"];
const MAX_MATCHED_SKILLS: usize = 3;
const DEFAULT_SKILL_FOCUS: &str = "software development";

const MAX_PROJECTS_NAMED: usize = 2;
const NO_PROJECTS_PHRASE: &str = "various technical challenges";

pub const CLOSING_REMARK: &str =
    "I look forward to the possibility of discussing how my qualifications can benefit your organization.";

/// How the body of a cover letter is produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverLetterMode {
    #[default]
    Template,
    Generative,
}

/// The body of a cover letter as a list of paragraphs, salutation and sign-off excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverLetterBody {
    pub paragraphs: Vec<String>,
}

impl CoverLetterBody {
    /// Splits free text on blank lines into paragraphs.
    pub fn from_text(text: &str) -> Self {
        let mut paragraphs = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        for line in text.lines() {
            if line.trim().is_empty() {
                if !current.is_empty() {
                    paragraphs.push(current.join("\n"));
                    current.clear();
                }
            } else {
                current.push(line.trim_end());
            }
        }
        if !current.is_empty() {
            paragraphs.push(current.join("\n"));
        }
        Self { paragraphs }
    }
}

/// First industry phrase contained in the job description, or `"technology"`.
pub fn detect_industry(job_description: &str) -> &'static str {
    let jd = job_description.to_lowercase();
    INDUSTRY_KEYWORDS
        .iter()
        .copied()
        .find(|industry| jd.contains(industry))
        .unwrap_or(DEFAULT_INDUSTRY)
}

/// Up to three skill keywords found in the job description, vocabulary order.
///
/// Plain substring matching: "javascript" also matches "java".
pub fn matched_skills(job_description: &str) -> Vec<&'static str> {
    let jd = job_description.to_lowercase();
    SKILL_KEYWORDS
        .iter()
        .copied()
        .filter(|skill| jd.contains(skill))
        .take(MAX_MATCHED_SKILLS)
        .collect()
}

fn skill_focus(job_description: &str) -> String {
    let skills = matched_skills(job_description);
    if skills.is_empty() {
        DEFAULT_SKILL_FOCUS.to_string()
    } else {
        skills.join(", ")
    }
}

/// Names of the first two projects, comma-joined.
pub fn project_summary(projects: &[ProjectEntry]) -> String {
    let names: Vec<&str> = projects
        .iter()
        .take(MAX_PROJECTS_NAMED)
        .filter_map(|p| present(&p.name))
        .collect();
    if names.is_empty() {
        NO_PROJECTS_PHRASE.to_string()
    } else {
        names.join(", ")
    }
}

/// Builds the template-mode body: three paragraphs followed by the closing remark.
pub fn template_body(record: &ResumeRecord, job_description: &str) -> CoverLetterBody {
    let programming = present(&record.skills_programming).unwrap_or("relevant technologies");
    let frameworks = present(&record.skills_frameworks).unwrap_or("relevant frameworks");

    let opening = format!(
        "I am writing to express my interest in the position as advertised. \
         With my background in {programming} and experience in {industry}, \
         I believe I would be a valuable asset to your team.",
        industry = detect_industry(job_description),
    );
    let middle = format!(
        "My technical skills include {programming} and experience with {frameworks}. \
         I have successfully completed projects involving {projects} which have prepared me \
         well for this role.",
        projects = project_summary(&record.projects),
    );
    let motivation = format!(
        "I am particularly drawn to this opportunity because it aligns with my professional \
         goals and allows me to leverage my skills in {focus}. I am confident that my experience \
         and enthusiasm make me a strong candidate for this position.",
        focus = skill_focus(job_description),
    );

    CoverLetterBody {
        paragraphs: vec![opening, middle, motivation, CLOSING_REMARK.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> ResumeRecord {
        ResumeRecord {
            full_name: "Jane Doe".to_string(),
            skills_programming: "Python, SQL".to_string(),
            ..Default::default()
        }
    }

    fn project(name: &str) -> ProjectEntry {
        ProjectEntry {
            name: name.to_string(),
            description: "d".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_data_science_python_scenario() {
        let jd = "We are hiring for our Data Science team. Strong Python required.";
        let body = template_body(&jane(), jd);
        assert!(body.paragraphs[0].contains("data science"));
        assert!(body.paragraphs[0].contains("Python, SQL"));
        assert!(body.paragraphs[2].contains("python"));
    }

    #[test]
    fn test_detect_industry_first_in_vocabulary_order() {
        assert_eq!(
            detect_industry("Machine Learning and Web Development role"),
            "web development"
        );
        assert_eq!(detect_industry("Accounting clerk"), "technology");
    }

    #[test]
    fn test_matched_skills_caps_at_three_in_vocabulary_order() {
        let jd = "AWS, SQL, Node, React and JavaScript";
        // "javascript" contains "java", so java matches first.
        assert_eq!(matched_skills(jd), vec!["java", "javascript", "react"]);
    }

    #[test]
    fn test_skill_focus_falls_back() {
        let body = template_body(&jane(), "Looking for a great communicator");
        assert!(body.paragraphs[2].contains("skills in software development"));
        assert!(body.paragraphs[0].contains("experience in technology"));
    }

    #[test]
    fn test_project_summary_names_at_most_two() {
        let projects = vec![project("Alpha"), project("Beta"), project("Gamma")];
        assert_eq!(project_summary(&projects), "Alpha, Beta");
        assert_eq!(project_summary(&[]), "various technical challenges");
    }

    #[test]
    fn test_empty_skill_fields_use_generic_phrases() {
        let record = ResumeRecord {
            full_name: "Sam".to_string(),
            ..Default::default()
        };
        let body = template_body(&record, "python");
        assert!(body.paragraphs[0].contains("background in relevant technologies"));
        assert!(body.paragraphs[1].contains("experience with relevant frameworks"));
    }

    #[test]
    fn test_template_body_is_deterministic() {
        let jd = "Cloud computing role with AWS and Python";
        let mut record = jane();
        record.projects = vec![project("Folio")];
        assert_eq!(template_body(&record, jd), template_body(&record, jd));
    }

    #[test]
    fn test_template_body_ends_with_closing_remark() {
        let body = template_body(&jane(), "");
        assert_eq!(body.paragraphs.len(), 4);
        assert_eq!(body.paragraphs.last().unwrap(), CLOSING_REMARK);
    }

    #[test]
    fn test_body_from_text_splits_on_blank_lines() {
        let body = CoverLetterBody::from_text("First para\nstill first.\n\n\nSecond para.\n");
        assert_eq!(
            body.paragraphs,
            vec!["First para\nstill first.".to_string(), "Second para.".to_string()]
        );
        assert!(CoverLetterBody::from_text("  \n\n").paragraphs.is_empty());
    }

    #[test]
    fn test_mode_deserializes_snake_case() {
        let mode: CoverLetterMode = serde_json::from_str(r#""generative""#).unwrap();
        assert_eq!(mode, CoverLetterMode::Generative);
        assert_eq!(CoverLetterMode::default(), CoverLetterMode::Template);
    }
}
