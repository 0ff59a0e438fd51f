//! Portfolio page: one self-contained HTML document with inline CSS.
//!
//! Rendered through an askama template, so every interpolated value is
//! HTML-escaped. URLs become anchors only for web and mail schemes.

use askama::Template;

use crate::content::sections::{
    education_section, experience_section, projects_section, skills_section, summary_section,
    EducationBlock, ExperienceBlock,
};
use crate::layout::RenderError;
use crate::models::resume::{present, ResumeRecord};

pub const NO_SKILLS: &str = "No skills listed.";
pub const NO_PROJECTS: &str = "No projects listed.";
pub const NO_EDUCATION: &str = "No education information provided.";
pub const NO_EXPERIENCE: &str = "No experience information provided.";

const FALLBACK_TITLE: &str = "Professional Portfolio";
const FALLBACK_HEADING: &str = "Your Name";

// ────────────────────────────────────────────────────────────────────────────
// Template data
// ────────────────────────────────────────────────────────────────────────────

struct LinkView {
    label: &'static str,
    value: String,
    href: Option<String>,
}

struct SkillView {
    label: &'static str,
    value: String,
}

struct ProjectView {
    name: String,
    description: Option<String>,
    technologies: Option<String>,
    link: Option<LinkView>,
}

#[derive(Template)]
#[template(path = "portfolio.html")]
struct PortfolioTemplate {
    title: String,
    heading: String,
    email: Option<LinkView>,
    phone: Option<String>,
    location: Option<String>,
    links: Vec<LinkView>,
    summary: Option<String>,
    skills: Vec<SkillView>,
    projects: Vec<ProjectView>,
    education: Vec<EducationBlock>,
    experience: Vec<ExperienceBlock>,
    no_skills: &'static str,
    no_projects: &'static str,
    no_education: &'static str,
    no_experience: &'static str,
}

/// Returns the URL when it uses a scheme safe to put in an `href`.
pub fn safe_href(url: &str) -> Option<String> {
    let url = url.trim();
    let lower = url.to_ascii_lowercase();
    ["http://", "https://", "mailto:"]
        .iter()
        .any(|scheme| lower.starts_with(scheme))
        .then(|| url.to_string())
}

fn link(label: &'static str, value: &str) -> Option<LinkView> {
    present(value).map(|value| LinkView {
        label,
        value: value.to_string(),
        href: safe_href(value),
    })
}

/// Renders the portfolio page for a record.
pub fn render_portfolio(record: &ResumeRecord) -> Result<String, RenderError> {
    let name = present(&record.full_name);

    let links = [
        ("LinkedIn", record.linkedin.as_str()),
        ("GitHub", record.github.as_str()),
        ("Portfolio", record.portfolio.as_str()),
    ]
    .into_iter()
    .filter_map(|(label, value)| link(label, value))
    .collect();

    let email = present(&record.email).map(|email| LinkView {
        label: "Email",
        value: email.to_string(),
        href: Some(format!("mailto:{email}")),
    });

    let template = PortfolioTemplate {
        title: name.unwrap_or(FALLBACK_TITLE).to_string(),
        heading: name.unwrap_or(FALLBACK_HEADING).to_string(),
        email,
        phone: present(&record.phone).map(str::to_string),
        location: present(&record.location).map(str::to_string),
        links,
        summary: summary_section(record),
        skills: skills_section(record)
            .into_iter()
            .map(|s| SkillView {
                label: s.category.long_label(),
                value: s.value,
            })
            .collect(),
        projects: projects_section(record)
            .into_iter()
            .map(|p| ProjectView {
                link: p.link.as_deref().and_then(|url| link("View Project", url)),
                name: p.name,
                description: p.description,
                technologies: p.technologies,
            })
            .collect(),
        education: education_section(record),
        experience: experience_section(record),
        no_skills: NO_SKILLS,
        no_projects: NO_PROJECTS,
        no_education: NO_EDUCATION,
        no_experience: NO_EXPERIENCE,
    };

    template
        .render()
        .map_err(|e| RenderError::Markup(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{EducationEntry, ExperienceEntry, ProjectEntry};

    fn full_record() -> ResumeRecord {
        ResumeRecord {
            full_name: "Jane <Doe> & Co".to_string(),
            email: "jane@example.com".to_string(),
            phone: "+1 555 0100".to_string(),
            location: "Zürich".to_string(),
            linkedin: "https://linkedin.com/in/jane?x=1&y=2".to_string(),
            github: "javascript:alert(1)".to_string(),
            portfolio: "https://jane.dev".to_string(),
            summary: "Builds \"reliable\" systems <fast>.\nSecond line.".to_string(),
            skills_programming: "Rust, C++".to_string(),
            skills_frameworks: "Axum".to_string(),
            skills_tools: "Docker & K8s".to_string(),
            education: vec![EducationEntry {
                institution: "ETH".to_string(),
                degree: "MSc CS".to_string(),
                location: "Zürich".to_string(),
                gpa: "5.5/6".to_string(),
                start_date: "2018".to_string(),
                end_date: "2020".to_string(),
                achievements: "Medal <gold>".to_string(),
            }],
            experience: vec![ExperienceEntry {
                company: "Acme's".to_string(),
                position: "SRE".to_string(),
                location: "Remote".to_string(),
                start_date: "2020".to_string(),
                end_date: "Present".to_string(),
                responsibilities: "Kept p99 < 100ms".to_string(),
            }],
            projects: vec![ProjectEntry {
                name: "Folio".to_string(),
                description: "Resume <builder>".to_string(),
                technologies: "Rust & askama".to_string(),
                link: "https://github.com/jane/folio".to_string(),
            }],
        }
    }

    fn empty_lists() -> ResumeRecord {
        ResumeRecord {
            full_name: "Jane Doe".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_placeholders_for_empty_lists() {
        let html = render_portfolio(&empty_lists()).unwrap();
        assert!(html.contains(NO_SKILLS));
        assert!(html.contains(NO_PROJECTS));
        assert!(html.contains(NO_EDUCATION));
        assert!(html.contains(NO_EXPERIENCE));
    }

    #[test]
    fn test_no_placeholders_when_lists_filled() {
        let html = render_portfolio(&full_record()).unwrap();
        assert!(!html.contains(NO_SKILLS));
        assert!(!html.contains(NO_PROJECTS));
        assert!(!html.contains(NO_EDUCATION));
        assert!(!html.contains(NO_EXPERIENCE));
    }

    #[test]
    fn test_fallback_title_and_heading() {
        let html = render_portfolio(&ResumeRecord::default()).unwrap();
        assert!(html.contains("<title>Professional Portfolio</title>"));
        assert!(html.contains("<h1>Your Name</h1>"));
    }

    #[test]
    fn test_values_are_escaped() {
        let html = render_portfolio(&full_record()).unwrap();
        assert!(!html.contains("<Doe>"));
        assert!(!html.contains("<fast>"));
        assert!(!html.contains("<builder>"));
        assert!(html.contains("&lt;Doe&gt;"));
    }

    #[test]
    fn test_only_safe_schemes_become_links() {
        let html = render_portfolio(&full_record()).unwrap();
        assert!(html.contains("href=\"https://jane.dev\""));
        assert!(html.contains("href=\"mailto:jane@example.com\""));
        assert!(!html.contains("href=\"javascript:"));
        assert_eq!(safe_href("  HTTPS://x.io "), Some("HTTPS://x.io".to_string()));
        assert_eq!(safe_href("ftp://x.io"), None);
        assert_eq!(safe_href("javascript:alert(1)"), None);
    }

    #[test]
    fn test_skill_items_use_long_labels() {
        let html = render_portfolio(&full_record()).unwrap();
        assert!(html.contains("Programming Languages"));
        assert!(html.contains("Tools &amp; Technologies"));
    }

    #[test]
    fn test_no_external_resources() {
        let html = render_portfolio(&full_record()).unwrap();
        assert!(html.contains("<style>"));
        assert!(!html.contains("<link"));
        assert!(!html.contains("<script"));
    }

    #[test]
    fn test_round_trip_recovers_every_field() {
        let record = full_record();
        let html = render_portfolio(&record).unwrap();
        let decoded = html_escape::decode_html_entities(&html).to_string();

        let mut values = vec![
            &record.full_name,
            &record.email,
            &record.phone,
            &record.location,
            &record.linkedin,
            &record.github,
            &record.portfolio,
            &record.skills_programming,
            &record.skills_frameworks,
            &record.skills_tools,
        ];
        for edu in &record.education {
            values.extend([
                &edu.institution,
                &edu.degree,
                &edu.location,
                &edu.gpa,
                &edu.start_date,
                &edu.end_date,
                &edu.achievements,
            ]);
        }
        for exp in &record.experience {
            values.extend([
                &exp.company,
                &exp.position,
                &exp.location,
                &exp.start_date,
                &exp.end_date,
                &exp.responsibilities,
            ]);
        }
        for project in &record.projects {
            values.extend([
                &project.name,
                &project.description,
                &project.technologies,
                &project.link,
            ]);
        }
        for value in values {
            assert!(decoded.contains(value.as_str()), "missing {value:?}");
        }
        for line in record.summary.lines() {
            assert!(decoded.contains(line), "missing summary line {line:?}");
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let record = full_record();
        assert_eq!(
            render_portfolio(&record).unwrap(),
            render_portfolio(&record).unwrap()
        );
    }
}
