//! Format-independent resume sections.
//!
//! Everything here is a pure function of the record. Optional sub-fields are
//! resolved to `Option` once, so emitters never re-check for blank strings.
//! Empty entry lists map to empty block lists; whether that becomes a
//! placeholder or an omitted section is the emitter's decision.

use serde::Serialize;

use crate::models::resume::{present, ResumeRecord};

/// Separator used for contact lines, skill lines and "institution | location" pairs.
pub const SEPARATOR: &str = " | ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkillCategory {
    Programming,
    Frameworks,
    Tools,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 3] = [
        SkillCategory::Programming,
        SkillCategory::Frameworks,
        SkillCategory::Tools,
    ];

    /// Compact label used on the printed resume.
    pub fn short_label(self) -> &'static str {
        match self {
            SkillCategory::Programming => "Programming",
            SkillCategory::Frameworks => "Frameworks",
            SkillCategory::Tools => "Tools",
        }
    }

    /// Descriptive label used on the portfolio page.
    pub fn long_label(self) -> &'static str {
        match self {
            SkillCategory::Programming => "Programming Languages",
            SkillCategory::Frameworks => "Frameworks",
            SkillCategory::Tools => "Tools & Technologies",
        }
    }

    fn value(self, record: &ResumeRecord) -> &str {
        match self {
            SkillCategory::Programming => record.skills_programming.as_str(),
            SkillCategory::Frameworks => record.skills_frameworks.as_str(),
            SkillCategory::Tools => record.skills_tools.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillLine {
    pub category: SkillCategory,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationBlock {
    pub degree: String,
    pub institution: String,
    pub location: Option<String>,
    pub dates: Option<String>,
    pub gpa: Option<String>,
    pub achievements: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceBlock {
    pub position: String,
    pub company: String,
    pub location: Option<String>,
    pub dates: Option<String>,
    pub responsibilities: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectBlock {
    pub name: String,
    pub description: Option<String>,
    pub technologies: Option<String>,
    pub link: Option<String>,
}

fn owned(value: &str) -> Option<String> {
    present(value).map(str::to_string)
}

/// `"start - end"`, or whichever side is present, or nothing.
pub fn date_range(start: &str, end: &str) -> Option<String> {
    match (present(start), present(end)) {
        (Some(s), Some(e)) => Some(format!("{s} - {e}")),
        (Some(one), None) | (None, Some(one)) => Some(one.to_string()),
        (None, None) => None,
    }
}

pub fn summary_section(record: &ResumeRecord) -> Option<String> {
    owned(&record.summary)
}

/// Non-empty skill categories, always in Programming, Frameworks, Tools order.
pub fn skills_section(record: &ResumeRecord) -> Vec<SkillLine> {
    SkillCategory::ALL
        .iter()
        .filter_map(|&category| {
            owned(category.value(record)).map(|value| SkillLine { category, value })
        })
        .collect()
}

pub fn education_section(record: &ResumeRecord) -> Vec<EducationBlock> {
    record
        .education
        .iter()
        .map(|edu| EducationBlock {
            degree: edu.degree.trim().to_string(),
            institution: edu.institution.trim().to_string(),
            location: owned(&edu.location),
            dates: date_range(&edu.start_date, &edu.end_date),
            gpa: owned(&edu.gpa),
            achievements: owned(&edu.achievements),
        })
        .collect()
}

pub fn experience_section(record: &ResumeRecord) -> Vec<ExperienceBlock> {
    record
        .experience
        .iter()
        .map(|exp| ExperienceBlock {
            position: exp.position.trim().to_string(),
            company: exp.company.trim().to_string(),
            location: owned(&exp.location),
            dates: date_range(&exp.start_date, &exp.end_date),
            responsibilities: owned(&exp.responsibilities),
        })
        .collect()
}

pub fn projects_section(record: &ResumeRecord) -> Vec<ProjectBlock> {
    record
        .projects
        .iter()
        .map(|project| ProjectBlock {
            name: project.name.trim().to_string(),
            description: owned(&project.description),
            technologies: owned(&project.technologies),
            link: owned(&project.link),
        })
        .collect()
}

/// Present contact values in display order. Profile URLs contribute a label
/// only ("LinkedIn", "GitHub", "Portfolio"), never the URL itself.
pub fn contact_items(record: &ResumeRecord) -> Vec<String> {
    let mut items: Vec<String> = [&record.email, &record.phone, &record.location]
        .into_iter()
        .filter_map(|value| owned(value))
        .collect();

    let labels = [
        (&record.linkedin, "LinkedIn"),
        (&record.github, "GitHub"),
        (&record.portfolio, "Portfolio"),
    ];
    for (url, label) in labels {
        if present(url).is_some() {
            items.push(label.to_string());
        }
    }
    items
}

pub fn contact_line(record: &ResumeRecord) -> Option<String> {
    let items = contact_items(record);
    if items.is_empty() {
        None
    } else {
        Some(items.join(SEPARATOR))
    }
}

/// `"Programming: … | Frameworks: … | Tools: …"` over the non-empty categories.
pub fn skills_line(skills: &[SkillLine]) -> Option<String> {
    if skills.is_empty() {
        return None;
    }
    Some(
        skills
            .iter()
            .map(|s| format!("{}: {}", s.category.short_label(), s.value))
            .collect::<Vec<_>>()
            .join(SEPARATOR),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{EducationEntry, ExperienceEntry, ProjectEntry};

    fn record() -> ResumeRecord {
        ResumeRecord {
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "555-0100".to_string(),
            github: "https://github.com/jane".to_string(),
            skills_programming: "Python, SQL".to_string(),
            skills_tools: "Docker".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_contact_line_uses_labels_for_profile_urls() {
        let line = contact_line(&record()).unwrap();
        assert_eq!(line, "jane@example.com | 555-0100 | GitHub");
        assert!(!line.contains("https://"));
    }

    #[test]
    fn test_contact_line_absent_when_nothing_present() {
        let empty = ResumeRecord {
            full_name: "Jane".to_string(),
            ..Default::default()
        };
        assert_eq!(contact_line(&empty), None);
    }

    #[test]
    fn test_contact_line_full_order() {
        let full = ResumeRecord {
            email: "e".to_string(),
            phone: "p".to_string(),
            location: "l".to_string(),
            linkedin: "x".to_string(),
            github: "y".to_string(),
            portfolio: "z".to_string(),
            ..Default::default()
        };
        assert_eq!(
            contact_line(&full).unwrap(),
            "e | p | l | LinkedIn | GitHub | Portfolio"
        );
    }

    #[test]
    fn test_skills_section_skips_empty_categories_in_fixed_order() {
        let skills = skills_section(&record());
        let categories: Vec<SkillCategory> = skills.iter().map(|s| s.category).collect();
        assert_eq!(
            categories,
            vec![SkillCategory::Programming, SkillCategory::Tools]
        );
        assert_eq!(
            skills_line(&skills).unwrap(),
            "Programming: Python, SQL | Tools: Docker"
        );
    }

    #[test]
    fn test_skills_section_empty_when_all_blank() {
        let blank = ResumeRecord {
            skills_frameworks: "   ".to_string(),
            ..Default::default()
        };
        assert!(skills_section(&blank).is_empty());
        assert_eq!(skills_line(&[]), None);
    }

    #[test]
    fn test_summary_section_present_iff_non_empty() {
        let mut r = record();
        assert_eq!(summary_section(&r), None);
        r.summary = "Backend engineer.".to_string();
        assert_eq!(summary_section(&r).as_deref(), Some("Backend engineer."));
    }

    #[test]
    fn test_date_range_variants() {
        assert_eq!(date_range("01/2020", "05/2024").as_deref(), Some("01/2020 - 05/2024"));
        assert_eq!(date_range("01/2020", "").as_deref(), Some("01/2020"));
        assert_eq!(date_range("", "Present").as_deref(), Some("Present"));
        assert_eq!(date_range(" ", ""), None);
    }

    #[test]
    fn test_blocks_preserve_entry_order_and_resolve_optionals() {
        let mut r = record();
        r.education = vec![
            EducationEntry {
                institution: "MIT".to_string(),
                degree: "BSc".to_string(),
                gpa: "3.9".to_string(),
                ..Default::default()
            },
            EducationEntry {
                institution: "Stanford".to_string(),
                degree: "MSc".to_string(),
                ..Default::default()
            },
        ];
        r.experience = vec![ExperienceEntry {
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            start_date: "2022".to_string(),
            end_date: "Present".to_string(),
            ..Default::default()
        }];
        r.projects = vec![ProjectEntry {
            name: "Folio".to_string(),
            description: "Resume builder".to_string(),
            ..Default::default()
        }];

        let education = education_section(&r);
        assert_eq!(education[0].degree, "BSc");
        assert_eq!(education[0].gpa.as_deref(), Some("3.9"));
        assert_eq!(education[1].institution, "Stanford");
        assert_eq!(education[1].gpa, None);

        let experience = experience_section(&r);
        assert_eq!(experience[0].dates.as_deref(), Some("2022 - Present"));
        assert_eq!(experience[0].responsibilities, None);

        let projects = projects_section(&r);
        assert_eq!(projects[0].technologies, None);
        assert_eq!(projects[0].description.as_deref(), Some("Resume builder"));
    }

    #[test]
    fn test_empty_lists_yield_empty_blocks() {
        let r = record();
        assert!(education_section(&r).is_empty());
        assert!(experience_section(&r).is_empty());
        assert!(projects_section(&r).is_empty());
    }
}
