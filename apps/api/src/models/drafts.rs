//! Entry drafts as submitted by the form, and their validation into record entries.
//!
//! A draft that is missing required fields is rejected as a whole; the record
//! is never touched in that case.

use serde::Deserialize;
use thiserror::Error;

use crate::models::resume::{present, EducationEntry, ExperienceEntry, ProjectEntry};

/// Literal stored as the end date of a position marked as current.
pub const PRESENT: &str = "Present";

#[derive(Debug, Clone, PartialEq, Error)]
#[error("Please fill in the required {entry} fields: {}", .missing.join(", "))]
pub struct ValidationError {
    pub entry: &'static str,
    pub missing: Vec<&'static str>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EducationDraft {
    pub institution: String,
    pub degree: String,
    pub location: String,
    pub gpa: String,
    pub start_date: String,
    pub end_date: String,
    pub achievements: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExperienceDraft {
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    /// Resolved into `end_date = "Present"` on validation; never stored itself.
    pub currently_employed: bool,
    pub responsibilities: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub technologies: String,
    pub link: String,
}

fn require(
    entry: &'static str,
    fields: &[(&'static str, &str)],
) -> Result<(), ValidationError> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| present(value).is_none())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { entry, missing })
    }
}

impl EducationDraft {
    pub fn validate(self) -> Result<EducationEntry, ValidationError> {
        require(
            "education",
            &[("institution", self.institution.as_str()), ("degree", self.degree.as_str())],
        )?;
        Ok(EducationEntry {
            institution: self.institution,
            degree: self.degree,
            location: self.location,
            gpa: self.gpa,
            start_date: self.start_date,
            end_date: self.end_date,
            achievements: self.achievements,
        })
    }
}

impl ExperienceDraft {
    pub fn validate(self) -> Result<ExperienceEntry, ValidationError> {
        require(
            "experience",
            &[
                ("company", self.company.as_str()),
                ("position", self.position.as_str()),
                ("start_date", self.start_date.as_str()),
                ("responsibilities", self.responsibilities.as_str()),
            ],
        )?;
        let end_date = if self.currently_employed {
            PRESENT.to_string()
        } else {
            self.end_date
        };
        Ok(ExperienceEntry {
            company: self.company,
            position: self.position,
            location: self.location,
            start_date: self.start_date,
            end_date,
            responsibilities: self.responsibilities,
        })
    }
}

impl ProjectDraft {
    pub fn validate(self) -> Result<ProjectEntry, ValidationError> {
        require(
            "project",
            &[("name", self.name.as_str()), ("description", self.description.as_str())],
        )?;
        Ok(ProjectEntry {
            name: self.name,
            description: self.description,
            technologies: self.technologies,
            link: self.link,
        })
    }
}
