use serde::{Deserialize, Serialize};

/// Returns the trimmed value when it carries any text.
///
/// Whitespace-only form input counts as empty everywhere in the pipeline.
pub fn present(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// The single record a session collects: contact details, skills and the
/// three ordered entry lists.
///
/// Every field defaults to empty, so partially filled JSON deserializes cleanly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeRecord {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
    pub summary: String,
    pub skills_programming: String,
    pub skills_frameworks: String,
    pub skills_tools: String,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub location: String,
    pub gpa: String,
    pub start_date: String,
    pub end_date: String,
    pub achievements: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    /// Free text, or `"Present"` when the entry was added as a current position.
    pub end_date: String,
    pub responsibilities: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    pub technologies: String,
    pub link: String,
}

/// Partial update of the record's scalar fields. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub portfolio: Option<String>,
    pub summary: Option<String>,
    pub skills_programming: Option<String>,
    pub skills_frameworks: Option<String>,
    pub skills_tools: Option<String>,
}

impl ResumeRecord {
    pub fn apply_profile(&mut self, update: ProfileUpdate) {
        let fields = [
            (update.full_name, &mut self.full_name),
            (update.email, &mut self.email),
            (update.phone, &mut self.phone),
            (update.location, &mut self.location),
            (update.linkedin, &mut self.linkedin),
            (update.github, &mut self.github),
            (update.portfolio, &mut self.portfolio),
            (update.summary, &mut self.summary),
            (update.skills_programming, &mut self.skills_programming),
            (update.skills_frameworks, &mut self.skills_frameworks),
            (update.skills_tools, &mut self.skills_tools),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }

    /// Name used in download file names: spaces replaced by underscores.
    pub fn file_stem(&self) -> String {
        self.full_name.trim().replace(' ', "_")
    }
}

/// Removes the entry at `index`, keeping every other entry in its original order.
/// Returns `None` and leaves the list untouched when the index is out of range.
pub fn remove_at<T>(entries: &mut Vec<T>, index: usize) -> Option<T> {
    if index < entries.len() {
        Some(entries.remove(index))
    } else {
        None
    }
}
