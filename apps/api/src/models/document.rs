//! Résumé document model — the structure the editor hands to the layout pipeline.
//!
//! Serialized in camelCase so documents written by the browser editor
//! (`templateId`, `personalInfo`, `startDate`, ...) round-trip unchanged.
//! Every field defaults when absent: missing data renders as an absent section.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ────────────────────────────────────────────────────────────────────────────
// Template selection
// ────────────────────────────────────────────────────────────────────────────

/// The three visual variants. All share one block-sequence contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    /// ATS Minimal — classic serif, centered header.
    #[default]
    Minimal,
    /// ATS Modern — sans-serif with accent headings.
    Modern,
    /// Professional — structured layout with a timeline rule.
    Professional,
}

impl TemplateId {
    #[cfg(test)]
    pub const ALL: [TemplateId; 3] = [
        TemplateId::Minimal,
        TemplateId::Modern,
        TemplateId::Professional,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Minimal => "minimal",
            TemplateId::Modern => "modern",
            TemplateId::Professional => "professional",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Document
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDocument {
    pub id: Uuid,
    /// Internal display name of the CV (not rendered on the page).
    pub title: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub last_modified: DateTime<Utc>,
    pub template_id: TemplateId,
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
    pub skills: Vec<String>,
    pub languages: Vec<String>,
    pub certifications: Vec<String>,
}

impl Default for ResumeDocument {
    fn default() -> Self {
        Self {
            id: Uuid::nil(),
            title: "Untitled CV".to_string(),
            last_modified: Utc::now(),
            template_id: TemplateId::default(),
            personal_info: PersonalInfo::default(),
            summary: String::new(),
            experience: Vec::new(),
            education: Vec::new(),
            projects: Vec::new(),
            skills: Vec::new(),
            languages: Vec::new(),
            certifications: Vec::new(),
        }
    }
}

impl ResumeDocument {
    /// A blank document with a fresh id, as created from the dashboard.
    pub fn new_blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: "My New CV".to_string(),
            ..Self::default()
        }
    }

    /// Copy of this document under a new id, titled `"{title} (Copy)"`.
    pub fn duplicate(&self) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: format!("{} (Copy)", self.title),
            last_modified: Utc::now(),
            ..self.clone()
        }
    }

    /// True when the skills/languages/certifications trailer has anything to show.
    pub fn has_extras(&self) -> bool {
        !self.skills.is_empty() || !self.languages.is_empty() || !self.certifications.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub job_title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub links: Vec<SocialLink>,
    /// Image payload as a `data:` URI. Size is capped by the storage layer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl PersonalInfo {
    /// The photo URI, treating an empty string the same as no photo.
    pub fn photo_uri(&self) -> Option<&str> {
        self.photo.as_deref().filter(|p| !p.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    pub id: String,
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    /// Ongoing position — the end date is never rendered.
    pub current: bool,
    /// Plain text, one bullet per line.
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub id: String,
    pub school: String,
    pub degree: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub link: String,
    pub description: String,
}
