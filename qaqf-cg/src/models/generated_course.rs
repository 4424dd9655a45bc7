//! Generated course records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CourseType;

/// Course id used when the remote endpoint produced the course
pub const REMOTE_COURSE_ID: &str = "api";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedModule {
    pub id: String,
    pub title: String,
    /// Leading integer is minutes, e.g. "30 minutes"
    pub duration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessments: Option<Vec<String>>,
}

impl GeneratedModule {
    pub(crate) fn new(id: impl Into<String>, title: impl Into<String>, minutes: u32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            duration: format!("{} minutes", minutes),
            description: None,
            content: None,
            activities: None,
            assessments: None,
        }
    }

    pub(crate) fn described(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub(crate) fn with_content(mut self, items: &[&str]) -> Self {
        self.content = Some(to_strings(items));
        self
    }

    pub(crate) fn with_activities(mut self, items: &[&str]) -> Self {
        self.activities = Some(to_strings(items));
        self
    }

    pub(crate) fn with_assessments(mut self, items: &[&str]) -> Self {
        self.assessments = Some(to_strings(items));
        self
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Course produced at the review step; not modified afterwards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedCourse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub course_type: CourseType,
    pub modules: Vec<GeneratedModule>,
    /// "2h 45m", "2h" or "45m"
    pub total_duration: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_weeks: Option<u32>,
}

/// Where a generated course came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Remote endpoint answered with generated content
    Remote,
    /// Remote call failed; local template used
    Fallback,
}

/// Result of a generation attempt; always carries a displayable course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationOutcome {
    pub provenance: Provenance,
    pub course: GeneratedCourse,
}

impl GenerationOutcome {
    pub fn is_remote(&self) -> bool {
        self.provenance == Provenance::Remote
    }
}
