//! Per-step wizard data and the assembled course description
//!
//! Field names serialize in camelCase to match the browser client.
//! Missing fields deserialize to empty values so that partially filled forms
//! can be stored and validated later.

use serde::{de, Deserialize, Deserializer, Serialize};

use super::CourseType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyLevel {
    pub const ALL: [DifficultyLevel; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];
    const NAMES: [&'static str; 3] = ["Beginner", "Intermediate", "Advanced"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

/// Step 1 form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BasicInfo {
    pub title: String,
    pub description: String,
    pub target_audience: String,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "blank_difficulty_as_none"
    )]
    pub difficulty_level: Option<DifficultyLevel>,
    /// Free-text QAQF level, accepted in place of a difficulty level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qaqf_level: Option<String>,
}

/// An unselected difficulty arrives as `""` or `null`
fn blank_difficulty_as_none<'de, D>(deserializer: D) -> Result<Option<DifficultyLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(name) => DifficultyLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == name)
            .map(Some)
            .ok_or_else(|| de::Error::unknown_variant(name, &DifficultyLevel::NAMES)),
    }
}

impl BasicInfo {
    /// Level label sent to the generator: difficulty first, then QAQF level
    pub fn level_label(&self) -> Option<&str> {
        self.difficulty_level
            .map(DifficultyLevel::as_str)
            .or_else(|| self.qaqf_level.as_deref().filter(|l| !l.is_empty()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningObjective {
    pub id: String,
    pub text: String,
}

/// Reference material the objectives were drafted from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SourceMaterial {
    pub pdf_ids: Vec<i64>,
    pub pdf_names: Vec<String>,
    pub pdf_title: Option<String>,
    pub pdf_file_name: Option<String>,
    pub pdf_content: Option<String>,
    pub collection_id: Option<i64>,
    pub collection_name: Option<String>,
}

/// Step 2 form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LearningObjectives {
    pub objectives: Vec<LearningObjective>,
    /// e.g. "8 weeks", "1-5 days", "1-8 sessions"
    pub duration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_material: Option<SourceMaterial>,
}

impl LearningObjectives {
    /// Objective texts, one per line
    pub fn objectives_text(&self) -> String {
        self.objectives
            .iter()
            .map(|o| o.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Step 3 form; every field optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecializedContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Complete wizard input consumed by the generation trigger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseData {
    pub course_type: CourseType,
    pub basic_info: BasicInfo,
    pub learning_objectives: LearningObjectives,
    pub specialized_content: SpecializedContent,
}
