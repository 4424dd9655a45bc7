//! QAQF framework reference data and compliance scoring
//!
//! Nine levels grouped into three categories, ten quality characteristics,
//! and the scoring helpers used to report on a piece of content.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// One of the nine framework levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QaqfLevel {
    pub level: u8,
    pub name: &'static str,
    pub description: &'static str,
}

pub const LEVELS: [QaqfLevel; 9] = [
    QaqfLevel { level: 1, name: "Basic Skills", description: "Foundation level skills and knowledge" },
    QaqfLevel { level: 2, name: "Essential Skills", description: "Core competencies and basic understanding" },
    QaqfLevel { level: 3, name: "Intermediate Skills", description: "Applied knowledge with some complexity" },
    QaqfLevel { level: 4, name: "Professional Entry", description: "Skilled professional entry level" },
    QaqfLevel { level: 5, name: "Professional", description: "Advanced professional competence" },
    QaqfLevel { level: 6, name: "Specialist", description: "Specialized expertise and leadership" },
    QaqfLevel { level: 7, name: "Advanced Professional", description: "Expert level with strategic thinking" },
    QaqfLevel { level: 8, name: "Expert", description: "Mastery level with innovation capability" },
    QaqfLevel { level: 9, name: "Authority", description: "Authoritative expertise and thought leadership" },
];

/// Level band: basic (1-3), intermediate (4-6), advanced (7-9)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QaqfLevelCategory {
    Basic,
    Intermediate,
    Advanced,
}

impl QaqfLevelCategory {
    pub fn for_level(level: u8) -> Option<Self> {
        match level {
            1..=3 => Some(Self::Basic),
            4..=6 => Some(Self::Intermediate),
            7..=9 => Some(Self::Advanced),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    pub fn colour(self) -> &'static str {
        match self {
            Self::Basic => "blue",
            Self::Intermediate => "yellow",
            Self::Advanced => "red",
        }
    }
}

/// Display colour for a level; gray outside 1-9
pub fn colour_for_level(level: u8) -> &'static str {
    QaqfLevelCategory::for_level(level)
        .map(QaqfLevelCategory::colour)
        .unwrap_or("gray")
}

/// Look up a level by number; anything outside 1-9 is `UnknownLevel`
pub fn level(level: i64) -> Result<&'static QaqfLevel> {
    LEVELS
        .iter()
        .find(|l| i64::from(l.level) == level)
        .ok_or(Error::UnknownLevel(level))
}

/// A quality characteristic content can be tagged with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QaqfCharacteristic {
    pub id: u8,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

pub const CHARACTERISTICS: [QaqfCharacteristic; 10] = [
    QaqfCharacteristic { id: 1, name: "Clarity", description: "Clear and understandable presentation", category: "Communication" },
    QaqfCharacteristic { id: 2, name: "Completeness", description: "Comprehensive coverage of topics", category: "Content" },
    QaqfCharacteristic { id: 3, name: "Accuracy", description: "Factual correctness and precision", category: "Quality" },
    QaqfCharacteristic { id: 4, name: "Coherence", description: "Logical structure and flow", category: "Organization" },
    QaqfCharacteristic { id: 5, name: "Relevance", description: "Applicable to learning objectives", category: "Alignment" },
    QaqfCharacteristic { id: 6, name: "Currency", description: "Up-to-date and current information", category: "Timeliness" },
    QaqfCharacteristic { id: 7, name: "Accessibility", description: "Inclusive and accessible design", category: "Usability" },
    QaqfCharacteristic { id: 8, name: "Engagement", description: "Interactive and engaging content", category: "Pedagogy" },
    QaqfCharacteristic { id: 9, name: "Assessment", description: "Effective evaluation methods", category: "Evaluation" },
    QaqfCharacteristic { id: 10, name: "Authenticity", description: "Real-world application and context", category: "Application" },
];

/// Characteristics in the given category (exact match)
pub fn characteristics_by_category(category: &str) -> Vec<QaqfCharacteristic> {
    CHARACTERISTICS
        .iter()
        .filter(|c| c.category == category)
        .copied()
        .collect()
}

/// Content fields the compliance checks look at
///
/// Every field is optional so that partially-filled drafts can be scored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentProfile {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub qaqf_level: Option<u8>,
    pub characteristics: Vec<String>,
    pub accessibility_features: Vec<String>,
    pub language_level: Option<String>,
    pub curriculum_alignment: Vec<String>,
    pub assessment_criteria: Vec<String>,
    pub verification_status: Option<String>,
}

/// Structural compliance score (0-100)
///
/// 40 points for basic content (10 each) and up to 60 for tagged
/// characteristics at 6 points apiece.
pub fn qaqf_compliance(content: &ContentProfile) -> u32 {
    let mut score = 0;

    if char_len(&content.title) >= 10 {
        score += 10;
    }
    if char_len(&content.description) >= 50 {
        score += 10;
    }
    if char_len(&content.content) >= 200 {
        score += 10;
    }
    if matches!(content.qaqf_level, Some(1..=9)) {
        score += 10;
    }

    let characteristic_points = (content.characteristics.len() as u32).saturating_mul(6);
    score += characteristic_points.min(60);

    score.min(100)
}

fn char_len(field: &Option<String>) -> usize {
    field.as_deref().map(|s| s.chars().count()).unwrap_or(0)
}

/// Outcome of the five British-standards checks
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BritishStandardsChecks {
    pub accessibility: bool,
    pub language_standards: bool,
    pub curriculum_alignment: bool,
    pub assessment_criteria: bool,
    pub quality_assurance: bool,
}

impl BritishStandardsChecks {
    fn passed(&self) -> usize {
        [
            self.accessibility,
            self.language_standards,
            self.curriculum_alignment,
            self.assessment_criteria,
            self.quality_assurance,
        ]
        .iter()
        .filter(|passed| **passed)
        .count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BritishStandardsResult {
    pub score: f64,
    pub checks: BritishStandardsChecks,
    pub compliant: bool,
}

const BRITISH_STANDARDS_CHECK_COUNT: usize = 5;

/// Score content against the British-standards checklist
///
/// Compliant when at least 80% of the checks (4 of 5) pass.
pub fn british_standards_compliance(content: &ContentProfile) -> BritishStandardsResult {
    let checks = BritishStandardsChecks {
        accessibility: !content.accessibility_features.is_empty(),
        language_standards: content
            .language_level
            .as_deref()
            .is_some_and(|l| l.contains("UK")),
        curriculum_alignment: !content.curriculum_alignment.is_empty(),
        assessment_criteria: !content.assessment_criteria.is_empty(),
        quality_assurance: content.verification_status.as_deref() == Some("verified"),
    };

    let passed = checks.passed();
    // ceil(5 * 0.8)
    let required = (BRITISH_STANDARDS_CHECK_COUNT * 4).div_ceil(5);

    BritishStandardsResult {
        score: passed as f64 / BRITISH_STANDARDS_CHECK_COUNT as f64 * 100.0,
        checks,
        compliant: passed >= required,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QaqfReport {
    pub overall_score: u32,
    pub qaqf_compliance: u32,
    pub british_standards: BritishStandardsResult,
    pub level_category: QaqfLevelCategory,
    pub recommendations: Vec<String>,
}

/// Combined compliance report with improvement recommendations
///
/// Content without a recognised level is reported in the advanced band.
pub fn qaqf_report(content: &ContentProfile) -> QaqfReport {
    let compliance = qaqf_compliance(content);
    let standards = british_standards_compliance(content);
    let overall = ((compliance as f64 + standards.score) / 2.0).round() as u32;

    let level_category = content
        .qaqf_level
        .and_then(QaqfLevelCategory::for_level)
        .unwrap_or(QaqfLevelCategory::Advanced);

    QaqfReport {
        overall_score: overall,
        qaqf_compliance: compliance,
        recommendations: recommendations(content, compliance, standards.score),
        british_standards: standards,
        level_category,
    }
}

fn recommendations(content: &ContentProfile, qaqf_score: u32, standards_score: f64) -> Vec<String> {
    let mut out = Vec::new();

    if qaqf_score < 60 {
        out.push("Improve content depth and detail".to_string());
        out.push("Add more comprehensive descriptions".to_string());
    }
    if standards_score < 70.0 {
        out.push("Enhance accessibility features".to_string());
        out.push("Align with UK curriculum standards".to_string());
    }
    if content.characteristics.len() < 5 {
        out.push("Include more QAQF characteristics".to_string());
    }
    if content.assessment_criteria.len() < 3 {
        out.push("Define clear assessment criteria".to_string());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_level_lookup() {
        assert_eq!(level(1).unwrap().name, "Basic Skills");
        assert_eq!(level(9).unwrap().name, "Authority");
        assert!(matches!(level(0), Err(Error::UnknownLevel(0))));
        assert!(matches!(level(10), Err(Error::UnknownLevel(10))));
        assert!(matches!(level(300), Err(Error::UnknownLevel(300))));
        assert!(matches!(level(-1), Err(Error::UnknownLevel(-1))));
    }

    #[test]
    fn test_level_colours() {
        assert_eq!(colour_for_level(2), "blue");
        assert_eq!(colour_for_level(5), "yellow");
        assert_eq!(colour_for_level(9), "red");
        assert_eq!(colour_for_level(0), "gray");
        assert_eq!(colour_for_level(12), "gray");
    }

    #[test]
    fn test_characteristics_by_category() {
        let found = characteristics_by_category("Pedagogy");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Engagement");
        assert!(characteristics_by_category("pedagogy").is_empty());
    }

    #[test]
    fn test_compliance_empty_content_scores_zero() {
        assert_eq!(qaqf_compliance(&ContentProfile::default()), 0);
    }

    #[test]
    fn test_compliance_full_content_caps_at_100() {
        let content = ContentProfile {
            title: Some("Organic Chemistry Foundations".to_string()),
            description: Some("d".repeat(50)),
            content: Some("c".repeat(200)),
            qaqf_level: Some(4),
            characteristics: strings(&[
                "Clarity", "Completeness", "Accuracy", "Coherence", "Relevance",
                "Currency", "Accessibility", "Engagement", "Assessment", "Authenticity", "Extra",
            ]),
            ..Default::default()
        };
        assert_eq!(qaqf_compliance(&content), 100);
    }

    #[test]
    fn test_compliance_short_fields_do_not_score() {
        let content = ContentProfile {
            title: Some("Short".to_string()),
            description: Some("too short".to_string()),
            qaqf_level: Some(11),
            characteristics: strings(&["Clarity", "Accuracy"]),
            ..Default::default()
        };
        assert_eq!(qaqf_compliance(&content), 12);
    }

    #[test]
    fn test_british_standards_four_of_five_is_compliant() {
        let content = ContentProfile {
            accessibility_features: strings(&["captions"]),
            language_level: Some("UK English".to_string()),
            curriculum_alignment: strings(&["GCSE"]),
            assessment_criteria: strings(&["rubric"]),
            verification_status: Some("pending".to_string()),
            ..Default::default()
        };
        let result = british_standards_compliance(&content);
        assert_eq!(result.score, 80.0);
        assert!(result.compliant);
        assert!(!result.checks.quality_assurance);
    }

    #[test]
    fn test_british_standards_three_of_five_is_not_compliant() {
        let content = ContentProfile {
            accessibility_features: strings(&["captions"]),
            language_level: Some("US English".to_string()),
            curriculum_alignment: strings(&["GCSE"]),
            verification_status: Some("verified".to_string()),
            ..Default::default()
        };
        let result = british_standards_compliance(&content);
        assert_eq!(result.score, 60.0);
        assert!(!result.compliant);
    }

    #[test]
    fn test_report_for_empty_content() {
        let report = qaqf_report(&ContentProfile::default());
        assert_eq!(report.overall_score, 0);
        assert_eq!(report.level_category, QaqfLevelCategory::Advanced);
        assert_eq!(report.recommendations.len(), 6);
    }

    #[test]
    fn test_report_category_follows_level() {
        let content = ContentProfile {
            qaqf_level: Some(5),
            ..Default::default()
        };
        let report = qaqf_report(&content);
        assert_eq!(report.level_category, QaqfLevelCategory::Intermediate);
        // 10 (level) + 0 standards => round(5.0)
        assert_eq!(report.overall_score, 5);
    }
}
