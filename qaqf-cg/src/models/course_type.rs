//! Course types and the static catalogue shown when a wizard starts

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selects which module template the local generator uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseType {
    Academic,
    Corporate,
    Storytelling,
}

impl CourseType {
    pub const ALL: [CourseType; 3] = [Self::Academic, Self::Corporate, Self::Storytelling];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Academic => "academic",
            Self::Corporate => "corporate",
            Self::Storytelling => "storytelling",
        }
    }

    /// Catalogue entry for this type
    pub fn descriptor(self) -> &'static CourseTypeDescriptor {
        match self {
            Self::Academic => &COURSE_TYPES[0],
            Self::Corporate => &COURSE_TYPES[1],
            Self::Storytelling => &COURSE_TYPES[2],
        }
    }

    /// Duration choices offered on the learning-objectives step
    pub fn duration_options(self) -> &'static [&'static str] {
        match self {
            Self::Academic => &["4 weeks", "8 weeks", "12 weeks", "16 weeks"],
            Self::Corporate => &["1-5 days"],
            Self::Storytelling => &["1-8 sessions"],
        }
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown course type: {0}")]
pub struct UnknownCourseType(pub String);

impl FromStr for CourseType {
    type Err = UnknownCourseType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "academic" => Ok(Self::Academic),
            "corporate" => Ok(Self::Corporate),
            "storytelling" => Ok(Self::Storytelling),
            other => Err(UnknownCourseType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseTypeDescriptor {
    pub id: CourseType,
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 4],
    pub audience: &'static str,
    pub duration: &'static str,
    pub focus: &'static str,
}

pub const COURSE_TYPES: [CourseTypeDescriptor; 3] = [
    CourseTypeDescriptor {
        id: CourseType::Academic,
        title: "Academic Lecture",
        description: "Traditional educational content with structured learning objectives, modules, and assessments",
        features: ["Learning Objectives", "Structured Modules", "Assessment Methods", "Academic Standards"],
        audience: "Students & Educators",
        duration: "4-16 weeks",
        focus: "Knowledge Transfer",
    },
    CourseTypeDescriptor {
        id: CourseType::Corporate,
        title: "Corporate Training",
        description: "Business-focused training materials with practical applications, case studies, and ROI metrics",
        features: ["Business Objectives", "ROI Tracking", "Case Studies", "Performance Metrics"],
        audience: "Professionals & Teams",
        duration: "1-5 days",
        focus: "Skill Development",
    },
    CourseTypeDescriptor {
        id: CourseType::Storytelling,
        title: "Storytelling Lecture",
        description: "Narrative-driven educational content using storytelling techniques for engaging learning",
        features: ["Character Development", "Story Arc", "Emotional Engagement", "Interactive Elements"],
        audience: "All Ages",
        duration: "1-8 sessions",
        focus: "Engagement & Memory",
    },
];
