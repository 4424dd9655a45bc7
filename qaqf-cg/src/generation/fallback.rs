//! Local deterministic course templates
//!
//! Used whenever the remote endpoint cannot produce a course. Module
//! structure depends only on the course type and the duration string.

use chrono::Utc;
use uuid::Uuid;

use crate::models::{CourseData, CourseType, GeneratedCourse, GeneratedModule};

use super::duration::{session_count, total_duration};

/// Most chapters a storytelling course is given
pub const MAX_STORY_CHAPTERS: u32 = 6;

/// Build a course from the template for `data.course_type`
pub fn generate_local_course(data: &CourseData) -> GeneratedCourse {
    let modules = match data.course_type {
        CourseType::Academic => academic_modules(data),
        CourseType::Corporate => corporate_modules(),
        CourseType::Storytelling => storytelling_modules(data),
    };

    GeneratedCourse {
        id: Uuid::new_v4().to_string(),
        title: data.basic_info.title.clone(),
        description: data.basic_info.description.clone(),
        course_type: data.course_type,
        total_duration: total_duration(&modules),
        modules,
        created_at: Utc::now(),
        subject_area: None,
        duration_weeks: None,
    }
}

/// Four modules for week-long courses, three otherwise
pub fn academic_modules(data: &CourseData) -> Vec<GeneratedModule> {
    let topic = data.basic_info.title.to_lowercase();

    if data.learning_objectives.duration.contains("weeks") {
        vec![
            GeneratedModule::new("module-1", "Introduction and Overview", 30)
                .described(format!("Introduction to {} and course overview", topic))
                .with_content(&[
                    "Course introduction and objectives",
                    "Overview of key concepts",
                    "Learning methodology",
                    "Assessment criteria",
                ])
                .with_activities(&["Welcome discussion", "Pre-assessment quiz", "Goal setting exercise"]),
            GeneratedModule::new("module-2", "Core Concepts", 60)
                .described("Deep dive into fundamental concepts and theories")
                .with_content(&[
                    "Theoretical foundations",
                    "Key principles and frameworks",
                    "Historical context",
                    "Current applications",
                ])
                .with_activities(&["Concept mapping", "Case study analysis", "Group discussions"]),
            GeneratedModule::new("module-3", "Practical Applications", 45)
                .described("Hands-on application of learned concepts")
                .with_content(&[
                    "Real-world examples",
                    "Practical exercises",
                    "Problem-solving techniques",
                    "Best practices",
                ])
                .with_activities(&["Hands-on exercises", "Project work", "Peer collaboration"]),
            GeneratedModule::new("module-4", "Assessment and Review", 30)
                .described("Evaluation of learning outcomes and course review")
                .with_content(&[
                    "Knowledge assessment",
                    "Skill evaluation",
                    "Course summary",
                    "Next steps",
                ])
                .with_assessments(&["Final examination", "Project presentation", "Peer evaluation"]),
        ]
    } else {
        vec![
            GeneratedModule::new("module-1", "Introduction and Core Concepts", 45)
                .described(format!("Introduction to {} and core concepts", topic)),
            GeneratedModule::new("module-2", "Practical Application", 60)
                .described("Hands-on application and practice"),
            GeneratedModule::new("module-3", "Assessment and Wrap-up", 30)
                .described("Final assessment and course conclusion"),
        ]
    }
}

pub fn corporate_modules() -> Vec<GeneratedModule> {
    vec![
        GeneratedModule::new("module-1", "Business Context and Objectives", 30)
            .described("Understanding business goals and training objectives")
            .with_content(&[
                "Business case for training",
                "Performance objectives",
                "Success metrics",
                "ROI expectations",
            ]),
        GeneratedModule::new("module-2", "Core Skills Development", 90)
            .described("Developing essential skills and competencies")
            .with_content(&[
                "Skill assessment",
                "Core competencies",
                "Practical techniques",
                "Performance standards",
            ]),
        GeneratedModule::new("module-3", "Real-World Application", 60)
            .described("Applying skills in realistic business scenarios")
            .with_content(&[
                "Case studies",
                "Role-playing exercises",
                "Simulation activities",
                "Best practices",
            ]),
        GeneratedModule::new("module-4", "Implementation and Follow-up", 45)
            .described("Planning implementation and measuring success")
            .with_content(&[
                "Action planning",
                "Implementation strategies",
                "Performance tracking",
                "Continuous improvement",
            ]),
    ]
}

/// One 45-minute chapter per session, capped at six
pub fn storytelling_modules(data: &CourseData) -> Vec<GeneratedModule> {
    let chapters = session_count(&data.learning_objectives.duration).min(MAX_STORY_CHAPTERS);

    (1..=chapters)
        .map(|i| {
            GeneratedModule::new(format!("chapter-{}", i), format!("Chapter {}: Story Development", i), 45)
                .described(format!("Story-based learning chapter {}", i))
                .with_content(&[
                    "Story narrative",
                    "Character development",
                    "Educational content integration",
                    "Interactive elements",
                ])
                .with_activities(&[
                    "Story discussion",
                    "Character analysis",
                    "Reflection questions",
                    "Creative exercises",
                ])
        })
        .collect()
}
