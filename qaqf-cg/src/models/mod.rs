//! Data models for the course wizard

pub mod course_data;
pub mod course_type;
pub mod generated_course;

pub use course_data::{
    BasicInfo, CourseData, DifficultyLevel, LearningObjective, LearningObjectives, SourceMaterial,
    SpecializedContent,
};
pub use course_type::{CourseType, CourseTypeDescriptor, UnknownCourseType, COURSE_TYPES};
pub use generated_course::{
    GeneratedCourse, GeneratedModule, GenerationOutcome, Provenance, REMOTE_COURSE_ID,
};
