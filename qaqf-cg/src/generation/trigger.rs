//! Generation trigger: remote first, local templates on any failure
//!
//! The trigger never fails. A remote course is built on a fixed four-module
//! outline with the generated text as its description; anything else yields
//! the local template for the course type. `GenerationOutcome::provenance`
//! tells the two apart, and remote courses keep the `"api"` id.

use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use crate::models::{
    CourseData, GeneratedCourse, GeneratedModule, GenerationOutcome, Provenance, REMOTE_COURSE_ID,
};

use super::client::{
    ContentGenerator, CourseGenerationRequest, CourseGenerationResponse, GenerationError,
};
use super::duration::{duration_weeks, total_duration};
use super::fallback::generate_local_course;

/// Module count requested from the endpoint
pub const REQUESTED_MODULE_COUNT: u32 = 4;

/// Delivery mode requested from the endpoint
pub const DELIVERY_MODE: &str = "online";

/// Normalized endpoint payload for the wizard data
pub fn build_request(data: &CourseData) -> CourseGenerationRequest {
    let info = &data.basic_info;
    CourseGenerationRequest {
        generation_type: "course".to_string(),
        title: info.title.clone(),
        subject_area: info.title.clone(),
        target_audience: info.target_audience.clone(),
        learning_objectives: data.learning_objectives.objectives_text(),
        duration_weeks: duration_weeks(&data.learning_objectives.duration),
        modules_count: REQUESTED_MODULE_COUNT,
        delivery_mode: DELIVERY_MODE.to_string(),
        qaqf_level: info.level_label().unwrap_or_default().to_string(),
    }
}

/// Fixed outline used for every remote course
pub fn remote_outline() -> Vec<GeneratedModule> {
    vec![
        GeneratedModule::new("m1", "Introduction and Overview", 30)
            .described("Introduction and course overview"),
        GeneratedModule::new("m2", "Core Concepts", 60)
            .described("Deep dive into concepts and theories"),
        GeneratedModule::new("m3", "Practical Applications", 45)
            .described("Hands-on application of learned concepts"),
        GeneratedModule::new("m4", "Assessment and Review", 30)
            .described("Evaluation of outcomes and course review"),
    ]
}

/// Characters of generated text kept as the course description
pub const REMOTE_DESCRIPTION_CHARS: usize = 400;

/// Map an endpoint response onto the remote outline
///
/// Remote module lists are ignored; the description is the first
/// [`REMOTE_DESCRIPTION_CHARS`] characters of the generated text.
pub fn course_from_response(
    data: &CourseData,
    request: &CourseGenerationRequest,
    response: CourseGenerationResponse,
) -> GeneratedCourse {
    let description: String = response
        .generated_content
        .chars()
        .take(REMOTE_DESCRIPTION_CHARS)
        .collect();

    let title = if data.basic_info.title.is_empty() {
        "Generated Course".to_string()
    } else {
        data.basic_info.title.clone()
    };

    let modules = remote_outline();

    GeneratedCourse {
        id: REMOTE_COURSE_ID.to_string(),
        title,
        description,
        course_type: data.course_type,
        total_duration: total_duration(&modules),
        modules,
        created_at: Utc::now(),
        subject_area: Some(request.subject_area.clone()),
        duration_weeks: Some(request.duration_weeks),
    }
}

#[derive(Clone)]
pub struct GenerationTrigger {
    generator: Arc<dyn ContentGenerator>,
}

impl GenerationTrigger {
    pub fn new(generator: Arc<dyn ContentGenerator>) -> Self {
        Self { generator }
    }

    /// Produce a course for complete wizard data; always succeeds
    ///
    /// Empty generated text counts as a failed generation.
    pub async fn generate(&self, data: &CourseData, token: Option<&str>) -> GenerationOutcome {
        let request = build_request(data);

        let result = self
            .generator
            .generate(&request, token)
            .await
            .and_then(|response| {
                if response.generated_content.is_empty() {
                    Err(GenerationError::MissingContent)
                } else {
                    Ok(response)
                }
            });

        match result {
            Ok(response) => {
                info!(
                    title = %request.title,
                    course_type = %data.course_type,
                    "Course generated by remote endpoint"
                );
                GenerationOutcome {
                    provenance: Provenance::Remote,
                    course: course_from_response(data, &request, response),
                }
            }
            Err(e) => {
                warn!(
                    error = %e,
                    title = %request.title,
                    course_type = %data.course_type,
                    "Remote generation failed, using local template"
                );
                GenerationOutcome {
                    provenance: Provenance::Fallback,
                    course: generate_local_course(data),
                }
            }
        }
    }
}
