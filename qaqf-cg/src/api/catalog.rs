//! Course type catalogue and form options

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::api::extract::ApiPath;
use crate::error::{ApiError, ApiResult};
use crate::models::{CourseType, CourseTypeDescriptor, DifficultyLevel, COURSE_TYPES};
use crate::AppState;

/// Select-box entry
#[derive(Debug, Serialize)]
pub struct FormOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationOptionsResponse {
    pub course_type: CourseType,
    pub options: Vec<FormOption>,
}

/// GET /api/course-types
pub async fn list_course_types() -> Json<&'static [CourseTypeDescriptor]> {
    Json(&COURSE_TYPES[..])
}

/// GET /api/course-types/:id/durations
pub async fn duration_options(
    ApiPath(id): ApiPath<String>,
) -> ApiResult<Json<DurationOptionsResponse>> {
    let course_type: CourseType = id
        .parse()
        .map_err(|e: crate::models::UnknownCourseType| ApiError::NotFound(e.to_string()))?;

    let options = course_type
        .duration_options()
        .iter()
        .map(|&d| FormOption { value: d, label: d })
        .collect();

    Ok(Json(DurationOptionsResponse {
        course_type,
        options,
    }))
}

/// GET /api/difficulty-levels
pub async fn difficulty_options() -> Json<Vec<FormOption>> {
    Json(
        DifficultyLevel::ALL
            .iter()
            .map(|level| FormOption {
                value: level.as_str(),
                label: level.as_str(),
            })
            .collect(),
    )
}

pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/api/course-types", get(list_course_types))
        .route("/api/course-types/:id/durations", get(duration_options))
        .route("/api/difficulty-levels", get(difficulty_options))
}
