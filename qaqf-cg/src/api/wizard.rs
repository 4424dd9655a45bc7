//! Wizard session endpoints
//!
//! Each session owns one [`WizardController`]. Forward navigation over HTTP
//! is checked against the active step's gate; `goto` and `previous` are not.

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::api::extract::{ApiJson, ApiPath};
use crate::error::{ApiError, ApiResult};
use crate::models::{
    BasicInfo, CourseType, GenerationOutcome, LearningObjectives, SpecializedContent,
};
use crate::wizard::{WizardController, WizardData, WizardStep};
use crate::AppState;

/// Wizard state as returned to clients
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardSnapshot {
    pub id: Uuid,
    pub current_step: u8,
    pub progress: u8,
    pub selected_course_type: Option<CourseType>,
    pub course_data: WizardData,
    pub steps: Vec<WizardStep>,
    pub can_proceed_to_next: bool,
}

impl WizardSnapshot {
    pub fn new(id: Uuid, wizard: &WizardController) -> Self {
        Self {
            id,
            current_step: wizard.current_step(),
            progress: wizard.progress(),
            selected_course_type: wizard.selected_course_type(),
            course_data: wizard.data().clone(),
            steps: wizard.steps(),
            can_proceed_to_next: wizard.can_proceed_to_next(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectCourseTypeRequest {
    pub course_type: CourseType,
}

#[derive(Debug, Deserialize)]
pub struct GoToStepRequest {
    pub step: i64,
}

/// Apply `f` to the session's controller and return the new snapshot
async fn with_wizard<F>(state: &AppState, id: Uuid, f: F) -> ApiResult<Json<WizardSnapshot>>
where
    F: FnOnce(&mut WizardController) -> ApiResult<()>,
{
    state
        .wizards
        .with_session(id, |wizard| {
            f(wizard)?;
            Ok(Json(WizardSnapshot::new(id, wizard)))
        })
        .await
        .ok_or_else(|| ApiError::NotFound(format!("wizard {}", id)))?
}

/// POST /api/wizards
pub async fn create_wizard(State(state): State<AppState>) -> (StatusCode, Json<WizardSnapshot>) {
    let wizard = WizardController::new();
    let id = state.wizards.insert(wizard.clone()).await;
    let snapshot = WizardSnapshot::new(id, &wizard);

    info!(wizard_id = %id, "Wizard session created");

    (StatusCode::CREATED, Json(snapshot))
}

/// GET /api/wizards/:id
pub async fn get_wizard(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<Json<WizardSnapshot>> {
    with_wizard(&state, id, |_| Ok(())).await
}

/// DELETE /api/wizards/:id
pub async fn delete_wizard(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<StatusCode> {
    if state.wizards.remove(id).await {
        info!(wizard_id = %id, "Wizard session removed");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!("wizard {}", id)))
    }
}

/// POST /api/wizards/:id/course-type
pub async fn select_course_type(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<SelectCourseTypeRequest>,
) -> ApiResult<Json<WizardSnapshot>> {
    with_wizard(&state, id, |w| {
        w.select_course_type(request.course_type);
        Ok(())
    })
    .await
}

/// PUT /api/wizards/:id/basic-info
pub async fn update_basic_info(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(basic_info): ApiJson<BasicInfo>,
) -> ApiResult<Json<WizardSnapshot>> {
    with_wizard(&state, id, |w| {
        w.update_basic_info(basic_info);
        Ok(())
    })
    .await
}

/// PUT /api/wizards/:id/learning-objectives
pub async fn update_learning_objectives(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(objectives): ApiJson<LearningObjectives>,
) -> ApiResult<Json<WizardSnapshot>> {
    with_wizard(&state, id, |w| {
        w.update_learning_objectives(objectives);
        Ok(())
    })
    .await
}

/// PUT /api/wizards/:id/specialized-content
pub async fn update_specialized_content(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(content): ApiJson<SpecializedContent>,
) -> ApiResult<Json<WizardSnapshot>> {
    with_wizard(&state, id, |w| {
        w.update_specialized_content(content);
        Ok(())
    })
    .await
}

/// POST /api/wizards/:id/next
pub async fn next_step(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<Json<WizardSnapshot>> {
    with_wizard(&state, id, |w| {
        w.try_next_step()?;
        Ok(())
    })
    .await
}

/// POST /api/wizards/:id/previous
pub async fn previous_step(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<Json<WizardSnapshot>> {
    with_wizard(&state, id, |w| {
        w.previous_step();
        Ok(())
    })
    .await
}

/// POST /api/wizards/:id/goto
pub async fn go_to_step(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<GoToStepRequest>,
) -> ApiResult<Json<WizardSnapshot>> {
    with_wizard(&state, id, |w| {
        w.go_to_step(request.step);
        Ok(())
    })
    .await
}

/// POST /api/wizards/:id/reset
pub async fn reset_wizard(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<Json<WizardSnapshot>> {
    with_wizard(&state, id, |w| {
        w.reset_wizard();
        Ok(())
    })
    .await
}

/// POST /api/wizards/:id/generate
///
/// The session lock is released before the outbound call, so repeated
/// requests generate independently.
pub async fn generate_course(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    headers: HeaderMap,
) -> ApiResult<Json<GenerationOutcome>> {
    let course_data = state
        .wizards
        .with_session(id, |wizard| wizard.course_data_for_generation())
        .await
        .ok_or_else(|| ApiError::NotFound(format!("wizard {}", id)))??;

    let token = bearer_token(&headers);
    let outcome = state.trigger.generate(&course_data, token).await;

    info!(
        wizard_id = %id,
        provenance = ?outcome.provenance,
        modules = outcome.course.modules.len(),
        "Course generated"
    );

    Ok(Json(outcome))
}

/// Token from an `Authorization: Bearer <token>` header
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

pub fn wizard_routes() -> Router<AppState> {
    Router::new()
        .route("/api/wizards", post(create_wizard))
        .route("/api/wizards/:id", get(get_wizard).delete(delete_wizard))
        .route("/api/wizards/:id/course-type", post(select_course_type))
        .route("/api/wizards/:id/basic-info", put(update_basic_info))
        .route("/api/wizards/:id/learning-objectives", put(update_learning_objectives))
        .route("/api/wizards/:id/specialized-content", put(update_specialized_content))
        .route("/api/wizards/:id/next", post(next_step))
        .route("/api/wizards/:id/previous", post(previous_step))
        .route("/api/wizards/:id/goto", post(go_to_step))
        .route("/api/wizards/:id/reset", post(reset_wizard))
        .route("/api/wizards/:id/generate", post(generate_course))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc123"));
        assert_eq!(bearer_token(&headers), Some("abc123"));

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic dXNlcg=="));
        assert_eq!(bearer_token(&headers), None);

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert_eq!(bearer_token(&headers), None);
    }
}
