//! QAQF reference data and content checks

use axum::{
    extract::Query,
    routing::{get, post},
    Json, Router,
};
use qaqf_common::qaqf::{self, ContentProfile, QaqfCharacteristic, QaqfLevelCategory, QaqfReport};
use qaqf_common::terminology::{self, TerminologyReport};
use serde::{Deserialize, Serialize};

use crate::api::extract::{ApiJson, ApiPath};
use crate::error::{ApiError, ApiResult};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct LevelView {
    pub level: u8,
    pub name: &'static str,
    pub description: &'static str,
    pub category: QaqfLevelCategory,
    pub colour: &'static str,
}

impl LevelView {
    fn from_level(level: &qaqf_common::QaqfLevel) -> Option<Self> {
        let category = QaqfLevelCategory::for_level(level.level)?;
        Some(Self {
            level: level.level,
            name: level.name,
            description: level.description,
            category,
            colour: category.colour(),
        })
    }
}

/// GET /api/qaqf/levels
pub async fn list_levels() -> Json<Vec<LevelView>> {
    Json(qaqf::LEVELS.iter().filter_map(LevelView::from_level).collect())
}

/// GET /api/qaqf/levels/:level
///
/// Any integer outside 1-9 is a 404.
pub async fn get_level(ApiPath(level): ApiPath<i64>) -> ApiResult<Json<LevelView>> {
    let found = qaqf::level(level)?;
    LevelView::from_level(found)
        .map(Json)
        .ok_or_else(|| ApiError::Internal(format!("level {} has no category", level)))
}

#[derive(Debug, Deserialize)]
pub struct CharacteristicsQuery {
    pub category: Option<String>,
}

/// GET /api/qaqf/characteristics[?category=...]
pub async fn list_characteristics(
    Query(query): Query<CharacteristicsQuery>,
) -> Json<Vec<QaqfCharacteristic>> {
    match query.category {
        Some(category) => Json(qaqf::characteristics_by_category(&category)),
        None => Json(qaqf::CHARACTERISTICS.to_vec()),
    }
}

/// POST /api/qaqf/report
pub async fn compliance_report(
    ApiJson(content): ApiJson<ContentProfile>,
) -> Json<QaqfReport> {
    Json(qaqf::qaqf_report(&content))
}

#[derive(Debug, Deserialize)]
pub struct TerminologyRequest {
    pub content: String,
}

/// POST /api/verification/terminology
pub async fn terminology_check(
    ApiJson(request): ApiJson<TerminologyRequest>,
) -> ApiResult<Json<TerminologyReport>> {
    if request.content.trim().is_empty() {
        return Err(ApiError::BadRequest("content must not be empty".to_string()));
    }
    Ok(Json(terminology::scan(&request.content)))
}

pub fn qaqf_routes() -> Router<AppState> {
    Router::new()
        .route("/api/qaqf/levels", get(list_levels))
        .route("/api/qaqf/levels/:level", get(get_level))
        .route("/api/qaqf/characteristics", get(list_characteristics))
        .route("/api/qaqf/report", post(compliance_report))
        .route("/api/verification/terminology", post(terminology_check))
}
