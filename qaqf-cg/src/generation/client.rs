//! Content-generation endpoint client
//!
//! Single POST per course, no retries. Callers treat every error as a
//! signal to use the local templates.
//!
//! # API Reference
//! - Request: `{generation_type: "course", title, subject_area, target_audience,
//!   learning_objectives, duration_weeks, modules_count, delivery_mode, qaqf_level}`
//! - Response: `{generated_content, courseid?, content_type?, qaqf_level?, status?, modules?}`
//! - Auth: optional `Authorization: Bearer <token>`

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// User-Agent header sent with generation requests
const USER_AGENT: &str = concat!("qaqf-cg/", env!("CARGO_PKG_VERSION"));

/// Body posted to the generation endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseGenerationRequest {
    /// Always "course" for the wizard
    pub generation_type: String,
    pub title: String,
    pub subject_area: String,
    pub target_audience: String,
    /// Objective texts joined with newlines
    pub learning_objectives: String,
    pub duration_weeks: u32,
    pub modules_count: u32,
    pub delivery_mode: String,
    pub qaqf_level: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteModule {
    pub title: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub duration: Option<String>,
}

/// Successful endpoint response
///
/// Only `generated_content` is required; the other fields are informational
/// and dropped when their type is unexpected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseGenerationResponse {
    pub generated_content: String,
    #[serde(default)]
    pub courseid: Option<i64>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub qaqf_level: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub modules: Option<Vec<RemoteModule>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Connection, TLS or timeout failure
    #[error("generation request failed: {0}")]
    Network(String),

    /// Endpoint answered with a non-2xx status
    #[error("generation endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Body was not JSON of the expected shape
    #[error("failed to parse generation response: {0}")]
    Parse(String),

    /// JSON lacked a string `generated_content`
    #[error("generation response has no generated_content")]
    MissingContent,
}

/// Seam between the generation trigger and the outside world
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Request generated content; `token` overrides any configured token
    async fn generate(
        &self,
        request: &CourseGenerationRequest,
        token: Option<&str>,
    ) -> Result<CourseGenerationResponse, GenerationError>;
}

/// Parse a response body, distinguishing a missing field from bad JSON
pub fn parse_response(body: &str) -> Result<CourseGenerationResponse, GenerationError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| GenerationError::Parse(e.to_string()))?;

    let generated_content = value
        .get("generated_content")
        .and_then(Value::as_str)
        .ok_or(GenerationError::MissingContent)?
        .to_string();

    Ok(CourseGenerationResponse {
        generated_content,
        courseid: optional_field(&value, "courseid"),
        content_type: optional_field(&value, "content_type"),
        qaqf_level: optional_field(&value, "qaqf_level"),
        status: optional_field(&value, "status"),
        modules: optional_field(&value, "modules"),
    })
}

/// Field `key` as `T`, or `None` when absent or of another type
fn optional_field<T: DeserializeOwned>(value: &Value, key: &str) -> Option<T> {
    value
        .get(key)
        .cloned()
        .and_then(|field| serde_json::from_value(field).ok())
}

/// reqwest-backed client for the configured endpoint
pub struct HttpContentGenerator {
    http_client: Client,
    endpoint: String,
    default_token: Option<String>,
}

impl HttpContentGenerator {
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Duration,
        default_token: Option<String>,
    ) -> Result<Self, reqwest::Error> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(USER_AGENT),
        );

        let http_client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http_client,
            endpoint: endpoint.into(),
            default_token,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContentGenerator for HttpContentGenerator {
    async fn generate(
        &self,
        request: &CourseGenerationRequest,
        token: Option<&str>,
    ) -> Result<CourseGenerationResponse, GenerationError> {
        debug!(
            endpoint = %self.endpoint,
            title = %request.title,
            duration_weeks = request.duration_weeks,
            "Sending course generation request"
        );

        let mut builder = self.http_client.post(&self.endpoint).json(request);
        if let Some(token) = token.or(self.default_token.as_deref()) {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| GenerationError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed = parse_response(&body)?;
        debug!(
            content_len = parsed.generated_content.len(),
            courseid = ?parsed.courseid,
            "Course generation response received"
        );
        Ok(parsed)
    }
}
