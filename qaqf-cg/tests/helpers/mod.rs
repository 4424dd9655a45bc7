//! Shared fixtures for qaqf-cg integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use qaqf_cg::generation::{
    ContentGenerator, CourseGenerationRequest, CourseGenerationResponse, GenerationError,
    GenerationTrigger,
};
use qaqf_cg::wizard::SessionStore;
use qaqf_cg::{build_router, AppState};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tower::util::ServiceExt;

/// Generator that records each call and replies with a canned result
pub struct ScriptedGenerator {
    reply: Result<CourseGenerationResponse, GenerationError>,
    pub calls: Mutex<Vec<(CourseGenerationRequest, Option<String>)>>,
}

impl ScriptedGenerator {
    pub fn succeeding(content: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(CourseGenerationResponse {
                generated_content: content.to_string(),
                courseid: None,
                content_type: Some("course".to_string()),
                qaqf_level: None,
                status: Some("success".to_string()),
                modules: None,
            }),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: Err(GenerationError::Network("connection refused".to_string())),
            calls: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl ContentGenerator for ScriptedGenerator {
    async fn generate(
        &self,
        request: &CourseGenerationRequest,
        token: Option<&str>,
    ) -> Result<CourseGenerationResponse, GenerationError> {
        self.calls
            .lock()
            .unwrap()
            .push((request.clone(), token.map(str::to_string)));
        self.reply.clone()
    }
}

/// Router backed by the given generator
pub fn create_test_app(generator: Arc<dyn ContentGenerator>) -> Router {
    build_router(AppState::new(GenerationTrigger::new(generator)))
}

/// Router over a session store the test keeps a handle to
pub fn create_test_app_with_sessions(
    generator: Arc<dyn ContentGenerator>,
    sessions: SessionStore,
) -> Router {
    build_router(AppState::with_sessions(GenerationTrigger::new(generator), sessions))
}

/// Send a request and return status plus JSON body (Null when empty)
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    send_with_headers(app, method, uri, body, &[]).await
}

pub async fn send_with_headers(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    headers: &[(&str, &str)],
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

/// Send a raw JSON-typed body as-is, for malformed payloads
pub async fn send_raw(app: &Router, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

pub fn basic_info_body() -> Value {
    json!({
        "title": "Data Ethics",
        "description": "Responsible handling of personal data",
        "targetAudience": "Postgraduate students",
        "difficultyLevel": "Intermediate"
    })
}

pub fn learning_objectives_body() -> Value {
    json!({
        "objectives": [
            {"id": "1", "text": "Explain GDPR principles"},
            {"id": "2", "text": "Assess data-sharing risk"}
        ],
        "duration": "6 weeks"
    })
}

pub fn specialized_content_body() -> Value {
    json!({ "industry": "Healthcare" })
}

/// Create a wizard and fill it through to the review step; returns its id
pub async fn wizard_on_review_step(app: &Router, course_type: &str) -> String {
    let (status, created) = send(app, "POST", "/api/wizards", None).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();
    let base = format!("/api/wizards/{}", id);

    let steps = [
        ("POST", format!("{}/course-type", base), Some(json!({ "courseType": course_type }))),
        ("PUT", format!("{}/basic-info", base), Some(basic_info_body())),
        ("POST", format!("{}/next", base), None),
        ("PUT", format!("{}/learning-objectives", base), Some(learning_objectives_body())),
        ("POST", format!("{}/next", base), None),
        ("PUT", format!("{}/specialized-content", base), Some(specialized_content_body())),
        ("POST", format!("{}/next", base), None),
    ];
    for (method, uri, body) in steps {
        let (status, _) = send(app, method, &uri, body).await;
        assert_eq!(status, StatusCode::OK, "{} {}", method, uri);
    }

    id
}
