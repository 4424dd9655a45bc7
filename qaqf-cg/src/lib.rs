//! qaqf-cg library - QAQF course generator service
//!
//! Hosts course wizard sessions over HTTP and turns completed wizards into
//! generated course outlines, using a remote content-generation endpoint
//! with local templates as fallback.

pub mod api;
pub mod error;
pub mod generation;
pub mod models;
pub mod wizard;

pub use crate::error::{ApiError, ApiResult};

use axum::Router;
use chrono::{DateTime, Utc};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::generation::GenerationTrigger;
use crate::wizard::SessionStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// One controller per wizard session, evicted when idle
    pub wizards: SessionStore,
    /// Remote-or-local course generation
    pub trigger: GenerationTrigger,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(trigger: GenerationTrigger) -> Self {
        Self::with_sessions(trigger, SessionStore::default())
    }

    pub fn with_sessions(trigger: GenerationTrigger, wizards: SessionStore) -> Self {
        Self {
            wizards,
            trigger,
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::health_routes())
        .merge(api::catalog_routes())
        .merge(api::qaqf_routes())
        .merge(api::wizard_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
