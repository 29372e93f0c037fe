//! artistly-web library - HTTP service for the ArTistLy booking directory
//!
//! Serves the data behind the site's four pages (home, artist directory,
//! onboarding, manager dashboard) as JSON.

use std::sync::Arc;

use axum::Router;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use artistly_common::catalog;
use artistly_common::config::TomlConfig;
use artistly_common::models::Artist;
use artistly_common::onboarding::OnboardingDesk;
use artistly_common::submissions::SubmissionBoard;

pub mod api;
pub mod error;

pub use crate::error::{ApiError, ApiResult};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Directory listings (read-only)
    pub artists: Arc<Vec<Artist>>,
    /// Applications under review; approve/reject take the write lock
    pub board: Arc<RwLock<SubmissionBoard>>,
    /// Onboarding submission handler
    pub desk: OnboardingDesk,
}

impl AppState {
    pub fn new(artists: Vec<Artist>, board: SubmissionBoard, desk: OnboardingDesk) -> Self {
        Self {
            artists: Arc::new(artists),
            board: Arc::new(RwLock::new(board)),
            desk,
        }
    }

    /// State seeded with the fixed catalog
    pub fn seeded(config: &TomlConfig) -> Self {
        Self::new(
            catalog::artists(),
            SubmissionBoard::seeded(),
            OnboardingDesk::from_config(&config.onboarding),
        )
    }
}

/// Log filter: a non-empty `RUST_LOG` wins over the configured level
pub fn log_filter(rust_log: Option<&str>, config_level: &str) -> EnvFilter {
    match rust_log.map(str::trim).filter(|directives| !directives.is_empty()) {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::new(config_level),
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    let api = Router::new()
        .route("/api/home", get(api::home_page))
        .route("/api/options", get(api::filter_options))
        .route("/api/artists", get(api::list_artists))
        .route("/api/artists/:id", get(api::get_artist))
        .route("/api/submissions", get(api::list_submissions))
        .route("/api/submissions/stats", get(api::submission_stats))
        .route("/api/submissions/:id/approve", post(api::approve_submission))
        .route("/api/submissions/:id/reject", post(api::reject_submission))
        .route("/api/onboarding", post(api::submit_application));

    Router::new()
        .merge(api)
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
