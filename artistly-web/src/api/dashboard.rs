//! Manager dashboard endpoints
//!
//! GET /api/submissions, GET /api/submissions/stats,
//! POST /api/submissions/:id/approve, POST /api/submissions/:id/reject

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use artistly_common::models::{ArtistSubmission, Category};
use artistly_common::submissions::{results_summary, ReviewDecision, SubmissionFilter, SubmissionStats};

use crate::{ApiResult, AppState};

/// Query parameters for the dashboard table
#[derive(Debug, Default, Deserialize)]
pub struct SubmissionQuery {
    /// Free-text search over applicant name and city
    #[serde(default)]
    pub q: String,
    /// `all`, `pending`, `approved` or `rejected`
    pub status: Option<String>,
}

impl SubmissionQuery {
    pub fn into_filter(self) -> ApiResult<SubmissionFilter> {
        let mut filter = SubmissionFilter {
            query: self.q,
            ..SubmissionFilter::default()
        };
        if let Some(raw) = self.status.filter(|raw| !raw.is_empty()) {
            filter.status = raw.parse()?;
        }
        Ok(filter)
    }
}

/// One table row
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionRow {
    #[serde(flatten)]
    pub submission: ArtistSubmission,
    pub status_badge: &'static str,
    pub category_badges: Vec<String>,
    /// Approve/reject actions are offered only while pending
    pub can_review: bool,
}

impl From<&ArtistSubmission> for SubmissionRow {
    fn from(submission: &ArtistSubmission) -> Self {
        Self {
            status_badge: submission.status.badge_label(),
            category_badges: submission
                .categories
                .iter()
                .map(|id| Category::lookup(*id).badge())
                .collect(),
            can_review: !submission.status.is_terminal(),
            submission: submission.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub total_results: usize,
    pub summary: String,
    pub stats: SubmissionStats,
    pub submissions: Vec<SubmissionRow>,
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub submission: SubmissionRow,
    pub stats: SubmissionStats,
    pub message: String,
}

/// GET /api/submissions
pub async fn list_submissions(
    State(state): State<AppState>,
    Query(query): Query<SubmissionQuery>,
) -> ApiResult<Json<DashboardResponse>> {
    let filter = query.into_filter()?;
    let board = state.board.read().await;

    let rows: Vec<SubmissionRow> = board.filter(&filter).into_iter().map(SubmissionRow::from).collect();

    Ok(Json(DashboardResponse {
        total_results: rows.len(),
        summary: results_summary(rows.len()),
        stats: board.stats(),
        submissions: rows,
    }))
}

/// GET /api/submissions/stats
pub async fn submission_stats(State(state): State<AppState>) -> Json<SubmissionStats> {
    Json(state.board.read().await.stats())
}

/// POST /api/submissions/:id/approve
pub async fn approve_submission(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ReviewResponse>> {
    review(&state, &id, ReviewDecision::Approve).await
}

/// POST /api/submissions/:id/reject
pub async fn reject_submission(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ReviewResponse>> {
    review(&state, &id, ReviewDecision::Reject).await
}

async fn review(state: &AppState, id: &str, decision: ReviewDecision) -> ApiResult<Json<ReviewResponse>> {
    let mut board = state.board.write().await;
    let submission = SubmissionRow::from(board.review(id, decision)?);

    Ok(Json(ReviewResponse {
        message: format!("Application {}", submission.submission.status.as_str()),
        submission,
        stats: board.stats(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use artistly_common::catalog;
    use artistly_common::models::SubmissionStatus;
    use artistly_common::Selection;

    #[test]
    fn test_status_param() {
        let query = SubmissionQuery {
            status: Some("pending".to_string()),
            ..Default::default()
        };
        let filter = query.into_filter().unwrap();
        assert_eq!(filter.status, Selection::Only(SubmissionStatus::Pending));

        let query = SubmissionQuery {
            status: Some("all".to_string()),
            ..Default::default()
        };
        assert!(query.into_filter().unwrap().status.is_all());
    }

    #[test]
    fn test_unknown_status_rejected() {
        let query = SubmissionQuery {
            status: Some("archived".to_string()),
            ..Default::default()
        };
        assert!(query.into_filter().is_err());
    }

    #[test]
    fn test_row_review_flag_follows_status() {
        let rows: Vec<SubmissionRow> = catalog::submissions().iter().map(SubmissionRow::from).collect();
        assert!(rows[0].can_review);
        assert_eq!(rows[0].status_badge, "Pending");
        assert!(!rows[1].can_review);
        assert!(!rows[2].can_review);
    }
}
