//! Artist onboarding endpoint

use axum::{extract::State, http::StatusCode, Json};

use artistly_common::onboarding::{ApplicationReceipt, OnboardingForm};

use crate::{ApiResult, AppState};

/// POST /api/onboarding
///
/// Returns 202 with a receipt once the application is accepted, or 422 with
/// every field violation.
pub async fn submit_application(
    State(state): State<AppState>,
    Json(form): Json<OnboardingForm>,
) -> ApiResult<(StatusCode, Json<ApplicationReceipt>)> {
    let receipt = state.desk.submit(&form).await?;
    Ok((StatusCode::ACCEPTED, Json(receipt)))
}
