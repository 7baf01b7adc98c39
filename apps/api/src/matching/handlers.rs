//! Axum route handlers for the recommendation API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::matching::MatchResult;
use crate::models::profile::{ProfilePayload, UserProfile};
use crate::state::AppState;

/// POST /api/recommendations
///
/// Scores the submitted profile against the catalog and returns up to five
/// careers, best match first. Rejects bodies without `personalDetails`.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    payload: Result<Json<ProfilePayload>, JsonRejection>,
) -> Result<Json<Vec<MatchResult>>, AppError> {
    let Json(payload) = payload?;
    let profile = UserProfile::try_from(payload)?;

    let results = state.matcher.recommend(&profile);
    info!(
        interests = profile.interests.len(),
        strengths = profile.strengths.len(),
        recommended = results.len(),
        "Generated career recommendations"
    );

    Ok(Json(results))
}
