use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use crate::market::Trends;
use crate::state::AppState;

/// GET /api/job-market/:career_title
///
/// The path extractor percent-decodes the title. Unknown titles get the
/// placeholder trends, never an error.
pub async fn handle_job_market(
    State(state): State<AppState>,
    Path(career_title): Path<String>,
) -> Json<Trends> {
    debug!(%career_title, "Job market trends requested");
    Json(state.job_market.trends(&career_title))
}
