use axum::{extract::State, Json};

use crate::models::career::CareerCategory;
use crate::state::AppState;

/// GET /api/career-categories
pub async fn handle_list_categories(State(state): State<AppState>) -> Json<Vec<CareerCategory>> {
    Json(state.catalog.list_categories().to_vec())
}
