use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::{ProfilePayload, StoredProfile, UserProfile};
use crate::state::AppState;

/// POST /api/user/profile
pub async fn handle_create_profile(
    State(state): State<AppState>,
    payload: Result<Json<ProfilePayload>, JsonRejection>,
) -> Result<(StatusCode, Json<StoredProfile>), AppError> {
    let Json(payload) = payload?;
    let profile = UserProfile::try_from(payload)?;
    let stored = state.profiles.create(profile).await?;
    info!(profile_id = %stored.id, "Profile saved");
    Ok((StatusCode::CREATED, Json(stored)))
}

/// GET /api/user/profile/:id
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StoredProfile>, AppError> {
    state
        .profiles
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Profile {id} not found")))
}

/// PUT /api/user/profile/:id
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<ProfilePayload>, JsonRejection>,
) -> Result<Json<StoredProfile>, AppError> {
    let Json(payload) = payload?;
    let profile = UserProfile::try_from(payload)?;
    let stored = state.profiles.update(id, profile).await?;
    info!(profile_id = %id, "Profile updated");
    Ok(Json(stored))
}
