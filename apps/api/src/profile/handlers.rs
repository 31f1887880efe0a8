use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::models::user::UserRow;
use crate::profile::queries::{find_user, update_profile};
use crate::profile::validation::{ProfilePayload, ProfileUpdate};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProfileUpdatedResponse {
    pub message: String,
    pub profile: UserRow,
}

/// GET /api/user/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<UserRow>, AppError> {
    let profile = find_user(&state.db, user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Ok(Json(profile))
}

/// PUT /api/user/profile
pub async fn handle_update_profile(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(payload): AppJson<ProfilePayload>,
) -> Result<Json<ProfileUpdatedResponse>, AppError> {
    let update = ProfileUpdate::try_from(payload)?;

    let profile = update_profile(&state.db, user.id, &update)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    info!(
        "Profile updated for user {} ({} skills, resume link: {})",
        user.id,
        profile.skills.len(),
        profile.resume_url.is_some()
    );

    Ok(Json(ProfileUpdatedResponse {
        message: "Profile updated successfully".to_string(),
        profile,
    }))
}
