use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::accounts::password::hash_password;
use crate::accounts::queries::{email_taken, insert_user};
use crate::accounts::validation::{NewAccount, RegistrationPayload};
use crate::db::is_unique_violation;
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredResponse {
    pub message: String,
    pub user_id: Uuid,
}

fn already_exists() -> AppError {
    AppError::Conflict("User already exists".to_string())
}

/// POST /api/auth/register
pub async fn handle_register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegistrationPayload>,
) -> Result<(StatusCode, Json<RegisteredResponse>), AppError> {
    let NewAccount {
        email,
        password,
        profile,
    } = NewAccount::try_from(payload)?;

    if email_taken(&state.db, &email).await? {
        return Err(already_exists());
    }

    let password_hash = hash_password(password).await?;

    let user_id = match insert_user(&state.db, &email, &password_hash, &profile).await {
        Ok(id) => id,
        Err(e) if is_unique_violation(&e) => return Err(already_exists()),
        Err(e) => return Err(e.into()),
    };

    info!("Registered user {user_id} ({} skills)", profile.skills.len());

    Ok((
        StatusCode::CREATED,
        Json(RegisteredResponse {
            message: "User created successfully".to_string(),
            user_id,
        }),
    ))
}
