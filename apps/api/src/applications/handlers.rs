//! Axum route handlers for the Applications API.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::applications::queries::{
    find_application, find_status, has_applied, insert_application, list_applications,
    set_status, ApplicationListing, NewApplication,
};
use crate::applications::workflow::check_transition;
use crate::auth::{AdminUser, AuthUser};
use crate::db::is_unique_violation;
use crate::errors::AppError;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::jobs::queries::find_job;
use crate::models::application::{ApplicationStatus, ApplicationView};
use crate::profile::queries::find_user;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplyRequest {
    pub job_id: Option<Uuid>,
    pub cover_letter: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyResponse {
    pub message: String,
    pub application_id: Uuid,
    pub includes_links: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationQuery {
    pub job_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct StatusUpdateResponse {
    pub message: String,
    pub status: ApplicationStatus,
}

/// Candidates only ever see their own applications.
pub fn listing_for(user: &AuthUser, job_id: Option<Uuid>) -> ApplicationListing {
    ApplicationListing {
        applicant: (!user.is_admin()).then_some(user.id),
        job_id,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/applications
///
/// Copies the applicant's resume and portfolio links onto the application.
pub async fn handle_apply(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(request): AppJson<ApplyRequest>,
) -> Result<(StatusCode, Json<ApplyResponse>), AppError> {
    let cover_letter = request.cover_letter.trim();
    let Some(job_id) = request.job_id.filter(|_| !cover_letter.is_empty()) else {
        return Err(AppError::Validation("Missing required fields".to_string()));
    };

    if find_job(&state.db, job_id).await?.is_none() {
        return Err(AppError::NotFound("Job not found".to_string()));
    }

    if has_applied(&state.db, user.id, job_id).await? {
        return Err(AppError::Conflict(
            "You have already applied for this job".to_string(),
        ));
    }

    let applicant = find_user(&state.db, user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let new_application = NewApplication {
        user_id: user.id,
        job_id,
        cover_letter,
        resume_url: applicant.resume_url.as_deref(),
        portfolio_url: applicant.portfolio_url.as_deref(),
    };
    let includes_links =
        new_application.resume_url.is_some() || new_application.portfolio_url.is_some();

    let application_id = match insert_application(&state.db, &new_application).await {
        Ok(id) => id,
        // Lost a race with a concurrent submission for the same job.
        Err(e) if is_unique_violation(&e) => {
            return Err(AppError::Conflict(
                "You have already applied for this job".to_string(),
            ))
        }
        Err(e) => return Err(e.into()),
    };

    info!("User {} applied to job {job_id} (application {application_id})", user.id);

    Ok((
        StatusCode::CREATED,
        Json(ApplyResponse {
            message: "Application submitted successfully".to_string(),
            application_id,
            includes_links,
        }),
    ))
}

/// GET /api/applications?jobId=
pub async fn handle_list_applications(
    State(state): State<AppState>,
    user: AuthUser,
    AppQuery(query): AppQuery<ApplicationQuery>,
) -> Result<Json<Vec<ApplicationView>>, AppError> {
    let rows = list_applications(&state.db, &listing_for(&user, query.job_id)).await?;
    Ok(Json(rows.into_iter().map(ApplicationView::from).collect()))
}

/// GET /api/admin/applications/:id
pub async fn handle_get_application(
    State(state): State<AppState>,
    _admin: AdminUser,
    AppPath(application_id): AppPath<Uuid>,
) -> Result<Json<ApplicationView>, AppError> {
    let row = find_application(&state.db, application_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Application not found".to_string()))?;
    Ok(Json(row.into()))
}

/// PATCH /api/admin/applications/:id
pub async fn handle_update_status(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    AppPath(application_id): AppPath<Uuid>,
    AppJson(request): AppJson<StatusUpdateRequest>,
) -> Result<Json<StatusUpdateResponse>, AppError> {
    let next: ApplicationStatus = request
        .status
        .parse()
        .map_err(|_| AppError::Validation("Invalid status".to_string()))?;

    let current = find_status(&state.db, application_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Application not found".to_string()))?;

    check_transition(current, next)?;

    if current != next {
        if !set_status(&state.db, application_id, current, next).await? {
            return Err(AppError::Conflict(
                "Application status was changed by another request".to_string(),
            ));
        }
        info!(
            "Admin {} moved application {application_id} from {current} to {next}",
            admin.id
        );
    }

    Ok(Json(StatusUpdateResponse {
        message: "Application status updated successfully".to_string(),
        status: next,
    }))
}
