//! Axum route handlers for the Jobs API.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::auth::AdminUser;
use crate::errors::AppError;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::jobs::filter::{JobFilter, JobQuery};
use crate::jobs::queries::{delete_job, find_job, insert_job, list_jobs, update_job};
use crate::jobs::validation::{JobPayload, NewJob};
use crate::models::job::JobPosting;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobCreatedResponse {
    pub message: String,
    pub job_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /api/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<JobQuery>,
) -> Result<Json<Vec<JobPosting>>, AppError> {
    let filter = JobFilter::try_from(query)?;
    let jobs = list_jobs(&state.db, &filter).await?;
    Ok(Json(jobs))
}

/// GET /api/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    AppPath(job_id): AppPath<Uuid>,
) -> Result<Json<JobPosting>, AppError> {
    let job = find_job(&state.db, job_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;
    Ok(Json(job))
}

/// POST /api/admin/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    AppJson(payload): AppJson<JobPayload>,
) -> Result<(StatusCode, Json<JobCreatedResponse>), AppError> {
    let job = NewJob::try_from(payload)?;
    let job_id = insert_job(&state.db, &job).await?;
    info!("Admin {} created job {job_id} ({})", admin.id, job.title);

    Ok((
        StatusCode::CREATED,
        Json(JobCreatedResponse {
            message: "Job created successfully".to_string(),
            job_id,
        }),
    ))
}

/// PUT /api/admin/jobs/:id
pub async fn handle_update_job(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    AppPath(job_id): AppPath<Uuid>,
    AppJson(payload): AppJson<JobPayload>,
) -> Result<Json<MessageResponse>, AppError> {
    let job = NewJob::try_from(payload)?;
    if !update_job(&state.db, job_id, &job).await? {
        return Err(AppError::NotFound("Job not found".to_string()));
    }
    info!("Admin {} updated job {job_id}", admin.id);

    Ok(Json(MessageResponse {
        message: "Job updated successfully".to_string(),
    }))
}

/// DELETE /api/admin/jobs/:id
pub async fn handle_delete_job(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    AppPath(job_id): AppPath<Uuid>,
) -> Result<StatusCode, AppError> {
    if !delete_job(&state.db, job_id).await? {
        return Err(AppError::NotFound("Job not found".to_string()));
    }
    info!("Admin {} deleted job {job_id}", admin.id);
    Ok(StatusCode::NO_CONTENT)
}
