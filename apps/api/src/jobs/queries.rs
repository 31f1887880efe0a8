use sqlx::PgPool;
use uuid::Uuid;

use crate::jobs::filter::{build_search, JobFilter, JOB_COLUMNS};
use crate::jobs::validation::NewJob;
use crate::models::job::JobPosting;

pub async fn list_jobs(pool: &PgPool, filter: &JobFilter) -> Result<Vec<JobPosting>, sqlx::Error> {
    build_search(filter)
        .build_query_as::<JobPosting>()
        .fetch_all(pool)
        .await
}

pub async fn find_job(pool: &PgPool, job_id: Uuid) -> Result<Option<JobPosting>, sqlx::Error> {
    sqlx::query_as::<_, JobPosting>(&format!("SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1"))
        .bind(job_id)
        .fetch_optional(pool)
        .await
}

pub async fn insert_job(pool: &PgPool, job: &NewJob) -> Result<Uuid, sqlx::Error> {
    let id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO jobs
            (id, title, company, location, job_type, skills, description, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, NOW(), NOW())
        "#,
    )
    .bind(id)
    .bind(&job.title)
    .bind(&job.company)
    .bind(&job.location)
    .bind(job.job_type.as_str())
    .bind(&job.skills)
    .bind(&job.description)
    .execute(pool)
    .await?;

    Ok(id)
}

/// Returns whether a row was updated.
pub async fn update_job(pool: &PgPool, job_id: Uuid, job: &NewJob) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE jobs
        SET title = $2, company = $3, location = $4, job_type = $5,
            skills = $6, description = $7, updated_at = NOW()
        WHERE id = $1
        "#,
    )
    .bind(job_id)
    .bind(&job.title)
    .bind(&job.company)
    .bind(&job.location)
    .bind(job.job_type.as_str())
    .bind(&job.skills)
    .bind(&job.description)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Returns whether a row was deleted.
pub async fn delete_job(pool: &PgPool, job_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
        .bind(job_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
