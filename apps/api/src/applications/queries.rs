use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::models::application::{ApplicationDetailRow, ApplicationStatus};

/// Application joined with its job and applicant. Links fall back to the
/// applicant's current profile when none were captured at apply time.
const DETAIL_SELECT: &str = r#"
    SELECT a.id, a.status, a.cover_letter,
           COALESCE(a.resume_url, u.resume_url) AS resume_url,
           COALESCE(a.portfolio_url, u.portfolio_url) AS portfolio_url,
           a.created_at, a.updated_at,
           j.id AS job_id, j.title AS job_title, j.company AS job_company,
           u.id AS user_id, u.name AS user_name, u.email AS user_email
    FROM applications a
    JOIN jobs j ON j.id = a.job_id
    JOIN users u ON u.id = a.user_id
"#;

/// Which applications a listing covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplicationListing {
    /// `None` lists every applicant (admin view).
    pub applicant: Option<Uuid>,
    pub job_id: Option<Uuid>,
}

pub fn build_listing(listing: &ApplicationListing) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(DETAIL_SELECT);
    qb.push(" WHERE TRUE");
    if let Some(applicant) = listing.applicant {
        qb.push(" AND a.user_id = ").push_bind(applicant);
    }
    if let Some(job_id) = listing.job_id {
        qb.push(" AND a.job_id = ").push_bind(job_id);
    }
    qb.push(" ORDER BY a.created_at DESC");
    qb
}

pub async fn list_applications(
    pool: &PgPool,
    listing: &ApplicationListing,
) -> Result<Vec<ApplicationDetailRow>, sqlx::Error> {
    build_listing(listing)
        .build_query_as::<ApplicationDetailRow>()
        .fetch_all(pool)
        .await
}

pub async fn find_application(
    pool: &PgPool,
    application_id: Uuid,
) -> Result<Option<ApplicationDetailRow>, sqlx::Error> {
    sqlx::query_as::<_, ApplicationDetailRow>(&format!("{DETAIL_SELECT} WHERE a.id = $1"))
        .bind(application_id)
        .fetch_optional(pool)
        .await
}

pub async fn has_applied(pool: &PgPool, user_id: Uuid, job_id: Uuid) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (SELECT 1 FROM applications WHERE user_id = $1 AND job_id = $2)",
    )
    .bind(user_id)
    .bind(job_id)
    .fetch_one(pool)
    .await
}

pub struct NewApplication<'a> {
    pub user_id: Uuid,
    pub job_id: Uuid,
    pub cover_letter: &'a str,
    pub resume_url: Option<&'a str>,
    pub portfolio_url: Option<&'a str>,
}

pub async fn insert_application(
    pool: &PgPool,
    application: &NewApplication<'_>,
) -> Result<Uuid, sqlx::Error> {
    let id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO applications
            (id, user_id, job_id, cover_letter, status, resume_url, portfolio_url, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, NOW(), NOW())
        "#,
    )
    .bind(id)
    .bind(application.user_id)
    .bind(application.job_id)
    .bind(application.cover_letter)
    .bind(ApplicationStatus::Pending.as_str())
    .bind(application.resume_url)
    .bind(application.portfolio_url)
    .execute(pool)
    .await?;

    Ok(id)
}

pub async fn find_status(
    pool: &PgPool,
    application_id: Uuid,
) -> Result<Option<ApplicationStatus>, sqlx::Error> {
    let status: Option<String> =
        sqlx::query_scalar("SELECT status FROM applications WHERE id = $1")
            .bind(application_id)
            .fetch_optional(pool)
            .await?;

    status
        .map(|s| s.parse().map_err(|e| sqlx::Error::Decode(Box::new(e))))
        .transpose()
}

/// Compare-and-set: only updates while the row still has status `from`.
/// Returns whether the row was updated.
pub async fn set_status(
    pool: &PgPool,
    application_id: Uuid,
    from: ApplicationStatus,
    to: ApplicationStatus,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE applications SET status = $3, updated_at = NOW() WHERE id = $1 AND status = $2",
    )
    .bind(application_id)
    .bind(from.as_str())
    .bind(to.as_str())
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
