use sqlx::PgPool;
use uuid::Uuid;

use crate::models::user::UserRow;
use crate::profile::validation::ProfileUpdate;

/// Every `users` column except credentials.
pub const USER_COLUMNS: &str = "id, name, email, location, years_of_experience, skills, \
    preferred_job_type, role, resume_url, portfolio_url, created_at, updated_at";

pub async fn find_user(pool: &PgPool, user_id: Uuid) -> Result<Option<UserRow>, sqlx::Error> {
    sqlx::query_as::<_, UserRow>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

/// Returns the updated row, or `None` if the user does not exist.
pub async fn update_profile(
    pool: &PgPool,
    user_id: Uuid,
    update: &ProfileUpdate,
) -> Result<Option<UserRow>, sqlx::Error> {
    sqlx::query_as::<_, UserRow>(&format!(
        r#"
        UPDATE users
        SET name = $2, location = $3, years_of_experience = $4, skills = $5,
            preferred_job_type = $6, resume_url = $7, portfolio_url = $8, updated_at = NOW()
        WHERE id = $1
        RETURNING {USER_COLUMNS}
        "#
    ))
    .bind(user_id)
    .bind(&update.name)
    .bind(&update.location)
    .bind(update.years_of_experience)
    .bind(&update.skills)
    .bind(update.preferred_job_type.as_str())
    .bind(&update.resume_url)
    .bind(&update.portfolio_url)
    .fetch_optional(pool)
    .await
}
