use sqlx::PgPool;
use uuid::Uuid;

use crate::models::user::Role;
use crate::profile::validation::ProfileUpdate;

pub async fn email_taken(pool: &PgPool, email: &str) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM users WHERE email = $1)")
        .bind(email)
        .fetch_one(pool)
        .await
}

/// Inserts a candidate account and returns its id. New accounts always get the `user` role.
pub async fn insert_user(
    pool: &PgPool,
    email: &str,
    password_hash: &str,
    profile: &ProfileUpdate,
) -> Result<Uuid, sqlx::Error> {
    let id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO users
            (id, name, email, password_hash, location, years_of_experience, skills,
             preferred_job_type, role, resume_url, portfolio_url, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, NOW(), NOW())
        "#,
    )
    .bind(id)
    .bind(&profile.name)
    .bind(email)
    .bind(password_hash)
    .bind(&profile.location)
    .bind(profile.years_of_experience)
    .bind(&profile.skills)
    .bind(profile.preferred_job_type.as_str())
    .bind(Role::User.as_str())
    .bind(&profile.resume_url)
    .bind(&profile.portfolio_url)
    .execute(pool)
    .await?;

    Ok(id)
}
