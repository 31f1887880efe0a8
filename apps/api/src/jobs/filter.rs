//! Listing filters and the SQL they compile to.

use serde::Deserialize;
use sqlx::{Postgres, QueryBuilder};

use crate::errors::AppError;
use crate::models::job::JobType;

pub const JOB_COLUMNS: &str =
    "id, title, company, location, job_type, skills, description, created_at, updated_at";

/// Raw `?title=&location=&skills=a,b&jobType=` query string.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobQuery {
    pub title: Option<String>,
    pub location: Option<String>,
    pub skills: Option<String>,
    pub job_type: Option<String>,
}

/// Validated filter. The default matches every posting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobFilter {
    /// Case-insensitive substring of the title.
    pub title: Option<String>,
    /// Case-insensitive substring of the location.
    pub location: Option<String>,
    /// Postings requiring at least one of these.
    pub skills: Vec<String>,
    pub job_type: Option<JobType>,
}

impl TryFrom<JobQuery> for JobFilter {
    type Error = AppError;

    fn try_from(query: JobQuery) -> Result<Self, AppError> {
        let job_type = non_blank(query.job_type)
            .map(|t| {
                t.parse::<JobType>()
                    .map_err(|e| AppError::Validation(e.to_string()))
            })
            .transpose()?;

        let skills = query
            .skills
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Ok(JobFilter {
            title: non_blank(query.title),
            location: non_blank(query.location),
            skills,
            job_type,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// `%needle%` with LIKE metacharacters escaped.
fn contains_pattern(needle: &str) -> String {
    let escaped = needle
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

/// Builds the listing query, newest postings first.
pub fn build_search(filter: &JobFilter) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(format!("SELECT {JOB_COLUMNS} FROM jobs WHERE TRUE"));

    if let Some(title) = &filter.title {
        qb.push(" AND title ILIKE ")
            .push_bind(contains_pattern(title));
    }
    if let Some(location) = &filter.location {
        qb.push(" AND location ILIKE ")
            .push_bind(contains_pattern(location));
    }
    if !filter.skills.is_empty() {
        qb.push(" AND skills && ").push_bind(filter.skills.clone());
    }
    if let Some(job_type) = filter.job_type {
        qb.push(" AND job_type = ").push_bind(job_type.as_str());
    }

    qb.push(" ORDER BY created_at DESC");
    qb
}
