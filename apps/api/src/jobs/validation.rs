use serde::Deserialize;

use crate::errors::AppError;
use crate::models::job::JobType;

/// Body of admin create/update requests. Fields default so that a missing
/// field reports as a validation error rather than a JSON rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobPayload {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub skills: Vec<String>,
    pub job_type: String,
}

/// A posting ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub skills: Vec<String>,
    pub job_type: JobType,
}

impl TryFrom<JobPayload> for NewJob {
    type Error = AppError;

    fn try_from(payload: JobPayload) -> Result<Self, AppError> {
        let skills: Vec<String> = payload
            .skills
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        let required = [
            &payload.title,
            &payload.company,
            &payload.location,
            &payload.description,
            &payload.job_type,
        ];
        if required.iter().any(|f| f.trim().is_empty()) || skills.is_empty() {
            return Err(AppError::Validation("Missing required fields".to_string()));
        }

        let job_type = payload
            .job_type
            .trim()
            .parse::<JobType>()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        Ok(NewJob {
            title: payload.title.trim().to_string(),
            company: payload.company.trim().to_string(),
            location: payload.location.trim().to_string(),
            description: payload.description.trim().to_string(),
            skills,
            job_type,
        })
    }
}
