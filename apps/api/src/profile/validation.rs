use reqwest::Url;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::user::PreferredJobType;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfilePayload {
    pub name: String,
    pub location: String,
    pub years_of_experience: Option<i64>,
    pub skills: Vec<String>,
    pub preferred_job_type: String,
    pub resume_url: Option<String>,
    pub portfolio_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileUpdate {
    pub name: String,
    pub location: String,
    pub years_of_experience: i32,
    pub skills: Vec<String>,
    pub preferred_job_type: PreferredJobType,
    pub resume_url: Option<String>,
    pub portfolio_url: Option<String>,
}

impl TryFrom<ProfilePayload> for ProfileUpdate {
    type Error = AppError;

    fn try_from(payload: ProfilePayload) -> Result<Self, AppError> {
        let name = payload.name.trim();
        let location = payload.location.trim();
        let preferred = payload.preferred_job_type.trim();

        let Some(years) = payload.years_of_experience else {
            return Err(AppError::Validation("Missing required fields".to_string()));
        };
        if name.is_empty() || location.is_empty() || preferred.is_empty() {
            return Err(AppError::Validation("Missing required fields".to_string()));
        }

        let years_of_experience = i32::try_from(years)
            .ok()
            .filter(|y| *y >= 0)
            .ok_or_else(|| {
                AppError::Validation("yearsOfExperience must be a non-negative number".to_string())
            })?;

        let preferred_job_type = preferred
            .parse::<PreferredJobType>()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let mut skills: Vec<String> = Vec::new();
        for skill in payload.skills.iter().map(|s| s.trim()) {
            if !skill.is_empty() && !skills.iter().any(|s| s == skill) {
                skills.push(skill.to_string());
            }
        }

        Ok(ProfileUpdate {
            name: name.to_string(),
            location: location.to_string(),
            years_of_experience,
            skills,
            preferred_job_type,
            resume_url: validate_link(payload.resume_url, "resume")?,
            portfolio_url: validate_link(payload.portfolio_url, "portfolio")?,
        })
    }
}

/// Empty clears the link; anything else must be an absolute http(s) URL.
fn validate_link(link: Option<String>, label: &str) -> Result<Option<String>, AppError> {
    let Some(link) = link.map(|l| l.trim().to_string()).filter(|l| !l.is_empty()) else {
        return Ok(None);
    };

    match Url::parse(&link) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(Some(link)),
        _ => Err(AppError::Validation(format!("Invalid {label} URL"))),
    }
}
