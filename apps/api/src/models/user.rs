use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::UnknownVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl FromStr for Role {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(UnknownVariant::new("role", other)),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Work arrangement a candidate is looking for. `Any` accepts every posting type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferredJobType {
    Remote,
    Onsite,
    Hybrid,
    Any,
}

impl PreferredJobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreferredJobType::Remote => "remote",
            PreferredJobType::Onsite => "onsite",
            PreferredJobType::Hybrid => "hybrid",
            PreferredJobType::Any => "any",
        }
    }
}

impl fmt::Display for PreferredJobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreferredJobType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "remote" => Ok(PreferredJobType::Remote),
            "onsite" => Ok(PreferredJobType::Onsite),
            "hybrid" => Ok(PreferredJobType::Hybrid),
            "any" => Ok(PreferredJobType::Any),
            other => Err(UnknownVariant::new("preferred job type", other)),
        }
    }
}

impl TryFrom<String> for PreferredJobType {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A row of `users` without credentials. `password_hash` is never selected.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub location: String,
    pub years_of_experience: i32,
    pub skills: Vec<String>,
    #[sqlx(try_from = "String")]
    pub preferred_job_type: PreferredJobType,
    #[sqlx(try_from = "String")]
    pub role: Role,
    pub resume_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Snapshot of a job seeker used as matching input. Carries no identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateProfile {
    pub name: String,
    pub location: String,
    pub years_of_experience: u32,
    pub skills: BTreeSet<String>,
    pub preferred_job_type: PreferredJobType,
}

impl From<UserRow> for CandidateProfile {
    fn from(row: UserRow) -> Self {
        Self {
            name: row.name,
            location: row.location,
            years_of_experience: u32::try_from(row.years_of_experience).unwrap_or(0),
            skills: row.skills.into_iter().collect(),
            preferred_job_type: row.preferred_job_type,
        }
    }
}
