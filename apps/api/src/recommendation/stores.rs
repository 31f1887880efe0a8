//! Profile and job catalog loaders: the pipeline's two read-side collaborators.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::jobs::filter::JobFilter;
use crate::jobs::queries::list_jobs;
use crate::models::job::JobPosting;
use crate::models::user::CandidateProfile;
use crate::profile::queries::find_user;

#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// `Ok(None)` when no such candidate exists.
    async fn load_profile(&self, candidate_id: Uuid)
        -> Result<Option<CandidateProfile>, sqlx::Error>;
}

#[async_trait]
pub trait JobCatalog: Send + Sync {
    /// Every open posting, newest first. May be empty.
    async fn load_open_jobs(&self) -> Result<Vec<JobPosting>, sqlx::Error>;
}

pub struct PgProfileStore {
    pool: PgPool,
}

impl PgProfileStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn load_profile(
        &self,
        candidate_id: Uuid,
    ) -> Result<Option<CandidateProfile>, sqlx::Error> {
        Ok(find_user(&self.pool, candidate_id)
            .await?
            .map(CandidateProfile::from))
    }
}

pub struct PgJobCatalog {
    pool: PgPool,
}

impl PgJobCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobCatalog for PgJobCatalog {
    async fn load_open_jobs(&self) -> Result<Vec<JobPosting>, sqlx::Error> {
        list_jobs(&self.pool, &JobFilter::default()).await
    }
}
