//! Fixtures and stub collaborators for recommendation tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::llm_client::LlmError;
use crate::models::job::{JobPosting, JobType};
use crate::models::user::{CandidateProfile, PreferredJobType};
use crate::recommendation::generator::MatchGenerator;
use crate::recommendation::stores::{JobCatalog, ProfileStore};

pub fn make_profile() -> CandidateProfile {
    CandidateProfile {
        name: "Ada Lovelace".to_string(),
        location: "London".to_string(),
        years_of_experience: 6,
        skills: ["Rust", "Tokio", "PostgreSQL"]
            .into_iter()
            .map(str::to_string)
            .collect(),
        preferred_job_type: PreferredJobType::Remote,
    }
}

pub fn make_job(title: &str) -> JobPosting {
    let now = Utc::now();
    JobPosting {
        id: Uuid::new_v4(),
        title: title.to_string(),
        company: "Acme".to_string(),
        location: "Remote".to_string(),
        job_type: JobType::Remote,
        skills: vec!["Rust".to_string(), "PostgreSQL".to_string()],
        description: "Build and operate backend services.".to_string(),
        created_at: now,
        updated_at: now,
    }
}

pub struct StubProfiles(Option<CandidateProfile>);

impl StubProfiles {
    pub fn with(profile: CandidateProfile) -> Self {
        Self(Some(profile))
    }

    pub fn empty() -> Self {
        Self(None)
    }
}

#[async_trait]
impl ProfileStore for StubProfiles {
    async fn load_profile(&self, _: Uuid) -> Result<Option<CandidateProfile>, sqlx::Error> {
        Ok(self.0.clone())
    }
}

pub struct StubCatalog(Vec<JobPosting>);

impl StubCatalog {
    pub fn new(jobs: Vec<JobPosting>) -> Self {
        Self(jobs)
    }
}

#[async_trait]
impl JobCatalog for StubCatalog {
    async fn load_open_jobs(&self) -> Result<Vec<JobPosting>, sqlx::Error> {
        Ok(self.0.clone())
    }
}

enum Reply {
    Text(String),
    Fail(fn() -> LlmError),
}

/// Returns a canned reply and records how it was called.
pub struct StubGenerator {
    reply: Reply,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl StubGenerator {
    pub fn replying(text: &str) -> Self {
        Self::new(Reply::Text(text.to_string()))
    }

    pub fn failing(make_error: fn() -> LlmError) -> Self {
        Self::new(Reply::Fail(make_error))
    }

    fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl MatchGenerator for StubGenerator {
    async fn generate_matches(&self, prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Fail(make_error) => Err(make_error()),
        }
    }
}
