// Job recommendations: candidate profile + open jobs -> model ranking -> resolved postings.
// The model call goes through `generator::MatchGenerator`; nothing here talks HTTP directly.

pub mod assembler;
pub mod generator;
pub mod handlers;
pub mod parser;
pub mod pipeline;
pub mod prompts;
pub mod stores;

#[cfg(test)]
pub(crate) mod test_support;

use thiserror::Error;
use uuid::Uuid;

use crate::llm_client::LlmError;

pub use assembler::RecommendationAssemblyError;
pub use parser::RecommendationParseError;

/// Every way a recommendation request can fail.
#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("candidate profile {0} not found")]
    ProfileNotFound(Uuid),

    #[error("no jobs available")]
    NoJobsAvailable,

    #[error("model call failed: {0}")]
    Upstream(#[from] LlmError),

    #[error(transparent)]
    Parse(#[from] RecommendationParseError),

    #[error("all {count} model recommendations were rejected, first: {first}")]
    Assembly {
        count: usize,
        first: RecommendationAssemblyError,
    },

    #[error("store error: {0}")]
    Store(#[from] sqlx::Error),
}
