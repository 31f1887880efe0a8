use async_trait::async_trait;

use crate::llm_client::{LlmClient, LlmError};

/// The external ranking capability: one prompt in, the model's raw text out.
///
/// Carried in `AppState` as `Arc<dyn MatchGenerator>` so the pipeline can run
/// against canned responses in tests.
#[async_trait]
pub trait MatchGenerator: Send + Sync {
    async fn generate_matches(&self, prompt: &str) -> Result<String, LlmError>;
}

#[async_trait]
impl MatchGenerator for LlmClient {
    async fn generate_matches(&self, prompt: &str) -> Result<String, LlmError> {
        self.generate(prompt).await
    }
}
