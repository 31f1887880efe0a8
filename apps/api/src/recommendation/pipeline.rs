//! One recommendation request, start to finish:
//! profile → catalog → prompt → model → parse → assemble.
//!
//! Single-shot and stateless. At most one model call per request, no retries.

use tracing::{error, info, warn};
use uuid::Uuid;

use crate::recommendation::assembler::{assemble, Assembly, JobRecommendation};
use crate::recommendation::generator::MatchGenerator;
use crate::recommendation::parser::parse_matches;
use crate::recommendation::prompts::build_match_prompt;
use crate::recommendation::stores::{JobCatalog, ProfileStore};
use crate::recommendation::RecommendError;

pub async fn recommend_jobs(
    profiles: &dyn ProfileStore,
    catalog: &dyn JobCatalog,
    generator: &dyn MatchGenerator,
    candidate_id: Uuid,
) -> Result<Vec<JobRecommendation>, RecommendError> {
    let profile = profiles
        .load_profile(candidate_id)
        .await?
        .ok_or(RecommendError::ProfileNotFound(candidate_id))?;

    let jobs = catalog.load_open_jobs().await?;
    let prompt = build_match_prompt(&profile, &jobs)?;

    info!(
        "Requesting job matches for candidate {candidate_id} across {} jobs",
        jobs.len()
    );
    let raw = generator.generate_matches(&prompt).await?;

    let candidates = parse_matches(&raw).inspect_err(|e| {
        error!("Failed to extract recommendations: {e}. Raw response: {}", e.raw);
    })?;

    let Assembly {
        recommendations,
        rejected,
    } = assemble(&candidates, &jobs);

    for e in &rejected {
        warn!("Discarding model recommendation for candidate {candidate_id}: {e}");
    }

    if recommendations.is_empty() {
        if let Some(first) = rejected.first() {
            return Err(RecommendError::Assembly {
                count: rejected.len(),
                first: first.clone(),
            });
        }
    }

    info!(
        "Returning {} recommendations for candidate {candidate_id}",
        recommendations.len()
    );
    Ok(recommendations)
}
