//! Recommendation Assembler: resolves parsed `jobIndex` values back to postings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::job::JobPosting;
use crate::recommendation::parser::MatchCandidate;

/// Final output: a posting with the model's score and justification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecommendation {
    pub job: JobPosting,
    pub match_score: i64,
    pub match_reason: String,
}

/// A model entry that could not be mapped to a posting.
/// `entry` is the 0-based position in the model's array.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecommendationAssemblyError {
    #[error("entry {entry}: jobIndex {job_index} is outside 1..={job_count}")]
    IndexOutOfRange {
        entry: usize,
        job_index: i64,
        job_count: usize,
    },

    #[error("entry {entry}: missing or non-numeric {field}")]
    MissingField { entry: usize, field: &'static str },
}

/// Result of assembly. Rejected entries are skipped, not fatal.
#[derive(Debug, Default)]
pub struct Assembly {
    pub recommendations: Vec<JobRecommendation>,
    pub rejected: Vec<RecommendationAssemblyError>,
}

/// Maps each candidate to `jobs[jobIndex - 1]`, keeping the model's order.
///
/// `jobs` must be the same slice, in the same order, that the prompt was built from.
pub fn assemble(candidates: &[MatchCandidate], jobs: &[JobPosting]) -> Assembly {
    let mut assembly = Assembly::default();

    for (entry, candidate) in candidates.iter().enumerate() {
        match resolve(entry, candidate, jobs) {
            Ok(recommendation) => assembly.recommendations.push(recommendation),
            Err(e) => assembly.rejected.push(e),
        }
    }

    assembly
}

fn resolve(
    entry: usize,
    candidate: &MatchCandidate,
    jobs: &[JobPosting],
) -> Result<JobRecommendation, RecommendationAssemblyError> {
    let job_index = candidate
        .job_index
        .ok_or(RecommendationAssemblyError::MissingField {
            entry,
            field: "jobIndex",
        })?;
    let match_score = candidate
        .match_score
        .ok_or(RecommendationAssemblyError::MissingField {
            entry,
            field: "matchScore",
        })?;

    let job = usize::try_from(job_index)
        .ok()
        .and_then(|i| i.checked_sub(1))
        .and_then(|i| jobs.get(i))
        .ok_or(RecommendationAssemblyError::IndexOutOfRange {
            entry,
            job_index,
            job_count: jobs.len(),
        })?;

    Ok(JobRecommendation {
        job: job.clone(),
        match_score,
        match_reason: candidate.match_reason.clone().unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::test_support::make_job;

    fn candidate(job_index: i64, match_score: i64) -> MatchCandidate {
        MatchCandidate {
            job_index: Some(job_index),
            match_score: Some(match_score),
            match_reason: Some(format!("reason for {job_index}")),
        }
    }

    fn abc() -> Vec<JobPosting> {
        vec![make_job("A"), make_job("B"), make_job("C")]
    }

    #[test]
    fn test_index_two_resolves_to_second_job() {
        let jobs = abc();
        let assembly = assemble(&[candidate(2, 80)], &jobs);
        assert!(assembly.rejected.is_empty());
        assert_eq!(assembly.recommendations.len(), 1);
        assert_eq!(assembly.recommendations[0].job.title, "B");
        assert_eq!(assembly.recommendations[0].job.id, jobs[1].id);
    }

    #[test]
    fn test_out_of_range_index_is_reported_not_panicking() {
        let assembly = assemble(&[candidate(5, 90)], &abc());
        assert!(assembly.recommendations.is_empty());
        assert_eq!(
            assembly.rejected,
            vec![RecommendationAssemblyError::IndexOutOfRange {
                entry: 0,
                job_index: 5,
                job_count: 3,
            }]
        );
    }

    #[test]
    fn test_zero_and_negative_indices_are_rejected() {
        let assembly = assemble(&[candidate(0, 90), candidate(-1, 90)], &abc());
        assert!(assembly.recommendations.is_empty());
        assert_eq!(assembly.rejected.len(), 2);
    }

    #[test]
    fn test_valid_entries_survive_alongside_rejected_ones() {
        let assembly = assemble(&[candidate(3, 95), candidate(9, 90), candidate(1, 70)], &abc());
        let titles: Vec<&str> = assembly
            .recommendations
            .iter()
            .map(|r| r.job.title.as_str())
            .collect();
        assert_eq!(titles, vec!["C", "A"]);
        assert_eq!(assembly.rejected.len(), 1);
    }

    #[test]
    fn test_model_order_is_preserved() {
        // Lower score first on purpose: no re-sorting happens here.
        let assembly = assemble(&[candidate(1, 60), candidate(3, 99), candidate(2, 80)], &abc());
        let scores: Vec<i64> = assembly
            .recommendations
            .iter()
            .map(|r| r.match_score)
            .collect();
        assert_eq!(scores, vec![60, 99, 80]);
    }

    #[test]
    fn test_missing_score_is_rejected() {
        let entry = MatchCandidate {
            job_index: Some(1),
            match_score: None,
            match_reason: Some("no score".to_string()),
        };
        let assembly = assemble(&[entry], &abc());
        assert_eq!(
            assembly.rejected,
            vec![RecommendationAssemblyError::MissingField {
                entry: 0,
                field: "matchScore",
            }]
        );
    }

    #[test]
    fn test_missing_reason_defaults_to_empty() {
        let entry = MatchCandidate {
            job_index: Some(1),
            match_score: Some(81),
            match_reason: None,
        };
        let assembly = assemble(&[entry], &abc());
        assert_eq!(assembly.recommendations[0].match_reason, "");
    }

    #[test]
    fn test_recommendation_serializes_with_camel_case_keys() {
        let assembly = assemble(&[candidate(1, 85)], &abc());
        let value = serde_json::to_value(&assembly.recommendations[0]).unwrap();
        assert_eq!(value["matchScore"], 85);
        assert_eq!(value["matchReason"], "reason for 1");
        assert_eq!(value["job"]["title"], "A");
    }
}
