//! Match Request Builder: turns a profile and the job catalog into one model prompt.

use crate::llm_client::prompts::RAW_JSON_ARRAY_ONLY;
use crate::models::job::JobPosting;
use crate::models::user::CandidateProfile;
use crate::recommendation::RecommendError;

/// How many postings the model is asked to rank.
pub const TOP_MATCHES: usize = 3;

const MATCH_PREAMBLE: &str = "I need to match a job seeker with the most suitable jobs \
    based on their profile and available job listings.";

/// Output contract for the model. Replace `{top}` before sending.
const MATCH_INSTRUCTIONS: &str = r#"Please analyze the job seeker's profile and the available jobs, then recommend the top {top} most suitable jobs for this candidate.
For each recommendation, provide:
1. The job number (as listed above)
2. A match score from 0-100
3. A brief explanation of why this job is a good match

Format your response as a JSON array with this structure:
[
  {
    "jobIndex": 1,
    "matchScore": 85,
    "matchReason": "Strong skill match in JavaScript and React, preferred remote work available"
  }
]"#;

/// Builds the ranking prompt.
///
/// Jobs are listed as `Job 1..=N` in the order given; the assembler resolves
/// `jobIndex` against the same slice. Posting ids are never sent to the model.
pub fn build_match_prompt(
    profile: &CandidateProfile,
    jobs: &[JobPosting],
) -> Result<String, RecommendError> {
    if jobs.is_empty() {
        return Err(RecommendError::NoJobsAvailable);
    }

    let skills: Vec<&str> = profile.skills.iter().map(String::as_str).collect();

    let mut prompt = format!(
        "{MATCH_PREAMBLE}\n\n\
        Job Seeker Profile:\n\
        - Name: {}\n\
        - Location: {}\n\
        - Years of Experience: {}\n\
        - Skills: {}\n\
        - Preferred Job Type: {}\n\n\
        Available Jobs:\n",
        profile.name,
        profile.location,
        profile.years_of_experience,
        skills.join(", "),
        profile.preferred_job_type,
    );

    for (i, job) in jobs.iter().enumerate() {
        prompt.push_str(&format_job(i + 1, job));
    }

    prompt.push('\n');
    prompt.push_str(&MATCH_INSTRUCTIONS.replace("{top}", &TOP_MATCHES.to_string()));
    prompt.push_str("\n\n");
    prompt.push_str(RAW_JSON_ARRAY_ONLY);

    Ok(prompt)
}

fn format_job(index: usize, job: &JobPosting) -> String {
    format!(
        "\nJob {index}:\n\
        - Title: {}\n\
        - Company: {}\n\
        - Location: {}\n\
        - Job Type: {}\n\
        - Skills Required: {}\n\
        - Description: {}\n",
        job.title,
        job.company,
        job.location,
        job.job_type,
        job.skills.join(", "),
        job.description,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::test_support::{make_job, make_profile};

    #[test]
    fn test_empty_catalog_is_rejected() {
        let err = build_match_prompt(&make_profile(), &[]).unwrap_err();
        assert!(matches!(err, RecommendError::NoJobsAvailable));
    }

    #[test]
    fn test_jobs_are_numbered_from_one_in_order() {
        let jobs = vec![
            make_job("Alpha Engineer"),
            make_job("Beta Engineer"),
            make_job("Gamma Engineer"),
        ];
        let prompt = build_match_prompt(&make_profile(), &jobs).unwrap();

        let alpha = prompt.find("Job 1:\n- Title: Alpha Engineer").unwrap();
        let beta = prompt.find("Job 2:\n- Title: Beta Engineer").unwrap();
        let gamma = prompt.find("Job 3:\n- Title: Gamma Engineer").unwrap();
        assert!(alpha < beta && beta < gamma);
        assert!(!prompt.contains("Job 0:"));
        assert!(!prompt.contains("Job 4:"));
    }

    #[test]
    fn test_prompt_states_profile() {
        let prompt = build_match_prompt(&make_profile(), &[make_job("Alpha Engineer")]).unwrap();
        assert!(prompt.contains("- Name: Ada Lovelace"));
        assert!(prompt.contains("- Years of Experience: 6"));
        // BTreeSet order
        assert!(prompt.contains("- Skills: PostgreSQL, Rust, Tokio"));
        assert!(prompt.contains("- Preferred Job Type: remote"));
    }

    #[test]
    fn test_prompt_lists_job_fields_but_not_ids() {
        let job = make_job("Alpha Engineer");
        let prompt = build_match_prompt(&make_profile(), std::slice::from_ref(&job)).unwrap();
        assert!(prompt.contains("- Skills Required: Rust, PostgreSQL"));
        assert!(prompt.contains("- Job Type: remote"));
        assert!(prompt.contains("- Company: Acme"));
        assert!(!prompt.contains(&job.id.to_string()));
    }

    #[test]
    fn test_prompt_demands_raw_json_array() {
        let prompt = build_match_prompt(&make_profile(), &[make_job("Alpha Engineer")]).unwrap();
        assert!(prompt.contains("ONLY the raw JSON array without markdown formatting"));
        assert!(prompt.contains("top 3 most suitable jobs"));
        assert!(prompt.contains("\"jobIndex\""));
        assert!(prompt.contains("\"matchScore\""));
        assert!(prompt.contains("\"matchReason\""));
    }
}
