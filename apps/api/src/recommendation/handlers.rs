//! Axum route handler for job recommendations.

use axum::{extract::State, Json};

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::recommendation::assembler::JobRecommendation;
use crate::recommendation::pipeline::recommend_jobs;
use crate::state::AppState;

/// GET /api/jobs/recommendations
///
/// Ranks the open jobs against the caller's profile. Results keep the model's
/// order; filtering by score is left to the client.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<JobRecommendation>>, AppError> {
    let recommendations = recommend_jobs(
        state.profiles.as_ref(),
        state.catalog.as_ref(),
        state.matcher.as_ref(),
        user.id,
    )
    .await?;

    Ok(Json(recommendations))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header::AUTHORIZATION, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::auth::issue_token;
    use crate::config::Config;
    use crate::llm_client::test_server::{serve_once, Reply};
    use crate::llm_client::{LlmClient, LlmError};
    use crate::models::user::Role;
    use crate::recommendation::test_support::{
        make_job, make_profile, StubCatalog, StubGenerator, StubProfiles,
    };
    use crate::routes::build_router;
    use crate::state::test_support::{test_config, test_state, TEST_JWT_SECRET};
    use crate::state::AppState;

    const PATH: &str = "/api/jobs/recommendations";

    async fn get(state: AppState, token: Option<String>) -> (StatusCode, Value) {
        let mut request = Request::builder().uri(PATH);
        if let Some(token) = token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        let response = build_router(state)
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn user_token() -> Option<String> {
        Some(issue_token(Uuid::new_v4(), Role::User, TEST_JWT_SECRET))
    }

    #[tokio::test]
    async fn test_requires_authentication() {
        let state = test_state(
            StubProfiles::with(make_profile()),
            StubCatalog::new(vec![make_job("A")]),
            StubGenerator::replying("[]"),
        );
        let (status, body) = get(state, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Unauthorized");
    }

    #[tokio::test]
    async fn test_returns_resolved_recommendations() {
        let state = test_state(
            StubProfiles::with(make_profile()),
            StubCatalog::new(vec![make_job("A"), make_job("B")]),
            StubGenerator::replying(
                r#"[{"jobIndex":2,"matchScore":92,"matchReason":"Rust everywhere"}]"#,
            ),
        );
        let (status, body) = get(state, user_token()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["job"]["title"], "B");
        assert_eq!(body[0]["matchScore"], 92);
        assert_eq!(body[0]["matchReason"], "Rust everywhere");
    }

    #[tokio::test]
    async fn test_no_jobs_is_404() {
        let state = test_state(
            StubProfiles::with(make_profile()),
            StubCatalog::new(vec![]),
            StubGenerator::replying("[]"),
        );
        let (status, body) = get(state, user_token()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "No jobs available");
    }

    #[tokio::test]
    async fn test_unknown_profile_is_404() {
        let state = test_state(
            StubProfiles::empty(),
            StubCatalog::new(vec![make_job("A")]),
            StubGenerator::replying("[]"),
        );
        let (status, body) = get(state, user_token()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "User not found");
    }

    #[tokio::test]
    async fn test_unparsable_output_is_generic_500() {
        let state = test_state(
            StubProfiles::with(make_profile()),
            StubCatalog::new(vec![make_job("A")]),
            StubGenerator::replying("internal prompt details the user must not see"),
        );
        let (status, body) = get(state, user_token()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to parse AI recommendations");
        assert!(!body.to_string().contains("prompt details"));
    }

    #[tokio::test]
    async fn test_upstream_failure_is_502() {
        let state = test_state(
            StubProfiles::with(make_profile()),
            StubCatalog::new(vec![make_job("A")]),
            StubGenerator::failing(|| LlmError::Api {
                status: 503,
                message: "overloaded".to_string(),
            }),
        );
        let (status, body) = get(state, user_token()).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["code"], "UPSTREAM_ERROR");
    }

    #[tokio::test]
    async fn test_model_timeout_is_504() {
        let config = Config {
            gemini_api_base: serve_once(Reply::Stall).await,
            llm_timeout_secs: 1,
            ..test_config()
        };
        let state = test_state(
            StubProfiles::with(make_profile()),
            StubCatalog::new(vec![make_job("A")]),
            LlmClient::new(&config).unwrap(),
        );
        let (status, body) = get(state, user_token()).await;
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(body["code"], "UPSTREAM_TIMEOUT");
    }
}
