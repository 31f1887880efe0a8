use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::recommendation::RecommendError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Bodies are always `{ "error": <message>, "code": <CODE> }`. Internal causes are
/// logged here and never echoed to the client.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden")]
    Forbidden,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Upstream model error: {0}")]
    Upstream(#[source] LlmError),

    #[error("Recommendation error: {0}")]
    Recommendation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<RecommendError> for AppError {
    fn from(err: RecommendError) -> Self {
        match err {
            RecommendError::ProfileNotFound(_) => AppError::NotFound("User not found".to_string()),
            RecommendError::NoJobsAvailable => AppError::NotFound("No jobs available".to_string()),
            RecommendError::Upstream(e) => AppError::Upstream(e),
            RecommendError::Store(e) => AppError::Database(e),
            // Raw model output is logged inside the pipeline; only the category leaves it.
            e @ (RecommendError::Parse(_) | RecommendError::Assembly { .. }) => {
                AppError::Recommendation(e.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            AppError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNPROCESSABLE_ENTITY",
                msg.clone(),
            ),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Unauthorized".to_string(),
            ),
            AppError::Forbidden => (
                StatusCode::FORBIDDEN,
                "FORBIDDEN",
                "Access denied".to_string(),
            ),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Upstream(LlmError::Timeout) => {
                tracing::error!("Upstream model call timed out");
                (
                    StatusCode::GATEWAY_TIMEOUT,
                    "UPSTREAM_TIMEOUT",
                    "The recommendation service took too long to respond. Please try again"
                        .to_string(),
                )
            }
            AppError::Upstream(e) => {
                tracing::error!("Upstream model error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    "The recommendation service is unavailable. Please try again".to_string(),
                )
            }
            AppError::Recommendation(msg) => {
                tracing::error!("Recommendation error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RECOMMENDATION_ERROR",
                    "Failed to parse AI recommendations".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "code": code,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::RecommendationParseError;
    use uuid::Uuid;

    #[test]
    fn test_no_jobs_maps_to_404() {
        let response = AppError::from(RecommendError::NoJobsAvailable).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_missing_profile_maps_to_404() {
        let response =
            AppError::from(RecommendError::ProfileNotFound(Uuid::new_v4())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_parse_failure_maps_to_500() {
        let err = RecommendError::Parse(RecommendationParseError {
            raw: "no json here".to_string(),
        });
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_timeout_is_distinct_from_other_upstream_failures() {
        let timeout = AppError::from(RecommendError::Upstream(LlmError::Timeout)).into_response();
        assert_eq!(timeout.status(), StatusCode::GATEWAY_TIMEOUT);

        let api = AppError::from(RecommendError::Upstream(LlmError::Api {
            status: 429,
            message: "quota".to_string(),
        }))
        .into_response();
        assert_eq!(api.status(), StatusCode::BAD_GATEWAY);
    }
}
