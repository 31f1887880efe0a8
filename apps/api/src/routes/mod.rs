pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::accounts::handlers as accounts;
use crate::applications::handlers as applications;
use crate::jobs::handlers as jobs;
use crate::profile::handlers as profile;
use crate::recommendation::handlers as recommendation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Accounts
        .route("/api/auth/register", post(accounts::handle_register))
        // Jobs
        .route("/api/jobs", get(jobs::handle_list_jobs))
        .route(
            "/api/jobs/recommendations",
            get(recommendation::handle_recommendations),
        )
        .route("/api/jobs/:id", get(jobs::handle_get_job))
        .route("/api/admin/jobs", post(jobs::handle_create_job))
        .route(
            "/api/admin/jobs/:id",
            put(jobs::handle_update_job).delete(jobs::handle_delete_job),
        )
        // Applications
        .route(
            "/api/applications",
            get(applications::handle_list_applications).post(applications::handle_apply),
        )
        .route(
            "/api/admin/applications/:id",
            get(applications::handle_get_application).patch(applications::handle_update_status),
        )
        // Profile
        .route(
            "/api/user/profile",
            get(profile::handle_get_profile).put(profile::handle_update_profile),
        )
        .with_state(state)
}
