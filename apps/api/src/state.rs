use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::recommendation::generator::MatchGenerator;
use crate::recommendation::stores::{JobCatalog, ProfileStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Recommendation collaborators. Postgres + Gemini in production, stubs in tests.
    pub profiles: Arc<dyn ProfileStore>,
    pub catalog: Arc<dyn JobCatalog>,
    pub matcher: Arc<dyn MatchGenerator>,
}
