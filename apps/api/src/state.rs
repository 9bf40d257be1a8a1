use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::job_search::cache::JobCache;
use crate::job_search::JobSource;
use crate::skills::SkillExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Skill extractor over the built-in vocabulary, with the configured match strategy.
    pub extractor: Arc<SkillExtractor>,
    /// Pluggable job listings source. Default: AdzunaClient.
    pub job_source: Arc<dyn JobSource>,
    pub job_cache: JobCache,
}
