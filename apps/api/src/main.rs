mod config;
mod db;
mod errors;
mod job_search;
mod models;
mod readiness;
mod routes;
mod skills;
mod state;
mod tracker;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::job_search::adzuna::AdzunaClient;
use crate::job_search::cache::JobCache;
use crate::routes::build_router;
use crate::skills::{SkillExtractor, Vocabulary};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Prep API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Initialize Redis (job search cache)
    let redis = redis::Client::open(config.redis_url.clone())?;
    let job_cache = JobCache::new(redis, config.job_cache_ttl_secs);
    info!("Redis client initialized (job cache ttl: {}s)", config.job_cache_ttl_secs);

    // Initialize job search upstream
    let job_source = Arc::new(AdzunaClient::new(
        config.job_api_base_url.clone(),
        config.job_api_app_id.clone(),
        config.job_api_app_key.clone(),
        config.job_results_per_page,
    )?);
    info!("Job search client initialized ({})", config.job_api_base_url);

    // Initialize skill extractor
    let extractor = Arc::new(SkillExtractor::new(
        Vocabulary::default(),
        config.skill_match_strategy,
    ));
    info!(
        "Skill extractor: {} vocabulary entries, {:?} matching",
        extractor.vocabulary().len(),
        extractor.strategy()
    );

    // Build app state
    let state = AppState {
        db,
        config: config.clone(),
        extractor,
        job_source,
        job_cache,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict to the web client's origin once it has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
