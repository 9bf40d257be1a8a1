//! Axum route handler for the job search proxy.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::job_search::{JobQuery, JobSearchResults};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JobSearchParams {
    #[serde(default)]
    pub keyword: String,
    pub location: Option<String>,
    pub country: Option<String>,
    pub page: Option<u32>,
}

/// GET /api/v1/jobs/search
///
/// Forwards the search to the upstream job API using server-side credentials.
/// Responses are cached per (country, page, keyword, location).
pub async fn handle_job_search(
    State(state): State<AppState>,
    Query(params): Query<JobSearchParams>,
) -> Result<Json<JobSearchResults>, AppError> {
    let query = JobQuery::new(
        &params.keyword,
        params.location.as_deref(),
        params.country.as_deref(),
        params.page,
    )?;

    if let Some(cached) = state.job_cache.get(&query).await {
        return Ok(Json(cached));
    }

    let results = state
        .job_source
        .search(&query)
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    info!(
        "Job search '{}' ({}, page {}): {} of {} results",
        query.keyword,
        query.country,
        query.page,
        results.results.len(),
        results.count
    );

    state.job_cache.put(&query, &results).await;
    Ok(Json(results))
}
