//! Axum route handlers for the dashboard and the JD analyzer.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::company::{CompanyRow, NewCompany};
use crate::readiness::aggregator::{
    aggregate_across_companies, rank_by_readiness, AggregateStats, SkillDemand,
};
use crate::readiness::jd_scorer::{score_jd, JdScore};
use crate::state::AppState;
use crate::tracker::companies::{create_company, list_companies};
use crate::tracker::handlers::{require_name, CompanyGapResponse, UserIdQuery};
use crate::tracker::skills::{clean_skill_list, get_user_skills};

/// How many skills the dashboard lists as most in demand.
const TOP_SKILLS: usize = 10;

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub stats: AggregateStats,
    pub top_skills: Vec<SkillDemand>,
    /// Least ready first; these are the "needs attention" items.
    pub ranking: Vec<CompanyGapResponse>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeJdRequest {
    pub user_id: Uuid,
    #[serde(default)]
    pub jd_text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CommitJdRequest {
    pub user_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub role: String,
    pub description: Option<String>,
    /// The `extracted` list from a previous analysis.
    pub skills: Vec<String>,
}

/// Builds the dashboard from one snapshot of companies and skills.
pub fn build_dashboard(companies: &[CompanyRow], user_skills: &[String]) -> DashboardResponse {
    let stats = aggregate_across_companies(companies, user_skills);
    let top_skills = stats.most_demanded(TOP_SKILLS);
    let ranking = rank_by_readiness(companies, user_skills)
        .into_iter()
        .map(|ranked| CompanyGapResponse {
            company: ranked.company.clone(),
            gap: ranked.gap,
        })
        .collect();

    DashboardResponse {
        stats,
        top_skills,
        ranking,
    }
}

/// GET /api/v1/dashboard
pub async fn handle_dashboard(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<DashboardResponse>, AppError> {
    // Companies and skills must come from the same snapshot.
    let mut tx = state.db.begin().await?;
    sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
        .execute(&mut *tx)
        .await?;
    let companies = list_companies(&mut *tx, params.user_id).await?;
    let user_skills = get_user_skills(&mut *tx, params.user_id).await?;
    tx.commit().await?;

    Ok(Json(build_dashboard(&companies, &user_skills)))
}

/// POST /api/v1/jd/analyze
///
/// Extracts known skills from a job description and scores them against the
/// user's skill list. Nothing is stored.
pub async fn handle_analyze_jd(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeJdRequest>,
) -> Result<Json<JdScore>, AppError> {
    let user_skills = get_user_skills(&state.db, req.user_id).await?;
    let score = score_jd(&state.extractor, req.jd_text.as_deref(), &user_skills);

    debug!(
        "JD analysis for user {}: {} skills extracted, score {}",
        req.user_id,
        score.extracted.len(),
        score.score
    );
    Ok(Json(score))
}

/// POST /api/v1/jd/commit
///
/// Saves an analyzed JD as a new company whose required skills are the
/// extracted list the client sends back.
pub async fn handle_commit_jd(
    State(state): State<AppState>,
    Json(req): Json<CommitJdRequest>,
) -> Result<(StatusCode, Json<CompanyRow>), AppError> {
    let company = NewCompany {
        name: require_name(&req.name)?,
        role: req.role.trim().to_string(),
        required_skills: clean_skill_list(&req.skills),
        is_favorite: false,
        notes: None,
        description: req.description,
    };
    let row = create_company(&state.db, req.user_id, company).await?;
    Ok((StatusCode::CREATED, Json(row)))
}
