//! Axum route handlers for companies and the user's skill list.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::company::{CompanyRow, CompanyUpdate, NewCompany};
use crate::models::skills::UserSkillsRow;
use crate::readiness::comparator::{compare, GapResult};
use crate::state::AppState;
use crate::tracker::companies::{
    create_company, delete_company, get_company, list_companies, set_favorite, update_company,
};
use crate::tracker::skills::{clean_skill_list, get_user_skills, replace_user_skills};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct CreateCompanyRequest {
    pub user_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub is_favorite: bool,
    pub notes: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCompanyRequest {
    pub user_id: Uuid,
    pub name: Option<String>,
    pub role: Option<String>,
    pub required_skills: Option<Vec<String>>,
    pub is_favorite: Option<bool>,
    pub notes: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FavoriteRequest {
    pub user_id: Uuid,
    pub is_favorite: bool,
}

/// A company with its gap analysis against the user's current skills.
#[derive(Debug, Serialize)]
pub struct CompanyGapResponse {
    pub company: CompanyRow,
    pub gap: GapResult,
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReplaceSkillsRequest {
    pub user_id: Uuid,
    pub skills: Vec<String>,
}

/// Trims a company name and rejects blank ones.
pub fn require_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }
    Ok(name.to_string())
}

// ────────────────────────────────────────────────────────────────────────────
// Companies
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/companies
pub async fn handle_list_companies(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<CompanyRow>>, AppError> {
    let companies = list_companies(&state.db, params.user_id).await?;
    Ok(Json(companies))
}

/// POST /api/v1/companies
pub async fn handle_create_company(
    State(state): State<AppState>,
    Json(req): Json<CreateCompanyRequest>,
) -> Result<(StatusCode, Json<CompanyRow>), AppError> {
    let company = NewCompany {
        name: require_name(&req.name)?,
        role: req.role.trim().to_string(),
        required_skills: clean_skill_list(&req.required_skills),
        is_favorite: req.is_favorite,
        notes: req.notes,
        description: req.description,
    };
    let row = create_company(&state.db, req.user_id, company).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/companies/:id
///
/// The company plus its readiness against the user's current skill list.
pub async fn handle_get_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<CompanyGapResponse>, AppError> {
    let company = get_company(&state.db, params.user_id, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Company {id} not found")))?;
    let user_skills = get_user_skills(&state.db, params.user_id).await?;

    let gap = compare(&company.required_skills, &user_skills);
    Ok(Json(CompanyGapResponse { company, gap }))
}

/// PATCH /api/v1/companies/:id
pub async fn handle_update_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateCompanyRequest>,
) -> Result<Json<CompanyRow>, AppError> {
    let update = CompanyUpdate {
        name: req.name.as_deref().map(require_name).transpose()?,
        role: req.role.map(|r| r.trim().to_string()),
        required_skills: req.required_skills.as_deref().map(clean_skill_list),
        is_favorite: req.is_favorite,
        notes: req.notes,
        description: req.description,
    };
    let row = update_company(&state.db, req.user_id, id, update)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Company {id} not found")))?;
    Ok(Json(row))
}

/// PUT /api/v1/companies/:id/favorite
pub async fn handle_set_favorite(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<FavoriteRequest>,
) -> Result<Json<CompanyRow>, AppError> {
    let row = set_favorite(&state.db, req.user_id, id, req.is_favorite)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Company {id} not found")))?;
    Ok(Json(row))
}

/// DELETE /api/v1/companies/:id
pub async fn handle_delete_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    if !delete_company(&state.db, params.user_id, id).await? {
        return Err(AppError::NotFound(format!("Company {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/skills
pub async fn handle_get_skills(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<SkillsResponse>, AppError> {
    let skills = get_user_skills(&state.db, params.user_id).await?;
    Ok(Json(SkillsResponse { skills }))
}

/// PUT /api/v1/skills
///
/// Replaces the whole list. There is no incremental add/remove.
pub async fn handle_replace_skills(
    State(state): State<AppState>,
    Json(req): Json<ReplaceSkillsRequest>,
) -> Result<Json<UserSkillsRow>, AppError> {
    let row = replace_user_skills(&state.db, req.user_id, &req.skills).await?;
    Ok(Json(row))
}

/// GET /api/v1/skills/vocabulary
///
/// The skill names the JD analyzer can recognize, for client-side suggestions.
pub async fn handle_vocabulary(State(state): State<AppState>) -> Json<SkillsResponse> {
    Json(SkillsResponse {
        skills: state.extractor.vocabulary().entries().to_vec(),
    })
}
