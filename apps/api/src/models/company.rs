use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::readiness::aggregator::SkillRequirements;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CompanyRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub role: String,
    pub required_skills: Vec<String>,
    pub is_favorite: bool,
    pub notes: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SkillRequirements for CompanyRow {
    fn required_skills(&self) -> &[String] {
        &self.required_skills
    }

    fn is_favorite(&self) -> bool {
        self.is_favorite
    }
}

/// Fields for a new company record. `required_skills` is stored as given;
/// callers clean it first.
#[derive(Debug, Clone, Default)]
pub struct NewCompany {
    pub name: String,
    pub role: String,
    pub required_skills: Vec<String>,
    pub is_favorite: bool,
    pub notes: Option<String>,
    pub description: Option<String>,
}

/// Partial update. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct CompanyUpdate {
    pub name: Option<String>,
    pub role: Option<String>,
    pub required_skills: Option<Vec<String>>,
    pub is_favorite: Option<bool>,
    pub notes: Option<String>,
    pub description: Option<String>,
}
