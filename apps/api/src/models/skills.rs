use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserSkillsRow {
    pub user_id: Uuid,
    pub skills: Vec<String>,
    pub updated_at: DateTime<Utc>,
}
