//! The user's possessed-skill list. Writes always replace the whole list.

use sqlx::{PgExecutor, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::models::skills::UserSkillsRow;
use crate::skills::SkillSet;

/// Trims names, drops blanks and case-insensitive repeats (first casing wins).
/// Applied to every skill list before it is stored.
pub fn clean_skill_list(skills: &[String]) -> Vec<String> {
    skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<SkillSet>()
        .into_vec()
}

/// The user's skills, or an empty list if they never saved any.
pub async fn get_user_skills<'e>(
    db: impl PgExecutor<'e>,
    user_id: Uuid,
) -> Result<Vec<String>, sqlx::Error> {
    let skills: Option<Vec<String>> =
        sqlx::query_scalar("SELECT skills FROM user_skills WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(db)
            .await?;
    Ok(skills.unwrap_or_default())
}

pub async fn replace_user_skills(
    pool: &PgPool,
    user_id: Uuid,
    skills: &[String],
) -> Result<UserSkillsRow, sqlx::Error> {
    let skills = clean_skill_list(skills);

    let row = sqlx::query_as::<_, UserSkillsRow>(
        r#"
        INSERT INTO user_skills (user_id, skills, updated_at)
        VALUES ($1, $2, now())
        ON CONFLICT (user_id)
        DO UPDATE SET skills = EXCLUDED.skills, updated_at = now()
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(&skills)
    .fetch_one(pool)
    .await?;

    info!("Replaced skill list for user {user_id} ({} skills)", row.skills.len());
    Ok(row)
}
