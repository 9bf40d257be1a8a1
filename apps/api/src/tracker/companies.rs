//! Company / role records. Every query is scoped by `user_id`.

use sqlx::{PgExecutor, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::models::company::{CompanyRow, CompanyUpdate, NewCompany};

/// All companies for a user in insertion order (ranking ties depend on it).
pub async fn list_companies<'e>(
    db: impl PgExecutor<'e>,
    user_id: Uuid,
) -> Result<Vec<CompanyRow>, sqlx::Error> {
    let rows = sqlx::query_as::<_, CompanyRow>(
        "SELECT * FROM companies WHERE user_id = $1 ORDER BY seq",
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn get_company(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
) -> Result<Option<CompanyRow>, sqlx::Error> {
    let row = sqlx::query_as::<_, CompanyRow>(
        "SELECT * FROM companies WHERE id = $1 AND user_id = $2",
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn create_company(
    pool: &PgPool,
    user_id: Uuid,
    company: NewCompany,
) -> Result<CompanyRow, sqlx::Error> {
    let id = Uuid::new_v4();
    let row = sqlx::query_as::<_, CompanyRow>(
        r#"
        INSERT INTO companies
            (id, user_id, name, role, required_skills, is_favorite, notes, description)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(&company.name)
    .bind(&company.role)
    .bind(&company.required_skills)
    .bind(company.is_favorite)
    .bind(&company.notes)
    .bind(&company.description)
    .fetch_one(pool)
    .await?;

    info!(
        "Created company {id} for user {user_id} with {} required skills",
        row.required_skills.len()
    );
    Ok(row)
}

/// Applies the `Some` fields of `update`. Returns `None` if the company does not exist.
pub async fn update_company(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
    update: CompanyUpdate,
) -> Result<Option<CompanyRow>, sqlx::Error> {
    let row = sqlx::query_as::<_, CompanyRow>(
        r#"
        UPDATE companies SET
            name            = COALESCE($3, name),
            role            = COALESCE($4, role),
            required_skills = COALESCE($5, required_skills),
            is_favorite     = COALESCE($6, is_favorite),
            notes           = COALESCE($7, notes),
            description     = COALESCE($8, description),
            updated_at      = now()
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(update.name)
    .bind(update.role)
    .bind(update.required_skills)
    .bind(update.is_favorite)
    .bind(update.notes)
    .bind(update.description)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn set_favorite(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
    is_favorite: bool,
) -> Result<Option<CompanyRow>, sqlx::Error> {
    update_company(
        pool,
        user_id,
        id,
        CompanyUpdate {
            is_favorite: Some(is_favorite),
            ..Default::default()
        },
    )
    .await
}

/// Returns `false` if nothing was deleted.
pub async fn delete_company(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM companies WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

    let deleted = result.rows_affected() > 0;
    if deleted {
        info!("Deleted company {id} for user {user_id}");
    }
    Ok(deleted)
}
