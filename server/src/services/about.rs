//! About-page content service. The content is a single editable row.

use sqlx::{PgPool, Row};

#[derive(Debug, thiserror::Error)]
pub enum AboutError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Clone)]
pub struct AboutRow {
    pub title: String,
    pub body: String,
    pub mission: String,
    pub years_experience: i32,
    pub projects_completed: i32,
    pub team_size: i32,
}

/// Fetch the about-page content row.
pub async fn get_about(pool: &PgPool) -> Result<AboutRow, AboutError> {
    let row = sqlx::query(
        r"SELECT title, body, mission, years_experience, projects_completed, team_size
          FROM about_content WHERE id = 1",
    )
    .fetch_one(pool)
    .await?;

    Ok(AboutRow {
        title: row.get("title"),
        body: row.get("body"),
        mission: row.get("mission"),
        years_experience: row.get("years_experience"),
        projects_completed: row.get("projects_completed"),
        team_size: row.get("team_size"),
    })
}

/// Replace the about-page content row.
pub async fn update_about(pool: &PgPool, content: &AboutRow) -> Result<(), AboutError> {
    sqlx::query(
        r"UPDATE about_content
          SET title = $1, body = $2, mission = $3, years_experience = $4,
              projects_completed = $5, team_size = $6, updated_at = now()
          WHERE id = 1",
    )
    .bind(&content.title)
    .bind(&content.body)
    .bind(&content.mission)
    .bind(content.years_experience)
    .bind(content.projects_completed)
    .bind(content.team_size)
    .execute(pool)
    .await?;

    Ok(())
}
