//! Project service — CRUD over the portfolio projects table.
//!
//! DESIGN
//! ======
//! Project image lists are stored as a JSONB array of `{url, caption}`
//! entries; the server treats them as opaque values and leaves URL
//! normalization to the clients that consume them.

use sqlx::{PgPool, Row};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("project not found: {0}")]
    NotFound(Uuid),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Row returned from project queries.
#[derive(Debug, Clone)]
pub struct ProjectRow {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub description: String,
    pub location: Option<String>,
    pub year: Option<i32>,
    pub images: serde_json::Value,
    pub featured: bool,
    pub created_at: String,
}

/// Fields accepted when creating or replacing a project.
#[derive(Debug, Clone)]
pub struct ProjectInput {
    pub title: String,
    pub category: String,
    pub description: String,
    pub location: Option<String>,
    pub year: Option<i32>,
    pub images: serde_json::Value,
    pub featured: bool,
}

fn row_to_project(r: &sqlx::postgres::PgRow) -> ProjectRow {
    ProjectRow {
        id: r.get("id"),
        title: r.get("title"),
        category: r.get("category"),
        description: r.get("description"),
        location: r.get("location"),
        year: r.get("year"),
        images: r.get("images"),
        featured: r.get("featured"),
        created_at: r.get("created_at"),
    }
}

const PROJECT_COLUMNS: &str = r"id, title, category, description, location, year, images, featured,
    to_char(created_at, 'YYYY-MM-DD') AS created_at";

/// List projects with pagination and optional category/featured filters.
///
/// Returns the page of rows plus the total row count for the filter.
///
/// # Errors
///
/// Returns a database error if either query fails.
pub async fn list_projects(
    pool: &PgPool,
    page: i64,
    limit: i64,
    category: Option<&str>,
    featured: Option<bool>,
) -> Result<(Vec<ProjectRow>, i64), ProjectError> {
    let offset = (page - 1) * limit;

    let rows = sqlx::query(&format!(
        r"SELECT {PROJECT_COLUMNS}
          FROM projects
          WHERE ($1::text IS NULL OR category = $1)
            AND ($2::boolean IS NULL OR featured = $2)
          ORDER BY created_at DESC
          LIMIT $3 OFFSET $4",
    ))
    .bind(category)
    .bind(featured)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    let total: i64 = sqlx::query_scalar(
        r"SELECT COUNT(*) FROM projects
          WHERE ($1::text IS NULL OR category = $1)
            AND ($2::boolean IS NULL OR featured = $2)",
    )
    .bind(category)
    .bind(featured)
    .fetch_one(pool)
    .await?;

    Ok((rows.iter().map(row_to_project).collect(), total))
}

/// Fetch one project by id.
///
/// # Errors
///
/// Returns `NotFound` if no row matches, or a database error.
pub async fn get_project(pool: &PgPool, id: Uuid) -> Result<ProjectRow, ProjectError> {
    let row = sqlx::query(&format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(ProjectError::NotFound(id))?;

    Ok(row_to_project(&row))
}

/// Create a new project.
pub async fn create_project(pool: &PgPool, input: &ProjectInput) -> Result<ProjectRow, ProjectError> {
    let row = sqlx::query(&format!(
        r"INSERT INTO projects (title, category, description, location, year, images, featured)
          VALUES ($1, $2, $3, $4, $5, $6, $7)
          RETURNING {PROJECT_COLUMNS}",
    ))
    .bind(&input.title)
    .bind(&input.category)
    .bind(&input.description)
    .bind(&input.location)
    .bind(input.year)
    .bind(&input.images)
    .bind(input.featured)
    .fetch_one(pool)
    .await?;

    Ok(row_to_project(&row))
}

/// Replace an existing project.
///
/// # Errors
///
/// Returns `NotFound` if no row matches, or a database error.
pub async fn update_project(pool: &PgPool, id: Uuid, input: &ProjectInput) -> Result<ProjectRow, ProjectError> {
    let row = sqlx::query(&format!(
        r"UPDATE projects
          SET title = $2, category = $3, description = $4, location = $5,
              year = $6, images = $7, featured = $8, updated_at = now()
          WHERE id = $1
          RETURNING {PROJECT_COLUMNS}",
    ))
    .bind(id)
    .bind(&input.title)
    .bind(&input.category)
    .bind(&input.description)
    .bind(&input.location)
    .bind(input.year)
    .bind(&input.images)
    .bind(input.featured)
    .fetch_optional(pool)
    .await?
    .ok_or(ProjectError::NotFound(id))?;

    Ok(row_to_project(&row))
}

/// Delete a project by id.
///
/// # Errors
///
/// Returns `NotFound` if no row matches, or a database error.
pub async fn delete_project(pool: &PgPool, id: Uuid) -> Result<(), ProjectError> {
    let result = sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ProjectError::NotFound(id));
    }
    Ok(())
}

#[cfg(test)]
#[path = "project_test.rs"]
mod tests;
