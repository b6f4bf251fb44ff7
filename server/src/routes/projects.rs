//! Project routes — public listing/detail, admin CRUD.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::auth::AuthUser;
use crate::envelope::{Envelope, Pagination, page_params};
use crate::errors::ApiError;
use crate::services::project::{self, ProjectInput, ProjectRow};
use crate::state::AppState;

#[derive(Serialize)]
pub struct ProjectResponse {
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

fn to_response(row: ProjectRow) -> ProjectResponse {
    ProjectResponse {
        id: row.id,
        title: row.title,
        category: row.category,
        description: row.description,
        location: row.location,
        year: row.year,
        images: row.images,
        featured: row.featured,
        created_at: row.created_at,
    }
}

#[derive(Deserialize)]
pub struct ListProjectsQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub category: Option<String>,
    pub featured: Option<bool>,
}

#[derive(Deserialize)]
pub struct ProjectBody {
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub location: Option<String>,
    pub year: Option<i32>,
    #[serde(default = "empty_images")]
    pub images: serde_json::Value,
    #[serde(default)]
    pub featured: bool,
}

fn empty_images() -> serde_json::Value {
    serde_json::Value::Array(Vec::new())
}

fn validate_body(body: &ProjectBody) -> Result<ProjectInput, ApiError> {
    let title = body.title.trim();
    if title.is_empty() {
        return Err(ApiError::BadRequest("title is required".to_owned()));
    }
    let category = body.category.trim();
    if category.is_empty() {
        return Err(ApiError::BadRequest("category is required".to_owned()));
    }
    if !body.images.is_array() {
        return Err(ApiError::BadRequest("images must be a list".to_owned()));
    }

    Ok(ProjectInput {
        title: title.to_owned(),
        category: category.to_owned(),
        description: body.description.clone(),
        location: body.location.clone(),
        year: body.year,
        images: body.images.clone(),
        featured: body.featured,
    })
}

pub(crate) fn project_error_to_api(err: project::ProjectError) -> ApiError {
    match err {
        project::ProjectError::NotFound(_) => ApiError::NotFound,
        project::ProjectError::Database(_) => ApiError::Internal,
    }
}

/// `GET /api/projects` — public paginated listing.
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ListProjectsQuery>,
) -> Result<Json<Envelope<Vec<ProjectResponse>>>, ApiError> {
    let (page, limit) = page_params(query.page, query.limit);
    let (rows, total) = project::list_projects(&state.pool, page, limit, query.category.as_deref(), query.featured)
        .await
        .map_err(project_error_to_api)?;

    Ok(Json(Envelope::ok_paginated(
        rows.into_iter().map(to_response).collect(),
        Pagination::new(page, limit, total),
    )))
}

/// `GET /api/projects/:id` — public project detail.
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<ProjectResponse>>, ApiError> {
    let row = project::get_project(&state.pool, id).await.map_err(project_error_to_api)?;
    Ok(Json(Envelope::ok(to_response(row))))
}

/// `POST /api/projects` — create a project (admin).
pub async fn create_project(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(body): Json<ProjectBody>,
) -> Result<(StatusCode, Json<Envelope<ProjectResponse>>), ApiError> {
    let input = validate_body(&body)?;
    let row = project::create_project(&state.pool, &input)
        .await
        .map_err(project_error_to_api)?;

    Ok((StatusCode::CREATED, Json(Envelope::ok(to_response(row)))))
}

/// `PUT /api/projects/:id` — replace a project (admin).
pub async fn update_project(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<ProjectBody>,
) -> Result<Json<Envelope<ProjectResponse>>, ApiError> {
    let input = validate_body(&body)?;
    let row = project::update_project(&state.pool, id, &input)
        .await
        .map_err(project_error_to_api)?;

    Ok(Json(Envelope::ok(to_response(row))))
}

/// `DELETE /api/projects/:id` — delete a project (admin).
pub async fn delete_project(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<serde_json::Value>>, ApiError> {
    project::delete_project(&state.pool, id)
        .await
        .map_err(project_error_to_api)?;

    Ok(Json(Envelope::message_only("project deleted")))
}

#[cfg(test)]
#[path = "projects_test.rs"]
mod tests;
