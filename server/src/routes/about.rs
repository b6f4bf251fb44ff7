//! About-page content routes.

use axum::extract::State;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use super::auth::AuthUser;
use crate::envelope::Envelope;
use crate::errors::ApiError;
use crate::services::about::{self, AboutRow};
use crate::state::AppState;

#[derive(Serialize, Deserialize)]
pub struct AboutBody {
    pub title: String,
    pub body: String,
    pub mission: String,
    pub years_experience: i32,
    pub projects_completed: i32,
    pub team_size: i32,
}

fn to_body(row: AboutRow) -> AboutBody {
    AboutBody {
        title: row.title,
        body: row.body,
        mission: row.mission,
        years_experience: row.years_experience,
        projects_completed: row.projects_completed,
        team_size: row.team_size,
    }
}

/// `GET /api/about` — public content fetch.
pub async fn get_about(State(state): State<AppState>) -> Result<Json<Envelope<AboutBody>>, ApiError> {
    let row = about::get_about(&state.pool).await.map_err(|_| ApiError::Internal)?;
    Ok(Json(Envelope::ok(to_body(row))))
}

/// `PUT /api/about` — replace content (admin).
pub async fn update_about(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(body): Json<AboutBody>,
) -> Result<Json<Envelope<AboutBody>>, ApiError> {
    let row = AboutRow {
        title: body.title,
        body: body.body,
        mission: body.mission,
        years_experience: body.years_experience,
        projects_completed: body.projects_completed,
        team_size: body.team_size,
    };

    about::update_about(&state.pool, &row).await.map_err(|_| ApiError::Internal)?;
    Ok(Json(Envelope::ok_with_message(to_body(row), "about content updated")))
}
