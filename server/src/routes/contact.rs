//! Contact routes — public submission, admin inbox workflow.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::auth::AuthUser;
use crate::envelope::{Envelope, Pagination, page_params};
use crate::errors::ApiError;
use crate::services::contact::{self, ContactRow, ContactStatus};
use crate::state::AppState;

#[derive(Serialize)]
pub struct ContactResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub status: String,
    pub reply: Option<String>,
    pub created_at: String,
}

fn to_response(row: ContactRow) -> ContactResponse {
    ContactResponse {
        id: row.id,
        name: row.name,
        email: row.email,
        phone: row.phone,
        subject: row.subject,
        message: row.message,
        status: row.status,
        reply: row.reply,
        created_at: row.created_at,
    }
}

pub(crate) fn contact_error_to_api(err: contact::ContactError) -> ApiError {
    match err {
        contact::ContactError::NotFound(_) => ApiError::NotFound,
        contact::ContactError::InvalidStatus(s) => ApiError::BadRequest(format!("invalid status: {s}")),
        contact::ContactError::Database(_) => ApiError::Internal,
    }
}

#[derive(Deserialize)]
pub struct SubmitContactBody {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
}

pub(crate) fn validate_submission(body: &SubmitContactBody) -> Result<(), ApiError> {
    if body.name.trim().is_empty() {
        return Err(ApiError::BadRequest("name is required".to_owned()));
    }
    let email = body.email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(ApiError::BadRequest("a valid email is required".to_owned()));
    }
    if body.message.trim().is_empty() {
        return Err(ApiError::BadRequest("message is required".to_owned()));
    }
    Ok(())
}

/// `POST /api/contact` — public contact-form submission.
pub async fn submit(
    State(state): State<AppState>,
    Json(body): Json<SubmitContactBody>,
) -> Result<(StatusCode, Json<Envelope<ContactResponse>>), ApiError> {
    validate_submission(&body)?;

    let row = contact::create_submission(
        &state.pool,
        body.name.trim(),
        body.email.trim(),
        body.phone.as_deref(),
        body.subject.as_deref(),
        body.message.trim(),
    )
    .await
    .map_err(contact_error_to_api)?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok_with_message(to_response(row), "thanks for getting in touch")),
    ))
}

#[derive(Deserialize)]
pub struct ListContactsQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub status: Option<String>,
}

/// `GET /api/contact` — admin inbox listing.
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<ListContactsQuery>,
) -> Result<Json<Envelope<Vec<ContactResponse>>>, ApiError> {
    let status = match query.status.as_deref() {
        None | Some("") => None,
        Some(raw) => Some(
            ContactStatus::from_str(raw)
                .ok_or_else(|| contact_error_to_api(contact::ContactError::InvalidStatus(raw.to_owned())))?,
        ),
    };

    let (page, limit) = page_params(query.page, query.limit);
    let (rows, total) = contact::list_submissions(&state.pool, page, limit, status)
        .await
        .map_err(contact_error_to_api)?;

    Ok(Json(Envelope::ok_paginated(
        rows.into_iter().map(to_response).collect(),
        Pagination::new(page, limit, total),
    )))
}

/// `GET /api/contact/:id` — admin detail view.
pub async fn get(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<ContactResponse>>, ApiError> {
    let row = contact::get_submission(&state.pool, id)
        .await
        .map_err(contact_error_to_api)?;
    Ok(Json(Envelope::ok(to_response(row))))
}

#[derive(Deserialize)]
pub struct ReplyBody {
    pub reply: String,
}

/// `PUT /api/contact/:id/reply` — store a reply and send it when mail is
/// configured. A delivery failure keeps the saved reply; the response
/// message says whether the mail went out.
pub async fn reply(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<ReplyBody>,
) -> Result<Json<Envelope<ContactResponse>>, ApiError> {
    let text = body.reply.trim();
    if text.is_empty() {
        return Err(ApiError::BadRequest("reply is required".to_owned()));
    }

    let row = contact::save_reply(&state.pool, id, text)
        .await
        .map_err(contact_error_to_api)?;

    let mut message = "reply saved".to_owned();
    if let Some(mailer) = &state.mailer {
        match mailer.send_contact_reply(&row.email, &row.name, text).await {
            Ok(()) => message = "reply sent".to_owned(),
            Err(e) => {
                tracing::warn!(error = %e, contact_id = %id, "reply mail delivery failed");
                message = "reply saved, mail delivery failed".to_owned();
            }
        }
    }

    Ok(Json(Envelope::ok_with_message(to_response(row), message)))
}

#[derive(Deserialize)]
pub struct StatusBody {
    pub status: String,
}

/// `PATCH /api/contact/:id/status` — move a submission through the workflow.
pub async fn set_status(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<StatusBody>,
) -> Result<Json<Envelope<serde_json::Value>>, ApiError> {
    let status = ContactStatus::from_str(&body.status)
        .ok_or_else(|| contact_error_to_api(contact::ContactError::InvalidStatus(body.status.clone())))?;

    contact::set_status(&state.pool, id, status)
        .await
        .map_err(contact_error_to_api)?;

    Ok(Json(Envelope::message_only("status updated")))
}

/// `DELETE /api/contact/:id` — remove a submission.
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<serde_json::Value>>, ApiError> {
    contact::delete_submission(&state.pool, id)
        .await
        .map_err(contact_error_to_api)?;

    Ok(Json(Envelope::message_only("message deleted")))
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
