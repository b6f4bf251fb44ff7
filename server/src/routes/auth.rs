//! Auth routes — credential login, profile lookup, logout.

use axum::extract::{FromRef, State};
use axum::http::header::AUTHORIZATION;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use super::guard::AUTH_COOKIE;
use crate::envelope::Envelope;
use crate::errors::ApiError;
use crate::services::{account, session};
use crate::state::AppState;

/// Extract the token from an `Authorization: Bearer <token>` header value.
pub(crate) fn bearer_token(header: Option<&str>) -> Option<&str> {
    let token = header?.strip_prefix("Bearer ")?.trim();
    (!token.is_empty()).then_some(token)
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated account extracted from the bearer header (cookie fallback).
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: session::SessionUser,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header = parts.headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());
        let token = match bearer_token(header) {
            Some(token) => token.to_owned(),
            None => {
                let jar = axum_extra::extract::cookie::CookieJar::from_headers(&parts.headers);
                jar.get(AUTH_COOKIE)
                    .map(|c| c.value().to_owned())
                    .filter(|v| !v.is_empty())
                    .ok_or(ApiError::Unauthorized)?
            }
        };

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, &token)
            .await
            .map_err(|_| ApiError::Internal)?
            .ok_or(ApiError::Unauthorized)?;

        Ok(Self { user, token })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct LoginBody {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginData {
    pub token: String,
}

#[derive(Serialize)]
pub struct ProfileData {
    pub id: String,
    pub username: String,
}

/// `POST /api/auth/login` — verify credentials and issue a session token.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginBody>,
) -> Result<Json<Envelope<LoginData>>, ApiError> {
    let account_id = account::verify_credentials(&state.pool, &body.username, &body.password)
        .await
        .map_err(|_| ApiError::Internal)?
        .ok_or(ApiError::InvalidCredentials)?;

    let token = session::create_session(&state.pool, account_id)
        .await
        .map_err(|_| ApiError::Internal)?;

    tracing::info!(%account_id, "login");
    Ok(Json(Envelope::ok(LoginData { token })))
}

/// `GET /api/auth/profile` — return the current account.
pub async fn profile(auth: AuthUser) -> Json<Envelope<ProfileData>> {
    Json(Envelope::ok(ProfileData { id: auth.user.id.to_string(), username: auth.user.username }))
}

/// `POST /api/auth/logout` — delete the session.
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Envelope<serde_json::Value>>, ApiError> {
    session::delete_session(&state.pool, &auth.token)
        .await
        .map_err(|_| ApiError::Internal)?;

    Ok(Json(Envelope::message_only("logged out")))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
