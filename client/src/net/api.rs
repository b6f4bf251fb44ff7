//! REST API client for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a transport error since these
//! endpoints are only meaningful in the browser.
//!
//! ARCHITECTURE
//! ============
//! Two cross-cutting stages wrap every call. Outbound: the token store is
//! read and, when a token exists, attached as a bearer credential. Inbound:
//! a 401 unconditionally purges the token store and — when the page is an
//! admin one — forces a full navigation to the login page so no admin UI
//! stays mounted with a dead session. Everything else is passed through to
//! the caller untouched; this layer never retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::token;
use super::types::{AboutContent, ApiEnvelope, ContactMessage, LoginData, Pagination, Project, User};
#[cfg(any(test, feature = "hydrate"))]
use crate::util::auth::{LOGIN_PATH, is_admin_path};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// Base origin for API calls. Empty (same-origin) unless baked in at build
/// time for a split deployment.
#[cfg(any(test, feature = "hydrate"))]
#[must_use]
pub(crate) fn api_base() -> &'static str {
    option_env!("PUBLIC_API_URL").unwrap_or("")
}

#[cfg(any(test, feature = "hydrate"))]
#[must_use]
pub(crate) fn api_url(path: &str) -> String {
    format!("{}/api{path}", api_base().trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
#[must_use]
pub(crate) fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Where the inbound 401 stage must hard-navigate, if anywhere.
///
/// Only admin pages force a redirect; the login page itself is excluded so
/// a failed sign-in attempt does not reload the form out from under the
/// user, and public pages keep their anonymous view.
#[cfg(any(test, feature = "hydrate"))]
#[must_use]
pub(crate) fn unauthorized_redirect(path: &str) -> Option<&'static str> {
    (is_admin_path(path) && path != LOGIN_PATH).then_some(LOGIN_PATH)
}

/// Map a non-2xx status onto an error carrying the envelope message.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn envelope_result<T>(status: u16, envelope: ApiEnvelope<T>) -> Result<ApiEnvelope<T>, ApiError> {
    if (200..300).contains(&status) {
        Ok(envelope)
    } else {
        Err(ApiError::Server { status, message: envelope.message.or(envelope.error) })
    }
}

/// Unwrap a success envelope's data payload.
pub(crate) fn expect_data<T>(envelope: ApiEnvelope<T>) -> Result<T, ApiError> {
    match envelope {
        ApiEnvelope { success: true, data: Some(data), .. } => Ok(data),
        ApiEnvelope { message, error, .. } => Err(ApiError::Server { status: 200, message: message.or(error) }),
    }
}

/// Accept a success envelope that carries no data payload.
pub(crate) fn expect_success<T>(envelope: ApiEnvelope<T>) -> Result<(), ApiError> {
    if envelope.success {
        Ok(())
    } else {
        Err(ApiError::Server { status: 200, message: envelope.message.or(envelope.error) })
    }
}

#[must_use]
pub(crate) fn projects_query(page: i64, category: Option<&str>, featured: Option<bool>) -> String {
    let mut query = format!("/projects?page={page}");
    if let Some(category) = category.filter(|c| !c.is_empty()) {
        query.push_str(&format!("&category={category}"));
    }
    if let Some(featured) = featured {
        query.push_str(&format!("&featured={featured}"));
    }
    query
}

#[must_use]
pub(crate) fn contacts_query(page: i64, status: Option<&str>) -> String {
    let mut query = format!("/contact?page={page}");
    if let Some(status) = status.filter(|s| !s.is_empty()) {
        query.push_str(&format!("&status={status}"));
    }
    query
}

// =============================================================================
// BROWSER PLUMBING
// =============================================================================

/// Current `window.location` path. Empty on the server.
#[must_use]
pub(crate) fn current_path() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Full-page navigation, discarding all in-memory state. No-op on the server.
pub(crate) fn hard_navigate(target: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(target);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = target;
    }
}

#[cfg(feature = "hydrate")]
fn to_gloo_method(method: HttpMethod) -> gloo_net::http::Method {
    match method {
        HttpMethod::Get => gloo_net::http::Method::GET,
        HttpMethod::Post => gloo_net::http::Method::POST,
        HttpMethod::Put => gloo_net::http::Method::PUT,
        HttpMethod::Patch => gloo_net::http::Method::PATCH,
        HttpMethod::Delete => gloo_net::http::Method::DELETE,
    }
}

/// Inbound interceptor stage: the 401 side effect, then envelope decoding.
#[cfg(feature = "hydrate")]
pub(crate) async fn handle_response<T: DeserializeOwned>(
    response: gloo_net::http::Response,
    redirect_on_401: bool,
) -> Result<ApiEnvelope<T>, ApiError> {
    if response.status() == 401 {
        token::clear();
        if redirect_on_401 {
            if let Some(target) = unauthorized_redirect(&current_path()) {
                hard_navigate(target);
            }
        }
        return Err(ApiError::Unauthorized);
    }

    let status = response.status();
    let envelope = response
        .json::<ApiEnvelope<T>>()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    envelope_result(status, envelope)
}

#[cfg(feature = "hydrate")]
async fn request_envelope<T: DeserializeOwned>(
    method: HttpMethod,
    path: &str,
    body: Option<&serde_json::Value>,
) -> Result<ApiEnvelope<T>, ApiError> {
    let url = api_url(path);
    let mut builder = gloo_net::http::RequestBuilder::new(&url).method(to_gloo_method(method));
    if let Some(token) = token::get() {
        builder = builder.header("Authorization", &bearer_value(&token));
    }

    let request = match body {
        Some(json) => builder.json(json).map_err(|e| ApiError::Transport(e.to_string()))?,
        None => builder.build().map_err(|e| ApiError::Transport(e.to_string()))?,
    };

    let response = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
    handle_response(response, true).await
}

#[cfg(not(feature = "hydrate"))]
async fn request_envelope<T: DeserializeOwned>(
    method: HttpMethod,
    path: &str,
    body: Option<&serde_json::Value>,
) -> Result<ApiEnvelope<T>, ApiError> {
    let _ = (method, path, body);
    Err(ApiError::Transport("not available on server".to_owned()))
}

// =============================================================================
// AUTH
// =============================================================================

/// `POST /api/auth/login` — verify credentials, returning the issued token.
pub async fn login(username: &str, password: &str) -> Result<LoginData, ApiError> {
    let payload = serde_json::json!({ "username": username, "password": password });
    let envelope = request_envelope(HttpMethod::Post, "/auth/login", Some(&payload)).await?;
    expect_data(envelope)
}

/// `GET /api/auth/profile` — fetch the account for the stored token.
pub async fn fetch_profile() -> Result<User, ApiError> {
    let envelope = request_envelope(HttpMethod::Get, "/auth/profile", None).await?;
    expect_data(envelope)
}

/// `POST /api/auth/logout` — invalidate the server-side session.
pub async fn logout() -> Result<(), ApiError> {
    let envelope: ApiEnvelope<serde_json::Value> = request_envelope(HttpMethod::Post, "/auth/logout", None).await?;
    expect_success(envelope)
}

// =============================================================================
// PROJECTS
// =============================================================================

/// `GET /api/projects` — paginated public listing.
pub async fn fetch_projects(
    page: i64,
    category: Option<&str>,
    featured: Option<bool>,
) -> Result<(Vec<Project>, Option<Pagination>), ApiError> {
    let envelope: ApiEnvelope<Vec<Project>> =
        request_envelope(HttpMethod::Get, &projects_query(page, category, featured), None).await?;
    let pagination = envelope.pagination;
    Ok((expect_data(envelope)?, pagination))
}

/// `GET /api/projects/:id` — public detail.
pub async fn fetch_project(id: &str) -> Result<Project, ApiError> {
    let envelope = request_envelope(HttpMethod::Get, &format!("/projects/{id}"), None).await?;
    expect_data(envelope)
}

/// `POST /api/projects` — create (admin).
pub async fn create_project(payload: &serde_json::Value) -> Result<Project, ApiError> {
    let envelope = request_envelope(HttpMethod::Post, "/projects", Some(payload)).await?;
    expect_data(envelope)
}

/// `PUT /api/projects/:id` — replace (admin).
pub async fn update_project(id: &str, payload: &serde_json::Value) -> Result<Project, ApiError> {
    let envelope = request_envelope(HttpMethod::Put, &format!("/projects/{id}"), Some(payload)).await?;
    expect_data(envelope)
}

/// `DELETE /api/projects/:id` — delete (admin).
pub async fn delete_project(id: &str) -> Result<(), ApiError> {
    let envelope: ApiEnvelope<serde_json::Value> =
        request_envelope(HttpMethod::Delete, &format!("/projects/{id}"), None).await?;
    expect_success(envelope)
}

// =============================================================================
// ABOUT
// =============================================================================

/// `GET /api/about` — public content fetch.
pub async fn fetch_about() -> Result<AboutContent, ApiError> {
    let envelope = request_envelope(HttpMethod::Get, "/about", None).await?;
    expect_data(envelope)
}

/// `PUT /api/about` — replace content (admin).
pub async fn update_about(content: &AboutContent) -> Result<AboutContent, ApiError> {
    let payload = serde_json::to_value(content).map_err(|e| ApiError::Transport(e.to_string()))?;
    let envelope = request_envelope(HttpMethod::Put, "/about", Some(&payload)).await?;
    expect_data(envelope)
}

// =============================================================================
// CONTACT
// =============================================================================

/// `POST /api/contact` — public contact-form submission.
pub async fn submit_contact(payload: &serde_json::Value) -> Result<(), ApiError> {
    let envelope: ApiEnvelope<ContactMessage> = request_envelope(HttpMethod::Post, "/contact", Some(payload)).await?;
    expect_success(envelope)
}

/// `GET /api/contact` — admin inbox listing.
pub async fn fetch_contacts(
    page: i64,
    status: Option<&str>,
) -> Result<(Vec<ContactMessage>, Option<Pagination>), ApiError> {
    let envelope: ApiEnvelope<Vec<ContactMessage>> =
        request_envelope(HttpMethod::Get, &contacts_query(page, status), None).await?;
    let pagination = envelope.pagination;
    Ok((expect_data(envelope)?, pagination))
}

/// `PUT /api/contact/:id/reply` — save and send a reply (admin). Returns
/// the server's outcome message ("reply sent" vs "reply saved").
pub async fn reply_contact(id: &str, reply: &str) -> Result<String, ApiError> {
    let payload = serde_json::json!({ "reply": reply });
    let envelope: ApiEnvelope<ContactMessage> =
        request_envelope(HttpMethod::Put, &format!("/contact/{id}/reply"), Some(&payload)).await?;
    let message = envelope.message.clone().unwrap_or_else(|| "reply saved".to_owned());
    expect_success(envelope)?;
    Ok(message)
}

/// `PATCH /api/contact/:id/status` — workflow status update (admin).
pub async fn set_contact_status(id: &str, status: &str) -> Result<(), ApiError> {
    let payload = serde_json::json!({ "status": status });
    let envelope: ApiEnvelope<serde_json::Value> =
        request_envelope(HttpMethod::Patch, &format!("/contact/{id}/status"), Some(&payload)).await?;
    expect_success(envelope)
}

/// `DELETE /api/contact/:id` — remove a submission (admin).
pub async fn delete_contact(id: &str) -> Result<(), ApiError> {
    let envelope: ApiEnvelope<serde_json::Value> =
        request_envelope(HttpMethod::Delete, &format!("/contact/{id}"), None).await?;
    expect_success(envelope)
}

// =============================================================================
// UPLOADS
// =============================================================================

/// `DELETE /api/upload/:filename` — remove a stored image (admin).
pub async fn delete_upload(filename: &str) -> Result<(), ApiError> {
    let envelope: ApiEnvelope<serde_json::Value> =
        request_envelope(HttpMethod::Delete, &format!("/upload/{filename}"), None).await?;
    expect_success(envelope)
}
