//! Edge route guard for admin pages.
//!
//! DESIGN
//! ======
//! The guard is presence-only: it checks that the `auth_token` cookie
//! exists, not that it validates. That keeps navigation cheap (no database
//! hit per page view) and prevents a flash of protected content; the
//! client-side session controller is authoritative and demotes a stale or
//! forged token after its startup profile check.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};

pub const AUTH_COOKIE: &str = "auth_token";
pub const ADMIN_PREFIX: &str = "/admin";
pub const LOGIN_PATH: &str = "/admin/login";
pub const DASHBOARD_PATH: &str = "/admin/dashboard";

/// Whether a path is under the reserved admin segment.
#[must_use]
pub fn is_admin_path(path: &str) -> bool {
    path == ADMIN_PREFIX || path.starts_with("/admin/")
}

/// Decide where (if anywhere) to redirect a request before rendering.
///
/// Returns `Some(target)` when the request must be redirected, `None` when
/// it may proceed.
#[must_use]
pub fn guard_redirect(path: &str, has_token: bool) -> Option<&'static str> {
    if path == LOGIN_PATH {
        return has_token.then_some(DASHBOARD_PATH);
    }
    if is_admin_path(path) && !has_token {
        return Some(LOGIN_PATH);
    }
    None
}

/// Axum middleware applying `guard_redirect` to every page request.
pub async fn admin_guard(jar: CookieJar, request: Request, next: Next) -> Response {
    let has_token = jar
        .get(AUTH_COOKIE)
        .map(Cookie::value)
        .is_some_and(|v| !v.is_empty());

    if let Some(target) = guard_redirect(request.uri().path(), has_token) {
        return Redirect::temporary(target).into_response();
    }

    next.run(request).await
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
