//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Admin route components apply identical redirect behavior once the
//! session controller settles. This is the client half of the two-layer
//! guard: the server middleware already did a cheap token-presence check
//! before the page rendered; these effects are authoritative and correct
//! the UI when that token turns out to be stale or forged.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthSession, SessionState};

pub const ADMIN_PREFIX: &str = "/admin";
pub const LOGIN_PATH: &str = "/admin/login";
pub const DASHBOARD_PATH: &str = "/admin/dashboard";

/// Whether a path is under the reserved admin segment.
#[must_use]
pub fn is_admin_path(path: &str) -> bool {
    path == ADMIN_PREFIX || path.starts_with("/admin/")
}

/// Whether a settled session requires leaving a protected page.
#[must_use]
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.is_loading() && !state.is_authenticated()
}

/// Whether a settled session requires leaving the login page.
#[must_use]
pub fn should_leave_login(state: &SessionState) -> bool {
    state.is_authenticated()
}

/// Redirect to the login page whenever auth has settled with no user.
pub fn install_admin_guard<F>(session: AuthSession, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}

/// Redirect to the dashboard whenever an authenticated user lands on the
/// login page.
pub fn install_login_redirect<F>(session: AuthSession, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_leave_login(&session.get()) {
            navigate(DASHBOARD_PATH, NavigateOptions::default());
        }
    });
}
