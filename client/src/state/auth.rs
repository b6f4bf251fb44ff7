//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The single process-wide authority for "who is logged in", provided via
//! context and consumed by route guards and identity-dependent components.
//!
//! DESIGN
//! ======
//! The session is an explicit three-state machine rather than ad hoc
//! booleans: `Unknown` until the startup check settles, then `Anonymous`
//! or `Authenticated`. The 401 interceptor purges only the token store;
//! this signal may lag one request cycle behind it, which the navigation
//! guards absorb by re-checking token presence.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::net::{api, token};
use crate::util::auth::is_admin_path;

/// Authentication state of the running app.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    /// Startup check has not settled yet.
    #[default]
    Unknown,
    /// No valid session.
    Anonymous,
    /// Confirmed session with the fetched profile.
    Authenticated(User),
}

impl SessionState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Startup fast path: with no stored token the session settles to
/// `Anonymous` immediately, issuing no network call.
pub(crate) fn restore_shortcut(token_present: bool) -> Option<SessionState> {
    (!token_present).then_some(SessionState::Anonymous)
}

/// Map a profile-fetch outcome onto the settled session state.
pub(crate) fn settled_state(profile: Option<User>) -> SessionState {
    profile.map_or(SessionState::Anonymous, SessionState::Authenticated)
}

/// Map a post-login profile-fetch outcome onto `(state, success)`.
pub(crate) fn login_outcome(profile: Option<User>) -> (SessionState, bool) {
    match profile {
        Some(user) => (SessionState::Authenticated(user), true),
        None => (SessionState::Anonymous, false),
    }
}

/// Handle on the shared session signal. Copyable so closures can capture it
/// freely; all mutations happen on the single UI thread.
#[derive(Clone, Copy)]
pub struct AuthSession {
    state: RwSignal<SessionState>,
}

impl Default for AuthSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthSession {
    #[must_use]
    pub fn new() -> Self {
        Self { state: RwSignal::new(SessionState::Unknown) }
    }

    /// Create the session context for the component tree.
    pub fn provide() -> Self {
        let session = Self::new();
        provide_context(session);
        session
    }

    /// Fetch the session from context. Panics outside the app tree.
    #[must_use]
    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    #[must_use]
    pub fn get(&self) -> SessionState {
        self.state.get()
    }

    #[must_use]
    pub fn signal(&self) -> RwSignal<SessionState> {
        self.state
    }

    /// Startup session restoration: rebuild the in-memory user from the
    /// stored token, or settle to `Anonymous`.
    pub async fn restore(&self) {
        if let Some(state) = restore_shortcut(token::get().is_some()) {
            self.state.set(state);
            return;
        }

        let profile = api::fetch_profile().await.ok();
        if profile.is_none() {
            token::clear();
        }
        self.state.set(settled_state(profile));
    }

    /// Attempt a credential login. On success the token is stored and the
    /// profile fetched before the state flips; any failure leaves no
    /// partial state behind. Never throws — the caller reads the flag and
    /// notifies the user itself.
    pub async fn login(&self, username: &str, password: &str) -> bool {
        let Ok(data) = api::login(username, password).await else {
            self.state.set(SessionState::Anonymous);
            return false;
        };

        token::set(&data.token);
        let profile = api::fetch_profile().await.ok();
        if profile.is_none() {
            token::clear();
        }
        let (state, success) = login_outcome(profile);
        self.state.set(state);
        success
    }

    /// Explicit logout: best-effort server-side session delete, then local
    /// teardown. Leaving an admin page goes through a hard navigation so no
    /// admin UI stays mounted without a session.
    pub async fn logout(&self) {
        let _ = api::logout().await;
        token::clear();
        self.state.set(SessionState::Anonymous);

        if is_admin_path(&api::current_path()) {
            api::hard_navigate("/");
        }
    }
}
