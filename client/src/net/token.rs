//! Client token store — the single read/write/delete surface over the
//! `auth_token` cookie.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API client reads this store on every outbound request and purges it
//! on 401; the session controller reads it during startup restoration. The
//! cookie travels with page requests so the server-side route guard can do
//! its presence check without a round trip.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

pub const AUTH_COOKIE: &str = "auth_token";

/// Cookie lifetime, matching the server-side session expiry (1 day).
pub const TOKEN_MAX_AGE_SECS: u32 = 86_400;

/// Extract a cookie's value from a `document.cookie` string.
#[cfg(any(test, feature = "hydrate"))]
#[must_use]
pub(crate) fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name && !value.is_empty()).then(|| value.to_owned())
    })
}

#[cfg(any(test, feature = "hydrate"))]
#[must_use]
pub(crate) fn build_set_cookie(name: &str, value: &str, max_age_secs: u32) -> String {
    format!("{name}={value}; Path=/; Max-Age={max_age_secs}; SameSite=Lax")
}

#[cfg(any(test, feature = "hydrate"))]
#[must_use]
pub(crate) fn build_clear_cookie(name: &str) -> String {
    format!("{name}=; Path=/; Max-Age=0; SameSite=Lax")
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;
    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

/// Read the current session token. Returns `None` on the server, before
/// hydration, or when no token is stored.
#[must_use]
pub fn get() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let cookies = html_document()?.cookie().ok()?;
        cookie_value(&cookies, AUTH_COOKIE)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Store a session token, overwriting any existing value.
pub fn set(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = html_document() {
            let _ = doc.set_cookie(&build_set_cookie(AUTH_COOKIE, token, TOKEN_MAX_AGE_SECS));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the session token. Idempotent.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = html_document() {
            let _ = doc.set_cookie(&build_clear_cookie(AUTH_COOKIE));
        }
    }
}
