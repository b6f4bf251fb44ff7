use super::*;

#[test]
fn cookie_value_finds_single_cookie() {
    assert_eq!(cookie_value("auth_token=abc123", AUTH_COOKIE), Some("abc123".to_owned()));
}

#[test]
fn cookie_value_finds_among_many() {
    let cookies = "theme=dark; auth_token=tok; consent=yes";
    assert_eq!(cookie_value(cookies, AUTH_COOKIE), Some("tok".to_owned()));
}

#[test]
fn cookie_value_tolerates_spacing() {
    assert_eq!(cookie_value("a=1;  auth_token=tok", AUTH_COOKIE), Some("tok".to_owned()));
}

#[test]
fn cookie_value_missing_returns_none() {
    assert_eq!(cookie_value("theme=dark; consent=yes", AUTH_COOKIE), None);
}

#[test]
fn cookie_value_empty_value_is_absent() {
    assert_eq!(cookie_value("auth_token=; theme=dark", AUTH_COOKIE), None);
}

#[test]
fn cookie_value_does_not_match_name_prefixes() {
    assert_eq!(cookie_value("auth_token_old=stale", AUTH_COOKIE), None);
}

#[test]
fn set_cookie_string_scopes_to_site_root() {
    let s = build_set_cookie(AUTH_COOKIE, "tok", TOKEN_MAX_AGE_SECS);
    assert_eq!(s, "auth_token=tok; Path=/; Max-Age=86400; SameSite=Lax");
}

#[test]
fn clear_cookie_string_expires_immediately() {
    let s = build_clear_cookie(AUTH_COOKIE);
    assert!(s.starts_with("auth_token=;"));
    assert!(s.contains("Max-Age=0"));
}
