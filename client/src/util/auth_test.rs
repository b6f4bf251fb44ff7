use super::*;
use crate::net::types::User;

fn authenticated() -> SessionState {
    SessionState::Authenticated(User { id: "u1".to_owned(), username: "admin".to_owned() })
}

#[test]
fn unauth_redirect_fires_when_settled_without_user() {
    assert!(should_redirect_unauth(&SessionState::Anonymous));
}

#[test]
fn unauth_redirect_waits_while_loading() {
    assert!(!should_redirect_unauth(&SessionState::Unknown));
}

#[test]
fn unauth_redirect_skipped_when_authenticated() {
    assert!(!should_redirect_unauth(&authenticated()));
}

#[test]
fn login_page_releases_authenticated_users() {
    assert!(should_leave_login(&authenticated()));
    assert!(!should_leave_login(&SessionState::Anonymous));
    assert!(!should_leave_login(&SessionState::Unknown));
}

#[test]
fn admin_path_matches_prefix_segment_only() {
    assert!(is_admin_path("/admin"));
    assert!(is_admin_path("/admin/dashboard"));
    assert!(!is_admin_path("/administrator"));
    assert!(!is_admin_path("/projects"));
    assert!(!is_admin_path("/"));
}
