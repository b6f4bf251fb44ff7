use super::*;

#[test]
fn admin_page_without_token_redirects_to_login() {
    assert_eq!(guard_redirect("/admin/dashboard", false), Some(LOGIN_PATH));
    assert_eq!(guard_redirect("/admin/projects", false), Some(LOGIN_PATH));
    assert_eq!(guard_redirect("/admin", false), Some(LOGIN_PATH));
}

#[test]
fn admin_page_with_token_proceeds() {
    assert_eq!(guard_redirect("/admin/dashboard", true), None);
    assert_eq!(guard_redirect("/admin/contacts", true), None);
}

#[test]
fn login_with_token_redirects_to_dashboard() {
    assert_eq!(guard_redirect("/admin/login", true), Some(DASHBOARD_PATH));
}

#[test]
fn login_without_token_proceeds() {
    assert_eq!(guard_redirect("/admin/login", false), None);
}

#[test]
fn non_admin_paths_always_proceed() {
    for path in ["/", "/projects", "/contact", "/administrator"] {
        assert_eq!(guard_redirect(path, false), None, "path {path}");
        assert_eq!(guard_redirect(path, true), None, "path {path}");
    }
}

#[test]
fn admin_prefix_does_not_match_lookalike_segments() {
    assert!(!is_admin_path("/administrator"));
    assert!(!is_admin_path("/adminx/login"));
    assert!(is_admin_path("/admin"));
    assert!(is_admin_path("/admin/"));
}
