use super::*;
use crate::net::types::ApiEnvelope;

fn envelope<T>(success: bool, data: Option<T>, message: Option<&str>) -> ApiEnvelope<T> {
    ApiEnvelope {
        success,
        message: message.map(ToOwned::to_owned),
        data,
        error: None,
        errors: None,
        pagination: None,
    }
}

#[test]
fn api_url_prefixes_api_segment() {
    assert_eq!(api_url("/auth/login"), "/api/auth/login");
    assert_eq!(api_url("/projects/p1"), "/api/projects/p1");
}

#[test]
fn bearer_value_formats_header() {
    assert_eq!(bearer_value("tok123"), "Bearer tok123");
}

#[test]
fn unauthorized_redirect_fires_on_admin_pages() {
    assert_eq!(unauthorized_redirect("/admin/dashboard"), Some("/admin/login"));
    assert_eq!(unauthorized_redirect("/admin/projects"), Some("/admin/login"));
}

#[test]
fn unauthorized_redirect_skips_login_page() {
    assert_eq!(unauthorized_redirect("/admin/login"), None);
}

#[test]
fn unauthorized_redirect_skips_public_pages() {
    assert_eq!(unauthorized_redirect("/"), None);
    assert_eq!(unauthorized_redirect("/projects"), None);
}

#[test]
fn envelope_result_passes_2xx_through() {
    let env = envelope(true, Some(1), None);
    assert!(envelope_result(201, env).is_ok());
}

#[test]
fn envelope_result_maps_4xx_to_server_error_with_message() {
    let env = envelope::<i32>(false, None, Some("title is required"));
    match envelope_result(400, env) {
        Err(ApiError::Server { status: 400, message }) => {
            assert_eq!(message.as_deref(), Some("title is required"));
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn expect_data_unwraps_success_payload() {
    let env = envelope(true, Some(41), None);
    assert_eq!(expect_data(env).unwrap(), 41);
}

#[test]
fn expect_data_errors_on_missing_payload() {
    let env = envelope::<i32>(true, None, Some("odd"));
    assert!(expect_data(env).is_err());
}

#[test]
fn expect_success_accepts_dataless_envelope() {
    let env = envelope::<i32>(true, None, Some("deleted"));
    assert!(expect_success(env).is_ok());
}

#[test]
fn expect_success_rejects_failure_envelope() {
    let env = envelope::<i32>(false, None, Some("nope"));
    assert!(matches!(expect_success(env), Err(ApiError::Server { .. })));
}

#[test]
fn projects_query_includes_only_set_filters() {
    assert_eq!(projects_query(1, None, None), "/projects?page=1");
    assert_eq!(projects_query(2, Some("civil"), None), "/projects?page=2&category=civil");
    assert_eq!(
        projects_query(1, Some("civil"), Some(true)),
        "/projects?page=1&category=civil&featured=true"
    );
    assert_eq!(projects_query(3, Some(""), None), "/projects?page=3");
}

#[test]
fn contacts_query_includes_only_set_filters() {
    assert_eq!(contacts_query(1, None), "/contact?page=1");
    assert_eq!(contacts_query(2, Some("new")), "/contact?page=2&status=new");
    assert_eq!(contacts_query(2, Some("")), "/contact?page=2");
}
