use super::*;

#[test]
fn upload_endpoint_targets_api_upload_route() {
    assert_eq!(upload_endpoint(), "/api/upload/images");
}

#[test]
fn timeout_is_thirty_seconds() {
    assert_eq!(UPLOAD_TIMEOUT_MS, 30_000);
}

#[test]
fn timeout_message_names_the_deadline() {
    assert_eq!(timeout_message(), "upload timed out after 30s");
}
