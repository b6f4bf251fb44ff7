use super::*;

#[test]
fn ok_envelope_serializes_without_optional_fields() {
    let env = Envelope::ok(serde_json::json!({"id": 1}));
    let json = serde_json::to_value(&env).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["id"], 1);
    assert!(json.get("message").is_none());
    assert!(json.get("error").is_none());
    assert!(json.get("pagination").is_none());
}

#[test]
fn failure_envelope_carries_message_and_error() {
    let env = Envelope::failure("nope");
    let json = serde_json::to_value(&env).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "nope");
    assert_eq!(json["error"], "nope");
    assert!(json.get("data").is_none());
}

#[test]
fn paginated_envelope_includes_pagination_block() {
    let env = Envelope::ok_paginated(serde_json::json!([]), Pagination::new(2, 10, 35));
    let json = serde_json::to_value(&env).unwrap();
    assert_eq!(json["pagination"]["page"], 2);
    assert_eq!(json["pagination"]["total_pages"], 4);
}

#[test]
fn pagination_rounds_partial_pages_up() {
    assert_eq!(Pagination::new(1, 10, 0).total_pages, 0);
    assert_eq!(Pagination::new(1, 10, 1).total_pages, 1);
    assert_eq!(Pagination::new(1, 10, 10).total_pages, 1);
    assert_eq!(Pagination::new(1, 10, 11).total_pages, 2);
}

#[test]
fn page_params_defaults_and_clamps() {
    assert_eq!(page_params(None, None), (1, 10));
    assert_eq!(page_params(Some(0), Some(0)), (1, 1));
    assert_eq!(page_params(Some(-3), Some(1000)), (1, 100));
    assert_eq!(page_params(Some(4), Some(25)), (4, 25));
}
