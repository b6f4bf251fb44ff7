use super::*;

#[test]
fn success_envelope_with_data_deserializes() {
    let json = r#"{"success": true, "data": {"token": "abc"}}"#;
    let env: ApiEnvelope<LoginData> = serde_json::from_str(json).unwrap();
    assert!(env.success);
    assert_eq!(env.data.unwrap().token, "abc");
    assert!(env.message.is_none());
    assert!(env.pagination.is_none());
}

#[test]
fn failure_envelope_without_data_deserializes() {
    let json = r#"{"success": false, "message": "invalid username or password", "error": "invalid username or password"}"#;
    let env: ApiEnvelope<LoginData> = serde_json::from_str(json).unwrap();
    assert!(!env.success);
    assert!(env.data.is_none());
    assert_eq!(env.message.as_deref(), Some("invalid username or password"));
}

#[test]
fn paginated_envelope_deserializes() {
    let json = r#"{"success": true, "data": [], "pagination": {"page": 2, "limit": 10, "total": 35, "total_pages": 4}}"#;
    let env: ApiEnvelope<Vec<Project>> = serde_json::from_str(json).unwrap();
    let pagination = env.pagination.unwrap();
    assert_eq!(pagination.page, 2);
    assert_eq!(pagination.total_pages, 4);
}

#[test]
fn project_defaults_fill_missing_fields() {
    let json = r#"{"id": "p1", "title": "Depot", "category": "industrial"}"#;
    let project: Project = serde_json::from_str(json).unwrap();
    assert!(project.images.is_empty());
    assert!(!project.featured);
    assert!(project.location.is_none());
}

#[test]
fn project_image_caption_is_optional() {
    let json = r#"{"url": "/uploads/a.jpg"}"#;
    let image: ProjectImage = serde_json::from_str(json).unwrap();
    assert_eq!(image.url, "/uploads/a.jpg");
    assert!(image.caption.is_none());
}
