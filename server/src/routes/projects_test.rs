use super::*;

fn body(title: &str, category: &str) -> ProjectBody {
    ProjectBody {
        title: title.to_owned(),
        category: category.to_owned(),
        description: String::new(),
        location: None,
        year: None,
        images: serde_json::json!([]),
        featured: false,
    }
}

#[test]
fn validate_body_trims_and_accepts() {
    let input = validate_body(&body("  Harbour Bridge Works ", " infrastructure ")).expect("valid");
    assert_eq!(input.title, "Harbour Bridge Works");
    assert_eq!(input.category, "infrastructure");
}

#[test]
fn validate_body_rejects_blank_title() {
    assert!(matches!(validate_body(&body("   ", "civil")), Err(ApiError::BadRequest(_))));
}

#[test]
fn validate_body_rejects_blank_category() {
    assert!(matches!(validate_body(&body("Depot", "")), Err(ApiError::BadRequest(_))));
}

#[test]
fn validate_body_rejects_non_array_images() {
    let mut b = body("Depot", "civil");
    b.images = serde_json::json!({"url": "x"});
    assert!(matches!(validate_body(&b), Err(ApiError::BadRequest(_))));
}

#[test]
fn project_errors_map_to_expected_statuses() {
    let not_found = project_error_to_api(project::ProjectError::NotFound(Uuid::new_v4()));
    assert!(matches!(not_found, ApiError::NotFound));
}
