use super::*;
#[cfg(feature = "live-db-tests")]
use crate::state::test_helpers;

#[test]
fn not_found_error_names_the_id() {
    let id = Uuid::new_v4();
    let err = ProjectError::NotFound(id);
    assert!(err.to_string().contains(&id.to_string()));
}

#[test]
fn project_columns_select_date_formatted_created_at() {
    assert!(PROJECT_COLUMNS.contains("to_char(created_at, 'YYYY-MM-DD')"));
}

#[cfg(feature = "live-db-tests")]
#[tokio::test]
async fn create_get_update_delete_round_trip() {
    let state = test_helpers::test_app_state();
    let input = ProjectInput {
        title: "Riverside Offices".to_owned(),
        category: "commercial".to_owned(),
        description: "Five-storey office block".to_owned(),
        location: Some("Leeds".to_owned()),
        year: Some(2023),
        images: serde_json::json!([{"url": "/uploads/a.jpg", "caption": null}]),
        featured: false,
    };

    let created = create_project(&state.pool, &input).await.expect("create");
    assert_eq!(created.title, "Riverside Offices");

    let fetched = get_project(&state.pool, created.id).await.expect("get");
    assert_eq!(fetched.category, "commercial");

    let mut updated_input = input.clone();
    updated_input.featured = true;
    let updated = update_project(&state.pool, created.id, &updated_input).await.expect("update");
    assert!(updated.featured);

    delete_project(&state.pool, created.id).await.expect("delete");
    assert!(matches!(
        get_project(&state.pool, created.id).await,
        Err(ProjectError::NotFound(_))
    ));
}
