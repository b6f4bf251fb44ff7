use super::*;

#[test]
fn status_round_trips_through_strings() {
    for status in [ContactStatus::New, ContactStatus::Read, ContactStatus::Replied, ContactStatus::Archived] {
        assert_eq!(ContactStatus::from_str(status.as_str()), Some(status));
    }
}

#[test]
fn status_rejects_unknown_values() {
    assert_eq!(ContactStatus::from_str("spam"), None);
    assert_eq!(ContactStatus::from_str(""), None);
    assert_eq!(ContactStatus::from_str("NEW"), None);
}

#[test]
fn not_found_error_names_the_id() {
    let id = Uuid::new_v4();
    assert!(ContactError::NotFound(id).to_string().contains(&id.to_string()));
}

#[test]
fn invalid_status_error_echoes_input() {
    assert_eq!(
        ContactError::InvalidStatus("spam".to_owned()).to_string(),
        "invalid status: spam"
    );
}
