use super::*;

fn submission(name: &str, email: &str, message: &str) -> SubmitContactBody {
    SubmitContactBody {
        name: name.to_owned(),
        email: email.to_owned(),
        phone: None,
        subject: None,
        message: message.to_owned(),
    }
}

#[test]
fn valid_submission_passes() {
    assert!(validate_submission(&submission("Ada", "ada@example.com", "Quote please")).is_ok());
}

#[test]
fn blank_name_rejected() {
    assert!(matches!(
        validate_submission(&submission(" ", "ada@example.com", "hi")),
        Err(ApiError::BadRequest(_))
    ));
}

#[test]
fn email_without_at_rejected() {
    assert!(matches!(
        validate_submission(&submission("Ada", "not-an-email", "hi")),
        Err(ApiError::BadRequest(_))
    ));
}

#[test]
fn blank_message_rejected() {
    assert!(matches!(
        validate_submission(&submission("Ada", "ada@example.com", "   ")),
        Err(ApiError::BadRequest(_))
    ));
}

#[test]
fn invalid_status_maps_to_bad_request() {
    let err = contact_error_to_api(contact::ContactError::InvalidStatus("spam".to_owned()));
    assert!(matches!(err, ApiError::BadRequest(_)));
}

#[test]
fn not_found_maps_to_not_found() {
    let err = contact_error_to_api(contact::ContactError::NotFound(Uuid::new_v4()));
    assert!(matches!(err, ApiError::NotFound));
}
