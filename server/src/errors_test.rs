use super::*;

#[test]
fn statuses_match_error_taxonomy() {
    assert_eq!(ApiError::InvalidCredentials.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(ApiError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(ApiError::BadRequest("x".into()).status(), StatusCode::BAD_REQUEST);
    assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
    assert_eq!(ApiError::Internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn bad_request_message_passes_through() {
    let err = ApiError::BadRequest("title is required".into());
    assert_eq!(err.to_string(), "title is required");
}

#[test]
fn invalid_credentials_message_is_user_safe() {
    assert_eq!(ApiError::InvalidCredentials.to_string(), "invalid username or password");
}
