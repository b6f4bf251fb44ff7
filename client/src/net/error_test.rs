use super::*;

#[test]
fn server_message_wins_when_present() {
    let err = ApiError::Server { status: 400, message: Some("title is required".to_owned()) };
    assert_eq!(err.user_message(), "title is required");
}

#[test]
fn server_without_message_falls_back_to_generic() {
    let err = ApiError::Server { status: 500, message: None };
    assert_eq!(err.user_message(), GENERIC_MESSAGE);
}

#[test]
fn empty_server_message_falls_back_to_generic() {
    let err = ApiError::Server { status: 500, message: Some(String::new()) };
    assert_eq!(err.user_message(), GENERIC_MESSAGE);
}

#[test]
fn transport_message_passes_through() {
    let err = ApiError::Transport("connection refused".to_owned());
    assert_eq!(err.user_message(), "connection refused");
}

#[test]
fn unauthorized_names_the_session() {
    assert!(ApiError::Unauthorized.user_message().contains("sign in"));
}
