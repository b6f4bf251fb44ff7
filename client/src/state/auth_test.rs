use super::*;

fn user() -> User {
    User { id: "u1".to_owned(), username: "admin".to_owned() }
}

#[test]
fn unknown_is_loading_and_not_authenticated() {
    let state = SessionState::Unknown;
    assert!(state.is_loading());
    assert!(!state.is_authenticated());
    assert!(state.user().is_none());
}

#[test]
fn anonymous_is_settled_and_not_authenticated() {
    let state = SessionState::Anonymous;
    assert!(!state.is_loading());
    assert!(!state.is_authenticated());
}

#[test]
fn authenticated_exposes_the_user() {
    let state = SessionState::Authenticated(user());
    assert!(state.is_authenticated());
    assert_eq!(state.user().map(|u| u.username.as_str()), Some("admin"));
}

#[test]
fn restore_without_token_settles_anonymous_without_network() {
    // The shortcut returning a state means restore() exits before any
    // profile fetch is issued.
    assert_eq!(restore_shortcut(false), Some(SessionState::Anonymous));
}

#[test]
fn restore_with_token_proceeds_to_profile_fetch() {
    assert_eq!(restore_shortcut(true), None);
}

#[test]
fn successful_profile_fetch_settles_authenticated() {
    assert_eq!(settled_state(Some(user())), SessionState::Authenticated(user()));
}

#[test]
fn failed_profile_fetch_settles_anonymous() {
    assert_eq!(settled_state(None), SessionState::Anonymous);
}

#[test]
fn login_outcome_success_reports_true() {
    let (state, success) = login_outcome(Some(user()));
    assert!(success);
    assert_eq!(state, SessionState::Authenticated(user()));
}

#[test]
fn login_outcome_failure_reports_false_and_anonymous() {
    let (state, success) = login_outcome(None);
    assert!(!success);
    assert_eq!(state, SessionState::Anonymous);
}

#[test]
fn default_session_state_is_unknown() {
    assert_eq!(SessionState::default(), SessionState::Unknown);
}
