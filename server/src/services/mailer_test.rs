use super::*;

#[test]
fn template_substitutes_name_and_reply() {
    let html = render_contact_reply_template("Dana", "We can start in June.");
    assert!(html.contains("Hi Dana,"));
    assert!(html.contains("We can start in June."));
    assert!(!html.contains("{{NAME}}"));
    assert!(!html.contains("{{REPLY}}"));
}

#[test]
fn from_env_requires_both_vars() {
    // Relies on the test environment not defining the Resend vars; from_env
    // must return None rather than panic.
    if std::env::var("RESEND_API_KEY").is_err() || std::env::var("RESEND_FROM").is_err() {
        assert!(Mailer::from_env().is_none());
    }
}
