//! Contact-reply mail delivery via Resend.

use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;

const CONTACT_REPLY_TEMPLATE: &str = include_str!("../../templates/contact_reply.html");

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("email delivery failed: {0}")]
    Delivery(String),
}

/// Configured mail sender. Constructed once at startup when the env vars
/// are present; `None` disables outbound mail without affecting replies
/// being saved.
pub struct Mailer {
    resend: Resend,
    from: String,
}

impl Mailer {
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("RESEND_API_KEY").ok().filter(|v| !v.trim().is_empty())?;
        let from = std::env::var("RESEND_FROM").ok().filter(|v| !v.trim().is_empty())?;
        Some(Self { resend: Resend::new(&api_key), from })
    }

    /// Send a reply to a contact-form submitter.
    ///
    /// # Errors
    ///
    /// Returns `Delivery` if the provider rejects the send.
    pub async fn send_contact_reply(&self, to_email: &str, name: &str, reply: &str) -> Result<(), MailError> {
        let to = [to_email];
        let subject = "Re: your enquiry";
        let html = render_contact_reply_template(name, reply);

        let email = CreateEmailBaseOptions::new(&self.from, to, subject).with_html(&html);
        self.resend
            .emails
            .send(email)
            .await
            .map_err(|e| MailError::Delivery(e.to_string()))?;
        Ok(())
    }
}

#[must_use]
pub fn render_contact_reply_template(name: &str, reply: &str) -> String {
    CONTACT_REPLY_TEMPLATE
        .replace("{{NAME}}", name)
        .replace("{{REPLY}}", reply)
}

#[cfg(test)]
#[path = "mailer_test.rs"]
mod tests;
