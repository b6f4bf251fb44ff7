//! Client-side API error taxonomy.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// What went wrong with an API call, from the caller's point of view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (network, DNS, serialization).
    Transport(String),
    /// The server rejected the session (HTTP 401). By the time the caller
    /// sees this the token store has already been purged.
    Unauthorized,
    /// Any other non-2xx response, with the envelope message when present.
    Server { status: u16, message: Option<String> },
}

const GENERIC_MESSAGE: &str = "Something went wrong. Please try again.";
const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please sign in again.";

impl ApiError {
    /// The text shown to the user in a toast: the server's envelope message
    /// when one exists, otherwise the transport error, otherwise a generic
    /// fallback.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(msg) if !msg.is_empty() => msg.clone(),
            Self::Transport(_) => GENERIC_MESSAGE.to_owned(),
            Self::Unauthorized => SESSION_EXPIRED_MESSAGE.to_owned(),
            Self::Server { message: Some(msg), .. } if !msg.is_empty() => msg.clone(),
            Self::Server { .. } => GENERIC_MESSAGE.to_owned(),
        }
    }
}
