//! Session-token management.
//!
//! ARCHITECTURE
//! ============
//! Sessions are opaque random tokens stored server-side with a fixed 1-day
//! expiry. Presence of a token client-side proves nothing; every
//! authenticated request revalidates against this table.

use std::fmt::Write;

use rand::Rng;
use sqlx::{PgPool, Row};
use uuid::Uuid;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Account row returned from session validation.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SessionUser {
    /// Unique account identifier.
    pub id: Uuid,
    /// Login name.
    pub username: String,
}

/// Create a session for the given account, returning the token.
pub async fn create_session(pool: &PgPool, account_id: Uuid) -> Result<String, sqlx::Error> {
    let token = generate_token();
    sqlx::query("INSERT INTO sessions (token, account_id) VALUES ($1, $2)")
        .bind(&token)
        .bind(account_id)
        .execute(pool)
        .await?;
    Ok(token)
}

/// Validate a session token and return the associated account.
pub async fn validate_session(pool: &PgPool, token: &str) -> Result<Option<SessionUser>, sqlx::Error> {
    let row = sqlx::query(
        r"SELECT a.id, a.username
          FROM sessions s
          JOIN accounts a ON a.id = s.account_id
          WHERE s.token = $1 AND s.expires_at > now()",
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| SessionUser { id: r.get("id"), username: r.get("username") }))
}

/// Delete a session by token.
pub async fn delete_session(pool: &PgPool, token: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sessions WHERE token = $1")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
