//! Account credential storage and verification.

use sha2::{Digest, Sha256};
use sqlx::{PgPool, Row};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("invalid username")]
    InvalidUsername,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

#[must_use]
pub fn normalize_username(username: &str) -> Option<String> {
    let normalized = username.trim().to_ascii_lowercase();
    if normalized.is_empty() || normalized.len() > 64 {
        return None;
    }
    Some(normalized)
}

#[must_use]
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    let bytes = hasher.finalize();
    bytes.iter().map(|b| format!("{b:02x}")).collect::<String>()
}

/// Verify a username/password pair against the accounts table.
///
/// Returns the account id when the credentials match, `None` otherwise.
pub async fn verify_credentials(pool: &PgPool, username: &str, password: &str) -> Result<Option<Uuid>, AccountError> {
    let Some(normalized) = normalize_username(username) else {
        return Ok(None);
    };
    let password_hash = hash_password(password);

    let row = sqlx::query("SELECT id FROM accounts WHERE username = $1 AND password_hash = $2")
        .bind(&normalized)
        .bind(&password_hash)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|r| r.get("id")))
}

/// Create or update the admin account with the given credentials.
pub async fn upsert_admin(pool: &PgPool, username: &str, password: &str) -> Result<Uuid, AccountError> {
    let normalized = normalize_username(username).ok_or(AccountError::InvalidUsername)?;
    let password_hash = hash_password(password);

    let row = sqlx::query(
        r"INSERT INTO accounts (username, password_hash, role)
          VALUES ($1, $2, 'admin')
          ON CONFLICT (username) DO UPDATE SET password_hash = EXCLUDED.password_hash
          RETURNING id",
    )
    .bind(&normalized)
    .bind(&password_hash)
    .fetch_one(pool)
    .await?;

    Ok(row.get("id"))
}

#[cfg(test)]
#[path = "account_test.rs"]
mod tests;
