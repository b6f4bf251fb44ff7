//! Contact-form service — submissions, status workflow, replies.

use sqlx::{PgPool, Row};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("contact message not found: {0}")]
    NotFound(Uuid),
    #[error("invalid status: {0}")]
    InvalidStatus(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Workflow status of a contact submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactStatus {
    New,
    Read,
    Replied,
    Archived,
}

impl ContactStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Read => "read",
            Self::Replied => "replied",
            Self::Archived => "archived",
        }
    }

    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "new" => Some(Self::New),
            "read" => Some(Self::Read),
            "replied" => Some(Self::Replied),
            "archived" => Some(Self::Archived),
            _ => None,
        }
    }
}

/// Row returned from contact queries.
#[derive(Debug, Clone)]
pub struct ContactRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub status: String,
    pub reply: Option<String>,
    pub created_at: String,
}

fn row_to_contact(r: &sqlx::postgres::PgRow) -> ContactRow {
    ContactRow {
        id: r.get("id"),
        name: r.get("name"),
        email: r.get("email"),
        phone: r.get("phone"),
        subject: r.get("subject"),
        message: r.get("message"),
        status: r.get("status"),
        reply: r.get("reply"),
        created_at: r.get("created_at"),
    }
}

const CONTACT_COLUMNS: &str = r"id, name, email, phone, subject, message, status, reply,
    to_char(created_at, 'YYYY-MM-DD HH24:MI') AS created_at";

/// Store a new public contact-form submission.
pub async fn create_submission(
    pool: &PgPool,
    name: &str,
    email: &str,
    phone: Option<&str>,
    subject: Option<&str>,
    message: &str,
) -> Result<ContactRow, ContactError> {
    let row = sqlx::query(&format!(
        r"INSERT INTO contact_messages (name, email, phone, subject, message)
          VALUES ($1, $2, $3, $4, $5)
          RETURNING {CONTACT_COLUMNS}",
    ))
    .bind(name)
    .bind(email)
    .bind(phone)
    .bind(subject)
    .bind(message)
    .fetch_one(pool)
    .await?;

    Ok(row_to_contact(&row))
}

/// List submissions with pagination and an optional status filter.
pub async fn list_submissions(
    pool: &PgPool,
    page: i64,
    limit: i64,
    status: Option<ContactStatus>,
) -> Result<(Vec<ContactRow>, i64), ContactError> {
    let offset = (page - 1) * limit;
    let status = status.map(ContactStatus::as_str);

    let rows = sqlx::query(&format!(
        r"SELECT {CONTACT_COLUMNS}
          FROM contact_messages
          WHERE ($1::text IS NULL OR status = $1)
          ORDER BY created_at DESC
          LIMIT $2 OFFSET $3",
    ))
    .bind(status)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contact_messages WHERE ($1::text IS NULL OR status = $1)")
        .bind(status)
        .fetch_one(pool)
        .await?;

    Ok((rows.iter().map(row_to_contact).collect(), total))
}

/// Fetch one submission by id.
///
/// # Errors
///
/// Returns `NotFound` if no row matches, or a database error.
pub async fn get_submission(pool: &PgPool, id: Uuid) -> Result<ContactRow, ContactError> {
    let row = sqlx::query(&format!("SELECT {CONTACT_COLUMNS} FROM contact_messages WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(ContactError::NotFound(id))?;

    Ok(row_to_contact(&row))
}

/// Update the workflow status of a submission.
pub async fn set_status(pool: &PgPool, id: Uuid, status: ContactStatus) -> Result<(), ContactError> {
    let result = sqlx::query("UPDATE contact_messages SET status = $2 WHERE id = $1")
        .bind(id)
        .bind(status.as_str())
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ContactError::NotFound(id));
    }
    Ok(())
}

/// Store the reply text for a submission and mark it replied.
pub async fn save_reply(pool: &PgPool, id: Uuid, reply: &str) -> Result<ContactRow, ContactError> {
    let row = sqlx::query(&format!(
        r"UPDATE contact_messages
          SET reply = $2, status = 'replied'
          WHERE id = $1
          RETURNING {CONTACT_COLUMNS}",
    ))
    .bind(id)
    .bind(reply)
    .fetch_optional(pool)
    .await?
    .ok_or(ContactError::NotFound(id))?;

    Ok(row_to_contact(&row))
}

/// Delete a submission by id.
///
/// # Errors
///
/// Returns `NotFound` if no row matches, or a database error.
pub async fn delete_submission(pool: &PgPool, id: Uuid) -> Result<(), ContactError> {
    let result = sqlx::query("DELETE FROM contact_messages WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ContactError::NotFound(id));
    }
    Ok(())
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
