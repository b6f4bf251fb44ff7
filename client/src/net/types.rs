//! Wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! Every API response arrives wrapped in the shared envelope; these types
//! mirror the server's serialization so serde round-trips stay lossless.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Uniform response wrapper returned by every API endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub errors: Option<Vec<String>>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Pagination metadata attached to list responses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

/// The authenticated account as returned by `/api/auth/profile`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique account identifier (UUID string).
    pub id: String,
    /// Login name.
    pub username: String,
}

/// Payload of a successful `/api/auth/login`.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginData {
    pub token: String,
}

/// One entry of a project's image list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectImage {
    pub url: String,
    #[serde(default)]
    pub caption: Option<String>,
}

/// A portfolio project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub images: Vec<ProjectImage>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A contact-form submission as seen in the admin inbox.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
    pub status: String,
    #[serde(default)]
    pub reply: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Editable about-page content.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutContent {
    pub title: String,
    pub body: String,
    pub mission: String,
    pub years_experience: i32,
    pub projects_completed: i32,
    pub team_size: i32,
}

/// A stored upload returned by `/api/upload/images`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StoredImage {
    pub filename: String,
    pub url: String,
}
