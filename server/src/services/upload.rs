//! Image upload storage — uuid filenames under the configured upload dir.
//!
//! ERROR HANDLING
//! ==============
//! Filenames coming back from clients for deletion are validated against
//! traversal before touching the filesystem; a bad name is a client error,
//! never an I/O attempt.

use std::path::Path;

use uuid::Uuid;

const ALLOWED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "gif"];

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("unsupported image type: {0}")]
    UnsupportedType(String),
    #[error("invalid filename")]
    InvalidFilename,
    #[error("file not found: {0}")]
    NotFound(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A stored image: its on-disk name and the path clients fetch it from.
#[derive(Debug, Clone, serde::Serialize)]
pub struct StoredImage {
    pub filename: String,
    pub url: String,
}

/// Extract a lowercase, allow-listed extension from an uploaded filename.
#[must_use]
pub fn image_extension(original_name: &str) -> Option<String> {
    let ext = original_name.rsplit_once('.')?.1.to_ascii_lowercase();
    ALLOWED_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

/// Whether a client-supplied filename is safe to join onto the upload dir.
#[must_use]
pub fn is_safe_filename(name: &str) -> bool {
    !name.is_empty() && !name.contains('/') && !name.contains('\\') && !name.contains("..")
}

/// Build the public URL path for a stored filename.
#[must_use]
pub fn public_url(filename: &str) -> String {
    format!("/uploads/{filename}")
}

/// Persist uploaded image bytes under a fresh uuid filename.
///
/// # Errors
///
/// Returns `UnsupportedType` for disallowed extensions, or an I/O error.
pub async fn save_image(upload_dir: &Path, original_name: &str, bytes: &[u8]) -> Result<StoredImage, UploadError> {
    let ext =
        image_extension(original_name).ok_or_else(|| UploadError::UnsupportedType(original_name.to_owned()))?;
    let filename = format!("{}.{ext}", Uuid::new_v4());

    tokio::fs::create_dir_all(upload_dir).await?;
    tokio::fs::write(upload_dir.join(&filename), bytes).await?;

    tracing::info!(%filename, size = bytes.len(), "image stored");
    Ok(StoredImage { url: public_url(&filename), filename })
}

/// Delete a stored image by filename.
///
/// # Errors
///
/// Returns `InvalidFilename` for unsafe names, `NotFound` if the file does
/// not exist, or an I/O error.
pub async fn delete_image(upload_dir: &Path, filename: &str) -> Result<(), UploadError> {
    if !is_safe_filename(filename) {
        return Err(UploadError::InvalidFilename);
    }

    let path = upload_dir.join(filename);
    match tokio::fs::remove_file(&path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(UploadError::NotFound(filename.to_owned())),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
#[path = "upload_test.rs"]
mod tests;
