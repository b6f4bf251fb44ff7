//! Image upload routes (admin).

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::Json;

use super::auth::AuthUser;
use crate::envelope::Envelope;
use crate::errors::ApiError;
use crate::services::upload::{self, StoredImage, UploadError};
use crate::state::AppState;

pub(crate) fn upload_error_to_api(err: UploadError) -> ApiError {
    match err {
        UploadError::UnsupportedType(name) => ApiError::BadRequest(format!("unsupported image type: {name}")),
        UploadError::InvalidFilename => ApiError::BadRequest("invalid filename".to_owned()),
        UploadError::NotFound(_) => ApiError::NotFound,
        UploadError::Io(_) => ApiError::Internal,
    }
}

/// `POST /api/upload/images` — store one or more multipart image fields.
pub async fn upload_images(
    State(state): State<AppState>,
    _auth: AuthUser,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Envelope<Vec<StoredImage>>>), ApiError> {
    let mut stored = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("malformed multipart body: {e}")))?
    {
        let Some(original_name) = field.file_name().map(ToOwned::to_owned) else {
            continue;
        };
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("failed to read upload: {e}")))?;

        let image = upload::save_image(&state.upload_dir, &original_name, &bytes)
            .await
            .map_err(upload_error_to_api)?;
        stored.push(image);
    }

    if stored.is_empty() {
        return Err(ApiError::BadRequest("no image files in request".to_owned()));
    }

    Ok((StatusCode::CREATED, Json(Envelope::ok(stored))))
}

/// `DELETE /api/upload/:filename` — remove a stored image.
pub async fn delete_image(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(filename): Path<String>,
) -> Result<Json<Envelope<serde_json::Value>>, ApiError> {
    upload::delete_image(&state.upload_dir, &filename)
        .await
        .map_err(upload_error_to_api)?;

    Ok(Json(Envelope::message_only("image deleted")))
}

#[cfg(test)]
#[path = "upload_test.rs"]
mod tests;
