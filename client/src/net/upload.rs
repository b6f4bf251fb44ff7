//! Image upload client.
//!
//! Uploads ride a separately configured request path: same bearer-token
//! attachment as the main API client, but a multipart body and a fixed
//! 30-second deadline so large photo batches fail loudly instead of
//! hanging the admin UI. A 401 here still purges the token store but does
//! not force a navigation; the surrounding page handles the error.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

#[cfg(any(test, feature = "hydrate"))]
use super::api;
#[cfg(feature = "hydrate")]
use super::error::ApiError;

/// Deadline for a whole upload request.
pub const UPLOAD_TIMEOUT_MS: u32 = 30_000;

/// Multipart field name the server reads image files from.
pub const UPLOAD_FIELD: &str = "images";

#[cfg(any(test, feature = "hydrate"))]
#[must_use]
pub(crate) fn upload_endpoint() -> String {
    api::api_url("/upload/images")
}

#[cfg(any(test, feature = "hydrate"))]
#[must_use]
pub(crate) fn timeout_message() -> String {
    format!("upload timed out after {}s", UPLOAD_TIMEOUT_MS / 1000)
}

/// `POST /api/upload/images` — store the given files, returning their
/// public URLs.
///
/// # Errors
///
/// Returns a transport error on network failure or timeout, `Unauthorized`
/// on a rejected session, or a server error with the envelope message.
#[cfg(feature = "hydrate")]
pub async fn upload_images(files: Vec<web_sys::File>) -> Result<Vec<super::types::StoredImage>, ApiError> {
    use futures::FutureExt;

    let form = web_sys::FormData::new().map_err(|_| ApiError::Transport("form construction failed".to_owned()))?;
    for file in &files {
        form.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
            .map_err(|_| ApiError::Transport("form construction failed".to_owned()))?;
    }

    let mut builder =
        gloo_net::http::RequestBuilder::new(&upload_endpoint()).method(gloo_net::http::Method::POST);
    if let Some(token) = super::token::get() {
        builder = builder.header("Authorization", &api::bearer_value(&token));
    }
    let request = builder.body(form).map_err(|e| ApiError::Transport(e.to_string()))?;

    let send = request.send().fuse();
    let deadline = gloo_timers::future::TimeoutFuture::new(UPLOAD_TIMEOUT_MS).fuse();
    futures::pin_mut!(send, deadline);

    let response = futures::select! {
        result = send => result.map_err(|e| ApiError::Transport(e.to_string()))?,
        () = deadline => return Err(ApiError::Transport(timeout_message())),
    };

    let envelope = api::handle_response(response, false).await?;
    api::expect_data(envelope)
}
