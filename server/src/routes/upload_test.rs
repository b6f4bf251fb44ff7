use super::*;

#[test]
fn unsupported_type_maps_to_bad_request_with_name() {
    let err = upload_error_to_api(UploadError::UnsupportedType("cv.pdf".to_owned()));
    match err {
        ApiError::BadRequest(msg) => assert!(msg.contains("cv.pdf")),
        other => panic!("expected BadRequest, got {other:?}"),
    }
}

#[test]
fn invalid_filename_maps_to_bad_request() {
    assert!(matches!(
        upload_error_to_api(UploadError::InvalidFilename),
        ApiError::BadRequest(_)
    ));
}

#[test]
fn missing_file_maps_to_not_found() {
    assert!(matches!(
        upload_error_to_api(UploadError::NotFound("x.png".to_owned())),
        ApiError::NotFound
    ));
}
