use super::*;

#[test]
fn image_extension_accepts_allowed_types() {
    assert_eq!(image_extension("site.JPG"), Some("jpg".to_owned()));
    assert_eq!(image_extension("a.b.png"), Some("png".to_owned()));
    assert_eq!(image_extension("photo.webp"), Some("webp".to_owned()));
}

#[test]
fn image_extension_rejects_disallowed_and_missing() {
    assert_eq!(image_extension("payload.exe"), None);
    assert_eq!(image_extension("noext"), None);
    assert_eq!(image_extension("archive.svg"), None);
}

#[test]
fn safe_filename_rejects_traversal() {
    assert!(is_safe_filename("abc.jpg"));
    assert!(!is_safe_filename("../etc/passwd"));
    assert!(!is_safe_filename("a/b.jpg"));
    assert!(!is_safe_filename("a\\b.jpg"));
    assert!(!is_safe_filename(""));
}

#[test]
fn public_url_prefixes_uploads() {
    assert_eq!(public_url("x.png"), "/uploads/x.png");
}

#[tokio::test]
async fn save_and_delete_round_trip() {
    let dir = std::env::temp_dir().join(format!("upload-test-{}", Uuid::new_v4()));

    let stored = save_image(&dir, "photo.png", b"fake-png").await.expect("save");
    assert!(stored.url.starts_with("/uploads/"));
    assert!(stored.filename.ends_with(".png"));
    assert!(dir.join(&stored.filename).exists());

    delete_image(&dir, &stored.filename).await.expect("delete");
    assert!(matches!(
        delete_image(&dir, &stored.filename).await,
        Err(UploadError::NotFound(_))
    ));

    tokio::fs::remove_dir_all(&dir).await.ok();
}

#[tokio::test]
async fn delete_rejects_unsafe_names_without_touching_disk() {
    let dir = std::env::temp_dir().join("upload-test-never-created");
    assert!(matches!(
        delete_image(&dir, "../outside.png").await,
        Err(UploadError::InvalidFilename)
    ));
}

#[tokio::test]
async fn save_rejects_unsupported_type() {
    let dir = std::env::temp_dir().join("upload-test-never-created");
    assert!(matches!(
        save_image(&dir, "script.sh", b"#!").await,
        Err(UploadError::UnsupportedType(_))
    ));
}
