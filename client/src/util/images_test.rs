use super::*;

const ORIGIN: &str = "https://api.granitepeak.example";

#[test]
fn empty_url_passes_through() {
    assert_eq!(normalize_image_url("", ORIGIN), "");
}

#[test]
fn legacy_origin_with_http_scheme_is_replaced() {
    assert_eq!(
        normalize_image_url("http://localhost:5000/uploads/a.jpg", ORIGIN),
        "https://api.granitepeak.example/uploads/a.jpg"
    );
}

#[test]
fn legacy_origin_with_https_scheme_is_replaced() {
    assert_eq!(
        normalize_image_url("https://localhost:5000/uploads/a.jpg", ORIGIN),
        "https://api.granitepeak.example/uploads/a.jpg"
    );
}

#[test]
fn bare_legacy_origin_is_replaced() {
    assert_eq!(
        normalize_image_url("localhost:5000/uploads/a.jpg", ORIGIN),
        "https://api.granitepeak.example/uploads/a.jpg"
    );
}

#[test]
fn uploads_relative_path_is_prefixed() {
    assert_eq!(
        normalize_image_url("/uploads/a.jpg", ORIGIN),
        "https://api.granitepeak.example/uploads/a.jpg"
    );
}

#[test]
fn uploads_path_without_leading_slash_gains_one() {
    assert_eq!(
        normalize_image_url("uploads/a.jpg", ORIGIN),
        "https://api.granitepeak.example/uploads/a.jpg"
    );
}

#[test]
fn trailing_slash_on_origin_does_not_double_up() {
    assert_eq!(
        normalize_image_url("/uploads/a.jpg", "https://api.granitepeak.example/"),
        "https://api.granitepeak.example/uploads/a.jpg"
    );
}

#[test]
fn third_party_urls_pass_through() {
    let url = "https://res.cloudinary.com/demo/image/upload/site.jpg";
    assert_eq!(normalize_image_url(url, ORIGIN), url);
}

#[test]
fn non_uploads_relative_paths_pass_through() {
    assert_eq!(normalize_image_url("/static/logo.svg", ORIGIN), "/static/logo.svg");
    assert_eq!(normalize_image_url("uploadsy/a.jpg", ORIGIN), "uploadsy/a.jpg");
}

#[test]
fn normalization_is_idempotent() {
    let samples = [
        "",
        "http://localhost:5000/uploads/a.jpg",
        "https://localhost:5000/uploads/a.jpg",
        "localhost:5000/uploads/a.jpg",
        "/uploads/a.jpg",
        "uploads/a.jpg",
        "https://res.cloudinary.com/demo/image/upload/site.jpg",
        "/static/logo.svg",
    ];
    for sample in samples {
        let once = normalize_image_url(sample, ORIGIN);
        let twice = normalize_image_url(&once, ORIGIN);
        assert_eq!(once, twice, "not idempotent for {sample:?}");
    }
}

#[test]
fn idempotent_when_origin_is_the_legacy_origin() {
    let once = normalize_image_url("http://localhost:5000/uploads/a.jpg", "http://localhost:5000");
    assert_eq!(once, "http://localhost:5000/uploads/a.jpg");
    assert_eq!(normalize_image_url(&once, "http://localhost:5000"), once);
}

fn sample_project() -> Project {
    Project {
        id: "p1".to_owned(),
        title: "Quarry Road Bridge".to_owned(),
        category: "infrastructure".to_owned(),
        description: "Replacement span".to_owned(),
        location: Some("Derbyshire".to_owned()),
        year: Some(2022),
        images: vec![
            ProjectImage { url: "/uploads/span.jpg".to_owned(), caption: Some("Deck".to_owned()) },
            ProjectImage { url: "http://localhost:5000/uploads/pier.jpg".to_owned(), caption: None },
            ProjectImage { url: "https://res.cloudinary.com/x/y.jpg".to_owned(), caption: None },
        ],
        featured: true,
        created_at: Some("2022-09-01".to_owned()),
    }
}

#[test]
fn normalize_project_rewrites_each_image_url() {
    let project = sample_project();
    let normalized = normalize_project(&project, ORIGIN);
    for (before, after) in project.images.iter().zip(&normalized.images) {
        assert_eq!(after.url, normalize_image_url(&before.url, ORIGIN));
        assert_eq!(after.caption, before.caption);
    }
}

#[test]
fn normalize_project_leaves_other_fields_unchanged() {
    let project = sample_project();
    let normalized = normalize_project(&project, ORIGIN);
    assert_eq!(normalized.id, project.id);
    assert_eq!(normalized.title, project.title);
    assert_eq!(normalized.category, project.category);
    assert_eq!(normalized.description, project.description);
    assert_eq!(normalized.location, project.location);
    assert_eq!(normalized.year, project.year);
    assert_eq!(normalized.featured, project.featured);
    assert_eq!(normalized.created_at, project.created_at);
}

#[test]
fn normalize_project_does_not_mutate_the_input() {
    let project = sample_project();
    let _ = normalize_project(&project, ORIGIN);
    assert_eq!(project.images[0].url, "/uploads/span.jpg");
}

#[test]
fn normalize_projects_maps_the_collection() {
    let projects = vec![sample_project(), sample_project()];
    let normalized = normalize_projects(&projects, ORIGIN);
    assert_eq!(normalized.len(), 2);
    assert!(normalized.iter().all(|p| p.images[0].url.starts_with(ORIGIN)));
}
