//! Image URL normalization.
//!
//! DESIGN
//! ======
//! Stored project records still carry image URLs written against the
//! legacy development origin (`localhost:5000`) or as bare upload paths.
//! Rather than re-authoring the data on every deployment move, every
//! consumer rewrites URLs through this pure layer against the currently
//! configured backend origin. The rewrite is idempotent: a URL already
//! pointing at the configured origin matches none of the rules on a
//! second pass.

#[cfg(test)]
#[path = "images_test.rs"]
mod images_test;

use crate::net::types::{Project, ProjectImage};

/// Legacy development origin fragments, most specific first.
const LEGACY_ORIGINS: [&str; 3] = ["http://localhost:5000", "https://localhost:5000", "localhost:5000"];

const UPLOADS_SEGMENT: &str = "uploads";

/// Backend origin baked in at build time, defaulting to the local dev
/// server.
#[must_use]
pub fn backend_origin() -> &'static str {
    option_env!("PUBLIC_API_URL").unwrap_or("http://localhost:5000")
}

fn is_uploads_relative(url: &str) -> bool {
    let path = url.strip_prefix('/').unwrap_or(url);
    path == UPLOADS_SEGMENT || path.starts_with("uploads/")
}

/// Rewrite a stored image URL against the given backend origin.
///
/// Rules, first match wins: empty URLs pass through; a legacy-origin
/// fragment is replaced with `origin`; an uploads-relative path is
/// prefixed with `origin`; anything else (third-party hosts, already
/// rewritten URLs) passes through unchanged. Never fails.
#[must_use]
pub fn normalize_image_url(url: &str, origin: &str) -> String {
    if url.is_empty() {
        return url.to_owned();
    }

    let origin = origin.trim_end_matches('/');

    for legacy in LEGACY_ORIGINS {
        if let Some(idx) = url.find(legacy) {
            let mut rewritten = String::with_capacity(url.len() + origin.len());
            rewritten.push_str(&url[..idx]);
            rewritten.push_str(origin);
            rewritten.push_str(&url[idx + legacy.len()..]);
            return rewritten;
        }
    }

    if is_uploads_relative(url) {
        if url.starts_with('/') {
            return format!("{origin}{url}");
        }
        return format!("{origin}/{url}");
    }

    url.to_owned()
}

/// Rewrite every image URL of one project, producing a new record. No
/// other field changes.
#[must_use]
pub fn normalize_project(project: &Project, origin: &str) -> Project {
    Project {
        images: project
            .images
            .iter()
            .map(|image| ProjectImage {
                url: normalize_image_url(&image.url, origin),
                caption: image.caption.clone(),
            })
            .collect(),
        ..project.clone()
    }
}

/// Rewrite a whole collection of projects.
#[must_use]
pub fn normalize_projects(projects: &[Project], origin: &str) -> Vec<Project> {
    projects.iter().map(|p| normalize_project(p, origin)).collect()
}
