//! Reusable card component for project list items.

use leptos::prelude::*;

use crate::net::types::Project;
use crate::util::images::{backend_origin, normalize_image_url};

/// A clickable card representing a project in a listing grid. The cover
/// image URL is normalized against the configured backend origin.
#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let href = format!("/projects/{}", project.id);
    let cover = project
        .images
        .first()
        .map(|image| normalize_image_url(&image.url, backend_origin()));
    let location = project.location.clone().unwrap_or_default();

    view! {
        <a class="project-card" href=href>
            {cover.map(|src| view! { <img class="project-card__cover" src=src alt=project.title.clone()/> })}
            <div class="project-card__body">
                <span class="project-card__category">{project.category}</span>
                <h3 class="project-card__title">{project.title}</h3>
                <span class="project-card__location">{location}</span>
            </div>
        </a>
    }
}
