//! Single-project detail page with image gallery.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::api;
use crate::net::types::Project;
use crate::util::images::{backend_origin, normalize_project};

#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let params = use_params_map();
    let project = LocalResource::new(move || {
        let id = params.read().get("id").unwrap_or_default();
        async move {
            api::fetch_project(&id)
                .await
                .ok()
                .map(|p| normalize_project(&p, backend_origin()))
        }
    });

    view! {
        <div class="project-detail">
            <Suspense fallback=move || view! { <p>"Loading project..."</p> }>
                {move || {
                    project
                        .get()
                        .map(|found| match found {
                            Some(project) => view! { <ProjectBody project=project/> }.into_any(),
                            None => {
                                view! {
                                    <div class="project-detail__missing">
                                        <h1>"Project not found"</h1>
                                        <a href="/projects">"Back to all projects"</a>
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn ProjectBody(project: Project) -> impl IntoView {
    let meta = [
        ("Category", Some(project.category.clone())),
        ("Location", project.location.clone()),
        ("Year", project.year.map(|y| y.to_string())),
    ];

    view! {
        <article class="project-detail__body">
            <h1>{project.title.clone()}</h1>

            <dl class="project-detail__meta">
                {meta
                    .into_iter()
                    .filter_map(|(label, value)| {
                        value.map(|value| {
                            view! {
                                <div class="project-detail__meta-row">
                                    <dt>{label}</dt>
                                    <dd>{value}</dd>
                                </div>
                            }
                        })
                    })
                    .collect::<Vec<_>>()}
            </dl>

            <p class="project-detail__description">{project.description.clone()}</p>

            <div class="project-detail__gallery">
                {project
                    .images
                    .iter()
                    .map(|image| {
                        let caption = image.caption.clone().unwrap_or_default();
                        view! {
                            <figure class="project-detail__figure">
                                <img src=image.url.clone() alt=caption.clone()/>
                                <figcaption>{caption}</figcaption>
                            </figure>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </article>
    }
}
