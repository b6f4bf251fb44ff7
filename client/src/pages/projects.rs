//! Public project portfolio with category filter and pagination.

use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::net::api;
use crate::net::types::{Pagination, Project};
use crate::util::images::{backend_origin, normalize_projects};

const CATEGORIES: [&str; 4] = ["commercial", "residential", "infrastructure", "refurbishment"];

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let page = RwSignal::new(1i64);
    let category = RwSignal::new(String::new());

    let listing = LocalResource::new(move || {
        let page = page.get();
        let category = category.get();
        async move {
            let filter = (!category.is_empty()).then_some(category.as_str());
            match api::fetch_projects(page, filter, None).await {
                Ok((projects, pagination)) => (normalize_projects(&projects, backend_origin()), pagination),
                Err(_) => (Vec::new(), None),
            }
        }
    });

    let on_filter = move |value: String| {
        category.set(value);
        page.set(1);
    };

    view! {
        <div class="projects-page">
            <h1>"Our work"</h1>

            <div class="projects-page__filters">
                <button
                    class=move || filter_class(category.get().is_empty())
                    on:click=move |_| on_filter(String::new())
                >
                    "All"
                </button>
                {CATEGORIES
                    .iter()
                    .map(|&name| {
                        view! {
                            <button
                                class=move || filter_class(category.get() == name)
                                on:click=move |_| on_filter(name.to_owned())
                            >
                                {name}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <Suspense fallback=move || view! { <p>"Loading projects..."</p> }>
                {move || {
                    listing
                        .get()
                        .map(|(projects, pagination): (Vec<Project>, Option<Pagination>)| {
                            view! {
                                <div class="projects-page__grid">
                                    {projects
                                        .into_iter()
                                        .map(|project| view! { <ProjectCard project=project/> })
                                        .collect::<Vec<_>>()}
                                </div>
                                <Pager page=page pagination=pagination/>
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

fn filter_class(active: bool) -> &'static str {
    if active { "filter filter--active" } else { "filter" }
}

#[component]
fn Pager(page: RwSignal<i64>, pagination: Option<Pagination>) -> impl IntoView {
    pagination.filter(|p| p.total_pages > 1).map(|p| {
        view! {
            <div class="pager">
                <button
                    class="pager__btn"
                    disabled=move || page.get() <= 1
                    on:click=move |_| page.update(|v| *v -= 1)
                >
                    "Previous"
                </button>
                <span class="pager__label">{format!("Page {} of {}", p.page, p.total_pages)}</span>
                <button
                    class="pager__btn"
                    disabled=move || page.get() >= p.total_pages
                    on:click=move |_| page.update(|v| *v += 1)
                >
                    "Next"
                </button>
            </div>
        }
    })
}
