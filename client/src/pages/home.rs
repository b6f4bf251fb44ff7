//! Landing page — hero, service teaser, featured projects.

use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::net::api;
use crate::util::images::{backend_origin, normalize_projects};

#[component]
pub fn HomePage() -> impl IntoView {
    let featured = LocalResource::new(|| async {
        match api::fetch_projects(1, None, Some(true)).await {
            Ok((projects, _)) => normalize_projects(&projects, backend_origin()),
            Err(_) => Vec::new(),
        }
    });

    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Built to last. Delivered on time."</h1>
                <p>
                    "Granite Peak Construction delivers commercial, residential and "
                    "infrastructure projects across the north of England."
                </p>
                <a class="btn btn--primary" href="/contact">
                    "Request a quote"
                </a>
            </section>

            <section class="home-page__services">
                <h2>"What we do"</h2>
                <div class="home-page__services-grid">
                    <div class="service-tile">
                        <h3>"Commercial"</h3>
                        <p>"Offices, retail and industrial units from groundwork to handover."</p>
                    </div>
                    <div class="service-tile">
                        <h3>"Residential"</h3>
                        <p>"New-build housing and large-scale refurbishment."</p>
                    </div>
                    <div class="service-tile">
                        <h3>"Infrastructure"</h3>
                        <p>"Bridges, drainage and highways for public-sector clients."</p>
                    </div>
                </div>
                <a class="home-page__services-link" href="/services">
                    "All services"
                </a>
            </section>

            <section class="home-page__featured">
                <h2>"Featured projects"</h2>
                <Suspense fallback=move || view! { <p>"Loading projects..."</p> }>
                    {move || {
                        featured
                            .get()
                            .map(|projects| {
                                view! {
                                    <div class="home-page__featured-grid">
                                        {projects
                                            .into_iter()
                                            .map(|project| view! { <ProjectCard project=project/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
