//! About page backed by the editable content record.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::AboutContent;

#[component]
pub fn AboutPage() -> impl IntoView {
    let content = LocalResource::new(|| async { api::fetch_about().await.unwrap_or_default() });

    view! {
        <div class="about-page">
            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                {move || content.get().map(|about| view! { <AboutBody about=about/> })}
            </Suspense>
        </div>
    }
}

#[component]
fn AboutBody(about: AboutContent) -> impl IntoView {
    view! {
        <article class="about-page__body">
            <h1>{about.title}</h1>
            <p>{about.body}</p>

            <section class="about-page__mission">
                <h2>"Our mission"</h2>
                <p>{about.mission}</p>
            </section>

            <section class="about-page__counters">
                <div class="counter">
                    <span class="counter__value">{about.years_experience}</span>
                    <span class="counter__label">"Years in business"</span>
                </div>
                <div class="counter">
                    <span class="counter__value">{about.projects_completed}</span>
                    <span class="counter__label">"Projects completed"</span>
                </div>
                <div class="counter">
                    <span class="counter__value">{about.team_size}</span>
                    <span class="counter__label">"People on site"</span>
                </div>
            </section>
        </article>
    }
}
