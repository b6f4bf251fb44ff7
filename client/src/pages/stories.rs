//! Success stories / testimonials page.

use leptos::prelude::*;

struct Story {
    client: &'static str,
    project: &'static str,
    quote: &'static str,
}

const STORIES: [Story; 3] = [
    Story {
        client: "Derwent Housing Association",
        project: "38-unit Millbrook development",
        quote: "Handed over two weeks early with a snag list we could count on one hand. \
                The site team treated our residents' neighbours like their own.",
    },
    Story {
        client: "Peak District National Park Authority",
        project: "Quarry Road bridge replacement",
        quote: "A sensitive site, a hard winter and a fixed grant deadline — Granite Peak \
                managed all three without a single variation claim.",
    },
    Story {
        client: "Hargreaves & Sons Ltd",
        project: "Distribution warehouse fit-out",
        quote: "They kept our existing operation running throughout. The phasing plan \
                alone was worth the contract.",
    },
];

#[component]
pub fn SuccessStoriesPage() -> impl IntoView {
    view! {
        <div class="stories-page">
            <h1>"Success stories"</h1>
            <div class="stories-page__list">
                {STORIES
                    .iter()
                    .map(|story| {
                        view! {
                            <blockquote class="story">
                                <p class="story__quote">{story.quote}</p>
                                <footer>
                                    <span class="story__client">{story.client}</span>
                                    <span class="story__project">{story.project}</span>
                                </footer>
                            </blockquote>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
