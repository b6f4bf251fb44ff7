//! Services page. Static copy; the offering changes rarely enough that it
//! ships with the build.

use leptos::prelude::*;

struct Service {
    title: &'static str,
    blurb: &'static str,
}

const SERVICES: [Service; 6] = [
    Service {
        title: "Commercial construction",
        blurb: "Offices, retail and light-industrial units delivered design-and-build or to your architect's drawings.",
    },
    Service {
        title: "Residential development",
        blurb: "New-build housing from single plots to 40-unit sites, including groundworks and services.",
    },
    Service {
        title: "Civil engineering",
        blurb: "Bridges, culverts, retaining structures and highway works for local authorities.",
    },
    Service {
        title: "Refurbishment",
        blurb: "Structural alterations, re-roofing and full internal strip-out and fit-out.",
    },
    Service {
        title: "Groundworks",
        blurb: "Bulk excavation, foundations, drainage and external works packages.",
    },
    Service {
        title: "Project management",
        blurb: "Programme, cost and quality control across the full build lifecycle.",
    },
];

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <div class="services-page">
            <h1>"Services"</h1>
            <div class="services-page__grid">
                {SERVICES
                    .iter()
                    .map(|service| {
                        view! {
                            <div class="service-tile">
                                <h3>{service.title}</h3>
                                <p>{service.blurb}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
