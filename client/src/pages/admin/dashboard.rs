//! Admin dashboard — entry point after login.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::state::auth::AuthSession;
use crate::util::auth::install_admin_guard;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = AuthSession::expect();
    install_admin_guard(session, use_navigate());

    let project_total = LocalResource::new(|| async {
        api::fetch_projects(1, None, None)
            .await
            .ok()
            .and_then(|(_, pagination)| pagination.map(|p| p.total))
    });
    let new_messages = LocalResource::new(|| async {
        api::fetch_contacts(1, Some("new"))
            .await
            .ok()
            .and_then(|(_, pagination)| pagination.map(|p| p.total))
    });

    let greeting = move || {
        session
            .get()
            .user()
            .map(|user| format!("Signed in as {}", user.username))
            .unwrap_or_default()
    };

    view! {
        <div class="admin-dashboard">
            <header class="admin-dashboard__header">
                <h1>"Dashboard"</h1>
                <span class="admin-dashboard__user">{greeting}</span>
            </header>

            <div class="admin-dashboard__cards">
                <a class="admin-card" href="/admin/projects">
                    <h2>"Projects"</h2>
                    <Suspense fallback=move || view! { <span>"…"</span> }>
                        {move || {
                            project_total
                                .get()
                                .map(|total| view! { <span class="admin-card__stat">{stat_label(total, "published")}</span> })
                        }}
                    </Suspense>
                </a>
                <a class="admin-card" href="/admin/contacts">
                    <h2>"Contact inbox"</h2>
                    <Suspense fallback=move || view! { <span>"…"</span> }>
                        {move || {
                            new_messages
                                .get()
                                .map(|total| view! { <span class="admin-card__stat">{stat_label(total, "unread")}</span> })
                        }}
                    </Suspense>
                </a>
            </div>
        </div>
    }
}

fn stat_label(total: Option<i64>, noun: &str) -> String {
    match total {
        Some(n) => format!("{n} {noun}"),
        None => "unavailable".to_owned(),
    }
}
