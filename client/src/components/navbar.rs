//! Site-wide navigation bar.

use leptos::prelude::*;

use crate::state::auth::AuthSession;

/// Top navigation. Public links always show; the admin link and sign-out
/// button appear only for an authenticated session.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = AuthSession::expect();

    let on_logout = move |_| {
        leptos::task::spawn_local(async move {
            session.logout().await;
        });
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">
                "Granite Peak Construction"
            </a>
            <div class="navbar__links">
                <a href="/">"Home"</a>
                <a href="/about">"About"</a>
                <a href="/services">"Services"</a>
                <a href="/projects">"Projects"</a>
                <a href="/stories">"Success Stories"</a>
                <a href="/contact">"Contact"</a>
                <Show when=move || session.get().is_authenticated()>
                    <a class="navbar__admin" href="/admin/dashboard">"Admin"</a>
                    <button class="navbar__logout" on:click=on_logout>
                        "Sign out"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
