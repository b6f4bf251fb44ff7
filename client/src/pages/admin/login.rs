//! Admin login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toast::notify_error;
use crate::state::auth::AuthSession;
use crate::state::ui::ToastState;
use crate::util::auth::{DASHBOARD_PATH, install_login_redirect};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = AuthSession::expect();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    // Already-authenticated visitors are bounced straight to the dashboard.
    install_login_redirect(session, navigate.clone());

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        submitting.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let ok = session.login(&username.get_untracked(), &password.get_untracked()).await;
            if ok {
                navigate(DASHBOARD_PATH, NavigateOptions::default());
            } else {
                notify_error(toasts, "Invalid username or password.");
                password.set(String::new());
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="login-page">
            <h1>"Granite Peak Admin"</h1>
            <form class="login-page__form" on:submit=on_submit>
                <label>
                    "Username"
                    <input
                        type="text"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
