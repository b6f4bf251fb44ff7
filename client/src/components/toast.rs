//! Toast notification host.

use leptos::prelude::*;

use crate::state::ui::{ToastKind, ToastState};

#[cfg(feature = "hydrate")]
const TOAST_LIFETIME_MS: u32 = 4_000;

/// Renders the toast stack from context and expires entries after a fixed
/// lifetime.
#[component]
pub fn Toasts() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toasts">
            <For
                each=move || toasts.get().toasts().to_vec()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    };
                    let id = toast.id;

                    #[cfg(feature = "hydrate")]
                    leptos::task::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(TOAST_LIFETIME_MS).await;
                        toasts.update(|t| t.dismiss(id));
                    });

                    view! {
                        <div class=class on:click=move |_| toasts.update(|t| t.dismiss(id))>
                            {toast.text.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}

/// Push a success toast onto the stack from any component.
pub fn notify_success(toasts: RwSignal<ToastState>, text: impl Into<String>) {
    let text = text.into();
    toasts.update(|t| {
        t.success(text);
    });
}

/// Push an error toast onto the stack from any component.
pub fn notify_error(toasts: RwSignal<ToastState>, text: impl Into<String>) {
    let text = text.into();
    toasts.update(|t| {
        t.error(text);
    });
}
