//! Admin contact inbox — status workflow and replies.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::toast::{notify_error, notify_success};
use crate::net::types::ContactMessage;
use crate::state::auth::AuthSession;
use crate::state::ui::ToastState;
use crate::util::auth::install_admin_guard;

const STATUS_FILTERS: [&str; 5] = ["", "new", "read", "replied", "archived"];

#[component]
pub fn AdminContactsPage() -> impl IntoView {
    let session = AuthSession::expect();
    install_admin_guard(session, use_navigate());

    let toasts = expect_context::<RwSignal<ToastState>>();
    let page = RwSignal::new(1i64);
    let status = RwSignal::new(String::new());

    let inbox = LocalResource::new(move || {
        let page = page.get();
        let status = status.get();
        async move {
            let filter = (!status.is_empty()).then_some(status.as_str());
            crate::net::api::fetch_contacts(page, filter).await.ok()
        }
    });

    let selected = RwSignal::new(None::<ContactMessage>);

    let on_open = move |message: ContactMessage| {
        // Opening an unread message marks it read.
        if message.status == "new" {
            let id = message.id.clone();
            leptos::task::spawn_local(async move {
                if crate::net::api::set_contact_status(&id, "read").await.is_ok() {
                    inbox.refetch();
                }
            });
        }
        selected.set(Some(message));
    };

    let on_delete = move |id: String| {
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_contact(&id).await {
                Ok(()) => {
                    notify_success(toasts, "Message deleted.");
                    selected.set(None);
                    inbox.refetch();
                }
                Err(err) => notify_error(toasts, err.user_message()),
            }
        });
    };

    view! {
        <div class="admin-contacts">
            <header class="admin-contacts__header">
                <h1>"Contact inbox"</h1>
                <div class="admin-contacts__filters">
                    {STATUS_FILTERS
                        .iter()
                        .map(|&name| {
                            let label = if name.is_empty() { "all" } else { name };
                            view! {
                                <button
                                    class=move || {
                                        if status.get() == name { "filter filter--active" } else { "filter" }
                                    }
                                    on:click=move |_| {
                                        status.set(name.to_owned());
                                        page.set(1);
                                    }
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </header>

            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                {move || {
                    inbox
                        .get()
                        .map(|result| match result {
                            Some((messages, _)) => {
                                view! {
                                    <table class="admin-table">
                                        <thead>
                                            <tr>
                                                <th>"From"</th>
                                                <th>"Subject"</th>
                                                <th>"Status"</th>
                                                <th>"Received"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {messages
                                                .into_iter()
                                                .map(|message| {
                                                    let open_copy = message.clone();
                                                    view! {
                                                        <tr
                                                            class="admin-table__row"
                                                            on:click=move |_| on_open(open_copy.clone())
                                                        >
                                                            <td>{format!("{} <{}>", message.name, message.email)}</td>
                                                            <td>{message.subject.clone().unwrap_or_default()}</td>
                                                            <td>{message.status.clone()}</td>
                                                            <td>{message.created_at.clone().unwrap_or_default()}</td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }
                                    .into_any()
                            }
                            None => view! { <p>"Could not load messages."</p> }.into_any(),
                        })
                }}
            </Suspense>

            <Show when=move || selected.get().is_some()>
                {move || {
                    selected
                        .get()
                        .map(|message| {
                            view! {
                                <ContactDialog
                                    message=message
                                    on_close=Callback::new(move |changed: bool| {
                                        selected.set(None);
                                        if changed {
                                            inbox.refetch();
                                        }
                                    })
                                    on_delete=Callback::new(on_delete)
                                />
                            }
                        })
                }}
            </Show>
        </div>
    }
}

/// Detail dialog with reply and archive actions.
#[component]
fn ContactDialog(message: ContactMessage, on_close: Callback<bool>, on_delete: Callback<String>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let reply = RwSignal::new(message.reply.clone().unwrap_or_default());
    let sending = RwSignal::new(false);

    let reply_id = message.id.clone();
    let on_reply = move |_| {
        if reply.get().trim().is_empty() || sending.get() {
            return;
        }
        sending.set(true);

        let id = reply_id.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::reply_contact(&id, reply.get_untracked().trim()).await {
                Ok(outcome) => {
                    notify_success(toasts, outcome);
                    on_close.run(true);
                }
                Err(err) => notify_error(toasts, err.user_message()),
            }
            sending.set(false);
        });
    };

    let archive_id = message.id.clone();
    let on_archive = move |_| {
        let id = archive_id.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::set_contact_status(&id, "archived").await {
                Ok(()) => {
                    notify_success(toasts, "Message archived.");
                    on_close.run(true);
                }
                Err(err) => notify_error(toasts, err.user_message()),
            }
        });
    };

    let delete_id = message.id.clone();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(false)>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{format!("{} <{}>", message.name, message.email)}</h2>
                {message
                    .phone
                    .clone()
                    .map(|phone| view! { <p class="dialog__meta">{format!("Phone: {phone}")}</p> })}
                {message
                    .subject
                    .clone()
                    .map(|subject| view! { <p class="dialog__meta">{format!("Subject: {subject}")}</p> })}

                <p class="dialog__message">{message.message.clone()}</p>

                <label class="dialog__label">
                    "Reply"
                    <textarea
                        class="dialog__input"
                        prop:value=move || reply.get()
                        on:input=move |ev| reply.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(false)>
                        "Close"
                    </button>
                    <button class="btn" on:click=on_archive>
                        "Archive"
                    </button>
                    <button class="btn admin-table__danger" on:click=move |_| on_delete.run(delete_id.clone())>
                        "Delete"
                    </button>
                    <button class="btn btn--primary" disabled=move || sending.get() on:click=on_reply>
                        {move || if sending.get() { "Sending..." } else { "Send reply" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
