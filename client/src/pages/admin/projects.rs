//! Admin project management — list, create/edit dialog, image upload.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::toast::{notify_error, notify_success};
use crate::net::types::Project;
use crate::state::auth::AuthSession;
use crate::state::ui::ToastState;
use crate::util::auth::install_admin_guard;

#[component]
pub fn AdminProjectsPage() -> impl IntoView {
    let session = AuthSession::expect();
    install_admin_guard(session, use_navigate());

    let toasts = expect_context::<RwSignal<ToastState>>();
    let page = RwSignal::new(1i64);
    let listing = LocalResource::new(move || {
        let page = page.get();
        async move { crate::net::api::fetch_projects(page, None, None).await.ok() }
    });

    // Dialog state: None = closed, Some(None) = create, Some(project) = edit.
    let editing = RwSignal::new(None::<Option<Project>>);

    let on_delete = move |id: String| {
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_project(&id).await {
                Ok(()) => {
                    notify_success(toasts, "Project deleted.");
                    listing.refetch();
                }
                Err(err) => notify_error(toasts, err.user_message()),
            }
        });
    };

    view! {
        <div class="admin-projects">
            <header class="admin-projects__header">
                <h1>"Projects"</h1>
                <button class="btn btn--primary" on:click=move |_| editing.set(Some(None))>
                    "+ New project"
                </button>
            </header>

            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                {move || {
                    listing
                        .get()
                        .map(|result| match result {
                            Some((projects, _)) => {
                                view! {
                                    <table class="admin-table">
                                        <thead>
                                            <tr>
                                                <th>"Title"</th>
                                                <th>"Category"</th>
                                                <th>"Images"</th>
                                                <th>"Featured"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {projects
                                                .into_iter()
                                                .map(|project| {
                                                    let edit_copy = project.clone();
                                                    let delete_id = project.id.clone();
                                                    view! {
                                                        <tr>
                                                            <td>{project.title.clone()}</td>
                                                            <td>{project.category.clone()}</td>
                                                            <td>{project.images.len()}</td>
                                                            <td>{if project.featured { "yes" } else { "" }}</td>
                                                            <td class="admin-table__actions">
                                                                <button on:click=move |_| editing.set(Some(Some(edit_copy.clone())))>
                                                                    "Edit"
                                                                </button>
                                                                <button
                                                                    class="admin-table__danger"
                                                                    on:click=move |_| on_delete(delete_id.clone())
                                                                >
                                                                    "Delete"
                                                                </button>
                                                            </td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }
                                    .into_any()
                            }
                            None => view! { <p>"Could not load projects."</p> }.into_any(),
                        })
                }}
            </Suspense>

            <Show when=move || editing.get().is_some()>
                <ProjectDialog
                    initial=editing.get().flatten()
                    on_close=Callback::new(move |saved: bool| {
                        editing.set(None);
                        if saved {
                            listing.refetch();
                        }
                    })
                />
            </Show>
        </div>
    }
}

/// Modal dialog for creating or editing a project.
#[component]
fn ProjectDialog(initial: Option<Project>, on_close: Callback<bool>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let editing_id = initial.as_ref().map(|p| p.id.clone());
    let is_edit = editing_id.is_some();
    let title = RwSignal::new(initial.as_ref().map(|p| p.title.clone()).unwrap_or_default());
    let category = RwSignal::new(initial.as_ref().map(|p| p.category.clone()).unwrap_or_default());
    let description = RwSignal::new(initial.as_ref().map(|p| p.description.clone()).unwrap_or_default());
    let location = RwSignal::new(
        initial
            .as_ref()
            .and_then(|p| p.location.clone())
            .unwrap_or_default(),
    );
    let year = RwSignal::new(
        initial
            .as_ref()
            .and_then(|p| p.year)
            .map(|y| y.to_string())
            .unwrap_or_default(),
    );
    let featured = RwSignal::new(initial.as_ref().is_some_and(|p| p.featured));
    let images = RwSignal::new(initial.as_ref().map(|p| p.images.clone()).unwrap_or_default());
    let saving = RwSignal::new(false);

    let on_upload = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(file_list) = input.files() else { return };
            let files: Vec<web_sys::File> = (0..file_list.length()).filter_map(|i| file_list.item(i)).collect();
            if files.is_empty() {
                return;
            }

            leptos::task::spawn_local(async move {
                match crate::net::upload::upload_images(files).await {
                    Ok(stored) => {
                        images.update(|list| {
                            list.extend(stored.into_iter().map(|image| crate::net::types::ProjectImage {
                                url: image.url,
                                caption: None,
                            }));
                        });
                    }
                    Err(err) => notify_error(toasts, err.user_message()),
                }
            });
            input.set_value("");
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &ev;
        }
    };

    let on_remove_image = move |url: String| {
        images.update(|list| list.retain(|image| image.url != url));
    };

    let submit = move |_| {
        if title.get().trim().is_empty() || category.get().trim().is_empty() {
            notify_error(toasts, "Title and category are required.");
            return;
        }
        if saving.get() {
            return;
        }
        saving.set(true);

        let payload = serde_json::json!({
            "title": title.get(),
            "category": category.get(),
            "description": description.get(),
            "location": (!location.get().is_empty()).then(|| location.get()),
            "year": year.get().parse::<i32>().ok(),
            "images": images.get(),
            "featured": featured.get(),
        });
        let editing_id = editing_id.clone();

        leptos::task::spawn_local(async move {
            let result = match editing_id {
                Some(id) => crate::net::api::update_project(&id, &payload).await,
                None => crate::net::api::create_project(&payload).await,
            };
            match result {
                Ok(_) => {
                    notify_success(toasts, "Project saved.");
                    on_close.run(true);
                }
                Err(err) => notify_error(toasts, err.user_message()),
            }
            saving.set(false);
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(false)>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{if is_edit { "Edit project" } else { "New project" }}</h2>

                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Category"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || category.get()
                        on:input=move |ev| category.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="dialog__label">
                    "Location"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || location.get()
                        on:input=move |ev| location.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Year"
                    <input
                        class="dialog__input"
                        type="number"
                        prop:value=move || year.get()
                        on:input=move |ev| year.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label dialog__label--inline">
                    <input
                        type="checkbox"
                        prop:checked=move || featured.get()
                        on:change=move |ev| featured.set(event_target_checked(&ev))
                    />
                    "Featured on the home page"
                </label>

                <div class="dialog__images">
                    <span>"Images"</span>
                    <input type="file" accept="image/*" multiple on:change=on_upload/>
                    <ul>
                        {move || {
                            images
                                .get()
                                .into_iter()
                                .map(|image| {
                                    let url = image.url.clone();
                                    view! {
                                        <li>
                                            <span>{image.url.clone()}</span>
                                            <button on:click=move |_| on_remove_image(url.clone())>"Remove"</button>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </div>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(false)>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" disabled=move || saving.get() on:click=submit>
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
