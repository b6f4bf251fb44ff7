//! Public contact form.

use leptos::prelude::*;

use crate::components::toast::{notify_error, notify_success};
use crate::state::ui::ToastState;

#[component]
pub fn ContactPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let sending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get() {
            return;
        }
        sending.set(true);

        let payload = serde_json::json!({
            "name": name.get(),
            "email": email.get(),
            "phone": (!phone.get().is_empty()).then(|| phone.get()),
            "subject": (!subject.get().is_empty()).then(|| subject.get()),
            "message": message.get(),
        });

        leptos::task::spawn_local(async move {
            match crate::net::api::submit_contact(&payload).await {
                Ok(()) => {
                    notify_success(toasts, "Thanks — we'll be in touch shortly.");
                    name.set(String::new());
                    email.set(String::new());
                    phone.set(String::new());
                    subject.set(String::new());
                    message.set(String::new());
                }
                Err(err) => notify_error(toasts, err.user_message()),
            }
            sending.set(false);
        });
    };

    view! {
        <div class="contact-page">
            <h1>"Get in touch"</h1>
            <p>"Tell us about your project and we'll come back within one working day."</p>

            <form class="contact-form" on:submit=on_submit>
                <label class="contact-form__label">
                    "Name"
                    <input
                        type="text"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="contact-form__label">
                    "Email"
                    <input
                        type="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="contact-form__label">
                    "Phone (optional)"
                    <input
                        type="tel"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                </label>
                <label class="contact-form__label">
                    "Subject (optional)"
                    <input
                        type="text"
                        prop:value=move || subject.get()
                        on:input=move |ev| subject.set(event_target_value(&ev))
                    />
                </label>
                <label class="contact-form__label">
                    "Message"
                    <textarea
                        required
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || sending.get()>
                    {move || if sending.get() { "Sending..." } else { "Send message" }}
                </button>
            </form>
        </div>
    }
}
