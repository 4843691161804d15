//! Feedback form posting to `/api/feedback`.

use leptos::prelude::*;

use crate::components::page_header::PageHeader;
use crate::net::types::FeedbackRequest;
use crate::site_config::SITE;

#[derive(Clone, Debug, PartialEq, Eq)]
enum SubmitState {
    Idle,
    Submitting,
    Sent,
    Failed(String),
}

#[component]
pub fn FeedbackPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let state = RwSignal::new(SubmitState::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.get_untracked() == SubmitState::Submitting {
            return;
        }
        let request = FeedbackRequest { name: name.get(), email: email.get(), message: message.get() };
        let request = match request.validate() {
            Ok(request) => request,
            Err(reason) => {
                state.set(SubmitState::Failed(reason.to_owned()));
                return;
            }
        };
        state.set(SubmitState::Submitting);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::submit_feedback(&request).await {
                Ok(_) => {
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                    state.set(SubmitState::Sent);
                }
                Err(e) => {
                    log::error!("feedback submit failed: {e}");
                    state.set(SubmitState::Failed(e));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    view! {
        <div class="feedback">
            <PageHeader
                title="Share Your Feedback"
                description="Tell us what you think, what is missing, or what broke. Your feedback shapes Okami UI."
            />
            <Show
                when=move || state.get() != SubmitState::Sent
                fallback=move || {
                    view! {
                        <div class="card feedback__thanks">
                            <h3>"Thank you!"</h3>
                            <p>"Your feedback has been received."</p>
                            <button class="button button--outline" on:click=move |_| state.set(SubmitState::Idle)>
                                "Send more feedback"
                            </button>
                        </div>
                    }
                }
            >
                <form class="card feedback__form" on:submit=on_submit>
                    <label for="feedback-name">"Name"</label>
                    <input
                        id="feedback-name"
                        class="input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <label for="feedback-email">"Email"</label>
                    <input
                        id="feedback-email"
                        class="input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label for="feedback-message">"Message"</label>
                    <textarea
                        id="feedback-message"
                        class="input"
                        rows="6"
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                    {move || match state.get() {
                        SubmitState::Failed(reason) => Some(view! { <p class="form-error">{reason}</p> }),
                        _ => None,
                    }}
                    <button class="button" type="submit" disabled=move || state.get() == SubmitState::Submitting>
                        {move || if state.get() == SubmitState::Submitting { "Sending..." } else { "Send Feedback" }}
                    </button>
                </form>
            </Show>
            <p class="feedback__alt">
                "Prefer chatting? "
                <a href=SITE.discord.invite_url target="_blank" rel="noopener noreferrer">"Join our Discord"</a>
            </p>
        </div>
    }
}
