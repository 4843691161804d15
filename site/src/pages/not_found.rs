//! Fallback for unmatched routes.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="status-page">
            <h1 class="status-page__code">"404"</h1>
            <p class="status-page__message">"Page not found"</p>
            <A href="/" attr:class="button">"Go back home"</A>
        </div>
    }
}
