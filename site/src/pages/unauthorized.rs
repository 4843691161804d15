//! Landing spot for visitors whose role does not admit them to a route.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="status-page">
            <h1 class="status-page__code">"403"</h1>
            <p class="status-page__message">"You don't have access to that page."</p>
            <A href="/" attr:class="button">"Go back home"</A>
        </div>
    }
}
