//! Title block shared by documentation pages.

use leptos::prelude::*;

#[component]
pub fn PageHeader(
    title: &'static str,
    #[prop(optional)] badge: Option<&'static str>,
    #[prop(optional)] description: Option<&'static str>,
) -> impl IntoView {
    view! {
        <header class="page-header">
            {badge.map(|b| view! { <span class="badge badge--outline">{b}</span> })}
            <h1 class="page-header__title">{title}</h1>
            {description.map(|d| view! { <p class="page-header__lead">{d}</p> })}
        </header>
    }
}
