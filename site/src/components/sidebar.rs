//! Component catalog sidebar for the docs layout.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::site_config::{ComponentStatus, SITE};
use crate::state::ui::UiState;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <aside class="sidebar">
            <input
                class="sidebar__filter"
                type="search"
                placeholder="Filter components"
                prop:value=move || ui.get().sidebar_filter
                on:input=move |ev| ui.update(|u| u.sidebar_filter = event_target_value(&ev))
            />
            <h4 class="sidebar__heading">"Components"</h4>
            <ul class="sidebar__list">
                {SITE
                    .components
                    .iter()
                    .map(|entry| {
                        let title = entry.title;
                        let ready = entry.status == ComponentStatus::Ready;
                        view! {
                            <li class="sidebar__item" class:hidden=move || !ui.get().sidebar_matches(title)>
                                {if ready {
                                    view! { <A href=entry.href()>{title}</A> }.into_any()
                                } else {
                                    view! {
                                        <span class="sidebar__disabled">
                                            {title}
                                            <span class="badge badge--muted">{entry.status.label()}</span>
                                        </span>
                                    }
                                        .into_any()
                                }}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </aside>
    }
}
