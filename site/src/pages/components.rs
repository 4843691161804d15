//! Component gallery and per-component detail pages.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::component_viewer::ComponentViewer;
use crate::components::page_header::PageHeader;
use crate::site_config::{ComponentStatus, SITE};

#[component]
pub fn ComponentsPage() -> impl IntoView {
    view! {
        <div class="components-gallery">
            <PageHeader
                title="Components"
                badge="Library"
                description="Accessible building blocks you can copy into your project and make your own."
            />
            <div class="components-gallery__grid">
                {SITE
                    .components
                    .iter()
                    .map(|entry| {
                        let ready = entry.status == ComponentStatus::Ready;
                        view! {
                            <div class="card component-card" class:muted=!ready>
                                <div class="component-card__header">
                                    <h3 class="card__title">{entry.title}</h3>
                                    <span class="badge badge--muted">{entry.status.label()}</span>
                                </div>
                                <p>{entry.description}</p>
                                {ready.then(|| view! { <A href=entry.href() attr:class="button button--outline">"View"</A> })}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// `/components/:slug`: live preview and snippet for one catalog entry.
#[component]
pub fn ComponentDetailPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();

    move || {
        let entry = SITE.component(&slug()).filter(|c| c.status == ComponentStatus::Ready);
        match entry {
            Some(entry) => view! {
                <ComponentViewer entry=entry>
                    <div class="component-preview" inner_html=entry.code></div>
                </ComponentViewer>
            }
            .into_any(),
            None => view! {
                <div class="component-missing">
                    <h1>"Component not available"</h1>
                    <p>"This component does not exist or is not released yet."</p>
                    <A href="/components">"Back to components"</A>
                </div>
            }
            .into_any(),
        }
    }
}
