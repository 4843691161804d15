//! Layout for documentation routes: sidebar beside the routed page.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::sidebar::Sidebar;

#[component]
pub fn DocsLayout() -> impl IntoView {
    view! {
        <div class="docs-layout">
            <Sidebar/>
            <section class="docs-layout__content">
                <Outlet/>
            </section>
        </div>
    }
}
