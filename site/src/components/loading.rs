//! Blinking-grid loading indicator.

use leptos::prelude::*;

const CELL_DELAYS_MS: [u32; 6] = [0, 200, 300, 400, 500, 600];

/// Six-cell loader; `fullscreen` pins it over the whole viewport.
#[component]
pub fn Loading(#[prop(optional)] fullscreen: bool) -> impl IntoView {
    let class = if fullscreen { "loading loading--fullscreen" } else { "loading" };
    view! {
        <div class=class role="status" aria-live="polite">
            <div class="loading__grid">
                {CELL_DELAYS_MS
                    .iter()
                    .map(|delay| {
                        view! {
                            <span class="loading__cell" style=format!("animation-delay: {delay}ms")></span>
                        }
                    })
                    .collect_view()}
            </div>
            <span class="sr-only">"Loading"</span>
        </div>
    }
}
