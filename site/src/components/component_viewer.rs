//! Preview/code viewer for a catalog component.
//!
//! Shows a live preview on one tab and the copyable snippet on the other.
//! The copy button flips to "Copied" for [`COPIED_RESET_MS`] after a
//! successful clipboard write.

use leptos::prelude::*;

use crate::site_config::ComponentEntry;

pub const COPIED_RESET_MS: u32 = 2000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum ViewerTab {
    #[default]
    Preview,
    Code,
}

/// Copy button bound to a fixed snippet.
#[component]
pub fn CopyButton(text: &'static str) -> impl IntoView {
    let copied = RwSignal::new(false);

    let on_copy = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::util::clipboard::copy_text(text).await {
                Ok(()) => {
                    copied.set(true);
                    gloo_timers::future::TimeoutFuture::new(COPIED_RESET_MS).await;
                    copied.set(false);
                }
                Err(e) => log::warn!("copy failed: {e}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (text, copied);
    };

    view! {
        <button class="copy-button" on:click=on_copy aria-live="polite">
            {move || if copied.get() { "Copied" } else { "Copy" }}
        </button>
    }
}

#[component]
pub fn ComponentViewer(entry: &'static ComponentEntry, children: ChildrenFn) -> impl IntoView {
    let tab = RwSignal::new(ViewerTab::default());

    view! {
        <div class="component-viewer">
            <div class="component-viewer__header">
                <span class="badge">"Component"</span>
                <h1>{entry.title}</h1>
                <p class="component-viewer__description">{entry.description}</p>
            </div>
            <div class="tabs" role="tablist">
                <button
                    role="tab"
                    class="tabs__trigger"
                    class:active=move || tab.get() == ViewerTab::Preview
                    on:click=move |_| tab.set(ViewerTab::Preview)
                >
                    "Preview"
                </button>
                <button
                    role="tab"
                    class="tabs__trigger"
                    class:active=move || tab.get() == ViewerTab::Code
                    on:click=move |_| tab.set(ViewerTab::Code)
                >
                    "Code"
                </button>
            </div>
            {move || match tab.get() {
                ViewerTab::Preview => {
                    view! {
                        <div class="card component-viewer__preview">
                            <h3 class="card__title">"Live Preview"</h3>
                            <div class="component-viewer__stage">{children()}</div>
                        </div>
                    }
                        .into_any()
                }
                ViewerTab::Code => {
                    view! {
                        <div class="card component-viewer__code">
                            <div class="component-viewer__code-header">
                                <h3 class="card__title">"Component Code"</h3>
                                <CopyButton text=entry.code/>
                            </div>
                            <pre><code>{entry.code}</code></pre>
                        </div>
                    }
                        .into_any()
                }
            }}
            {entry
                .usage
                .map(|usage| {
                    view! {
                        <div class="card component-viewer__usage">
                            <div class="component-viewer__code-header">
                                <h3 class="card__title">"Usage"</h3>
                                <CopyButton text=usage/>
                            </div>
                            <pre><code>{usage}</code></pre>
                        </div>
                    }
                })}
        </div>
    }
}
