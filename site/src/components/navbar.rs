//! Top navigation bar: brand, main links, theme toggle and sign-in state.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::site_config::SITE;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::{theme, token_store};

/// Whether `href` should be highlighted for `pathname`.
///
/// The root link only matches exactly; other links also match nested paths
/// (`/components` stays active on `/components/button`).
pub(crate) fn is_active(pathname: &str, href: &str) -> bool {
    if href == "/" {
        return pathname == "/";
    }
    pathname == href || pathname.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;

    let on_toggle_theme = move |_| {
        let next = theme::toggle(ui.get_untracked().theme);
        ui.update(|u| u.theme = next);
    };
    let on_toggle_menu = move |_| ui.update(|u| u.mobile_nav_open = !u.mobile_nav_open);
    let on_sign_out = move |_| {
        token_store::clear();
        auth.update(AuthState::sign_out);
    };

    // Close the mobile menu after navigating.
    Effect::new(move || {
        let _ = pathname.get();
        ui.update(|u| u.mobile_nav_open = false);
    });

    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">
                <span class="navbar__logo">{SITE.logo}</span>
                <span class="navbar__name">{SITE.name}</span>
                <span class="badge badge--outline">{SITE.version}</span>
            </A>
            <button class="navbar__menu-toggle" aria-label="Toggle navigation" on:click=on_toggle_menu>
                "☰"
            </button>
            <ul class="navbar__links" class:open=move || ui.get().mobile_nav_open>
                {SITE
                    .main_nav
                    .iter()
                    .map(|item| {
                        let href = item.href;
                        view! {
                            <li>
                                <A
                                    href=href
                                    attr:class=move || {
                                        if is_active(&pathname.get(), href) {
                                            "navbar__link navbar__link--active"
                                        } else {
                                            "navbar__link"
                                        }
                                    }
                                >
                                    {item.title}
                                </A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="navbar__actions">
                <button class="navbar__theme" aria-label="Toggle theme" on:click=on_toggle_theme>
                    {move || if ui.get().theme.is_dark() { "☀" } else { "☾" }}
                </button>
                <Show
                    when=move || auth.get().is_signed_in()
                    fallback=|| view! { <A href="/login" attr:class="navbar__signin">"Sign in"</A> }
                >
                    <A href="/account" attr:class="navbar__account">"Account"</A>
                    <button class="navbar__signout" on:click=on_sign_out>"Sign out"</button>
                </Show>
            </div>
        </nav>
    }
}
