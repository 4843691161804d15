//! Site footer with copyright and community links.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::site_config::SITE;

/// Copyright line; the year is only known in the browser, so SSR omits it.
fn copyright(year: Option<u32>) -> String {
    match year {
        Some(year) => format!("© {year} {}. All rights reserved.", SITE.name),
        None => format!("© {}. All rights reserved.", SITE.name),
    }
}

fn current_year() -> Option<u32> {
    #[cfg(feature = "hydrate")]
    {
        Some(js_sys::Date::new_0().get_full_year())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = RwSignal::new(None::<u32>);
    Effect::new(move || year.set(current_year()));

    view! {
        <footer class="footer">
            <p class="footer__copyright">{move || copyright(year.get())}</p>
            <nav class="footer__links">
                <A href="/privacy">"Privacy"</A>
                <A href="/terms">"Terms"</A>
                <A href="/cookies">"Cookies"</A>
                <A href="/feedback">"Feedback"</A>
                <a href=SITE.github_url target="_blank" rel="noopener noreferrer">"GitHub"</a>
                <a href=SITE.discord.invite_url target="_blank" rel="noopener noreferrer">"Discord"</a>
            </nav>
        </footer>
    }
}
