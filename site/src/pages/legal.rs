//! Privacy, terms and cookie policy pages.

use leptos::prelude::*;

use crate::components::page_header::PageHeader;
use crate::util::markdown;

const LAST_UPDATED: &str = "Last updated: January 1, 2024";

const PRIVACY: &str = "
## What we collect

The documentation site does not require an account. If you send feedback we
store your name, email and message so we can reply.

## Analytics

We do not run third-party analytics. Server logs keep request paths and
timestamps for up to 30 days.

## Contact

Questions about this policy can be sent through the feedback page.
";

const TERMS: &str = "
## License

Okami UI is released under the MIT license. You may copy, modify and ship the
components in commercial and non-commercial projects.

## No warranty

The library and this site are provided as is, without warranty of any kind.

## Changes

We may update these terms; the date above reflects the latest revision.
";

const COOKIES: &str = "
## Local storage

The site stores two values in your browser:

| Key | Purpose |
|-----|---------|
| `okami_ui_theme` | Your light or dark theme choice |
| `ga6` | Your access token, only after you sign in |

## Third parties

The Discord community card loads presence data from Discord when you view the
home page.
";

fn legal_page(title: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <div class="legal">
            <PageHeader title=title description=LAST_UPDATED/>
            <article class="prose" inner_html=markdown::render(body)></article>
        </div>
    }
}

#[component]
pub fn PrivacyPage() -> impl IntoView {
    legal_page("Privacy Policy", PRIVACY)
}

#[component]
pub fn TermsPage() -> impl IntoView {
    legal_page("Terms of Service", TERMS)
}

#[component]
pub fn CookiesPage() -> impl IntoView {
    legal_page("Cookie Policy", COOKIES)
}
