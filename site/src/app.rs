//! Root application component with routing and context providers.

use gate::RedirectTargets;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
    hooks::use_location,
};

use crate::components::docs_layout::DocsLayout;
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::route_guard::{ProtectedRoute, PublicRoute};
use crate::pages::{
    account::AccountPage,
    changelog::ChangelogPage,
    components::{ComponentDetailPage, ComponentsPage},
    examples::ExamplesPage,
    feedback::FeedbackPage,
    getting_started::GettingStartedPage,
    home::HomePage,
    legal::{CookiesPage, PrivacyPage, TermsPage},
    login::LoginPage,
    not_found::NotFoundPage,
    unauthorized::UnauthorizedPage,
};
use crate::site_config::SITE;
use crate::state::{auth::AuthState, ui::UiState};
use crate::util::{theme, token_store};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content=SITE.description/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared state contexts and sets up client-side routing. Auth
/// status starts `Unknown` on both server and client so hydration matches;
/// the stored token is only inspected once the app is mounted in a browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(RedirectTargets::default());

    Effect::new(move || {
        if !auth.get_untracked().status.is_settled() {
            auth.set(AuthState::from_stored_token(token_store::read()));
        }
        let preferred = theme::read_preference();
        theme::apply(preferred);
        ui.update(|u| u.theme = preferred);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/okami-site.css"/>
        <Title text=SITE.name/>

        <Router>
            <ScrollToTop/>
            <div class="app-shell">
                <Navbar/>
                <main class="app-main">
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <ParentRoute path=StaticSegment("") view=DocsLayout>
                            <Route path=StaticSegment("") view=HomePage/>
                            <Route path=StaticSegment("getting-started") view=GettingStartedPage/>
                            <Route path=StaticSegment("components") view=ComponentsPage/>
                            <Route
                                path=(StaticSegment("components"), ParamSegment("slug"))
                                view=ComponentDetailPage
                            />
                            <Route path=StaticSegment("examples") view=ExamplesPage/>
                            <Route path=StaticSegment("changelog") view=ChangelogPage/>
                        </ParentRoute>
                        <Route path=StaticSegment("feedback") view=FeedbackPage/>
                        <Route path=StaticSegment("privacy") view=PrivacyPage/>
                        <Route path=StaticSegment("terms") view=TermsPage/>
                        <Route path=StaticSegment("cookies") view=CookiesPage/>
                        <Route
                            path=StaticSegment("login")
                            view=|| view! {
                                <PublicRoute>
                                    <LoginPage/>
                                </PublicRoute>
                            }
                        />
                        <Route
                            path=StaticSegment("account")
                            view=|| view! {
                                <ProtectedRoute>
                                    <AccountPage/>
                                </ProtectedRoute>
                            }
                        />
                        <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}

/// Scroll the window back to the top whenever the path changes.
#[component]
fn ScrollToTop() -> impl IntoView {
    let pathname = use_location().pathname;
    Effect::new(move || {
        let _ = pathname.get();
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        }
    });
}
