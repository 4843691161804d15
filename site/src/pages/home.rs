//! Landing page: hero, feature grid, stats and community card.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::discord_status::DiscordStatus;
use crate::site_config::SITE;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <section class="hero">
                <span class="badge badge--outline">{format!("{} now available", SITE.version)}</span>
                <h1 class="hero__title">{SITE.name}</h1>
                <p class="hero__lead">{SITE.description}</p>
                <p class="muted">{format!("{} components ready to copy", SITE.ready_components().count())}</p>
                <div class="hero__actions">
                    <A href="/getting-started" attr:class="button">"Get Started"</A>
                    <A href="/components" attr:class="button button--outline">"Browse Components"</A>
                </div>
            </section>

            <section class="stats">
                {SITE
                    .stats
                    .iter()
                    .map(|stat| {
                        view! {
                            <div class="stats__item">
                                <span class="stats__value">{stat.value}</span>
                                <span class="stats__label">{stat.label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="features">
                {SITE
                    .features
                    .iter()
                    .map(|feature| {
                        view! {
                            <div class="card feature">
                                <h3 class="card__title">{feature.title}</h3>
                                <p>{feature.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="community">
                <h2>"Join the community"</h2>
                <p>"Ask questions, share what you build, and follow releases."</p>
                <DiscordStatus/>
            </section>
        </div>
    }
}
