//! Community presence card backed by the Discord guild widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! The widget JSON is fetched once from the browser after mount. Until it
//! arrives the card shows skeleton rows; a failed fetch shows a short message
//! and the invite link, never an error page.

use leptos::prelude::*;

use crate::net::types::{DiscordWidget, MemberStatus};
use crate::site_config::SITE;

const MAX_MEMBERS_SHOWN: usize = 8;

#[derive(Clone, Debug, PartialEq)]
enum WidgetLoad {
    Loading,
    Ready(DiscordWidget),
    Failed,
}

fn status_class(status: MemberStatus) -> &'static str {
    match status {
        MemberStatus::Online => "presence presence--online",
        MemberStatus::Idle => "presence presence--idle",
        MemberStatus::Dnd => "presence presence--dnd",
        MemberStatus::Offline => "presence presence--offline",
    }
}

#[component]
pub fn DiscordStatus() -> impl IntoView {
    let load = RwSignal::new(WidgetLoad::Loading);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let url = SITE.discord.widget_api_url();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_discord_widget(&url).await {
                Ok(widget) => load.set(WidgetLoad::Ready(widget)),
                Err(e) => {
                    log::error!("discord widget: {e}");
                    load.set(WidgetLoad::Failed);
                }
            }
        });
    });

    view! {
        <div class="card discord-status">
            {move || match load.get() {
                WidgetLoad::Loading => {
                    view! {
                        <div class="discord-status__skeleton">
                            {(0..3).map(|_| view! { <div class="skeleton skeleton--row"></div> }).collect_view()}
                        </div>
                    }
                        .into_any()
                }
                WidgetLoad::Failed => {
                    view! { <p class="discord-status__error">"Unable to load Discord status"</p> }.into_any()
                }
                WidgetLoad::Ready(widget) => {
                    let members = widget.sorted_members();
                    view! {
                        <div class="discord-status__header">
                            <h3>{widget.name.clone()}</h3>
                            <span class="discord-status__count">
                                {format!("{} online", widget.presence_count)}
                            </span>
                        </div>
                        <ul class="discord-status__members">
                            {members
                                .into_iter()
                                .take(MAX_MEMBERS_SHOWN)
                                .map(|m| {
                                    view! {
                                        <li class="discord-status__member">
                                            {m.avatar_url.map(|src| view! { <img class="avatar" src=src alt=""/> })}
                                            <span class="discord-status__name">{m.username}</span>
                                            <span class=status_class(m.status) title=m.status.label()></span>
                                            {m.game.map(|g| view! { <span class="discord-status__game">{g.name}</span> })}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                }
            }}
            <a class="button button--outline" href=SITE.discord.invite_url target="_blank" rel="noopener noreferrer">
                "Join the Discord"
            </a>
        </div>
    }
}
