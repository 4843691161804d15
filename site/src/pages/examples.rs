//! Gallery of example layouts built with the library.

use leptos::prelude::*;

use crate::components::page_header::PageHeader;

struct Example {
    title: &'static str,
    category: &'static str,
    description: &'static str,
    components: &'static [&'static str],
}

const EXAMPLES: &[Example] = &[
    Example {
        title: "Authentication",
        category: "Forms",
        description: "Sign-in and sign-up screens with validation states.",
        components: &["Card", "Input", "Button", "Checkbox"],
    },
    Example {
        title: "Dashboard",
        category: "Layouts",
        description: "Analytics overview with cards, badges and a command palette.",
        components: &["Card", "Badge", "Command"],
    },
    Example {
        title: "Settings",
        category: "Forms",
        description: "Preference panels with switches and selects.",
        components: &["Switch", "Select", "Button"],
    },
    Example {
        title: "Pricing",
        category: "Marketing",
        description: "Tiered pricing table with highlighted plan.",
        components: &["Card", "Badge", "Button"],
    },
];

#[component]
pub fn ExamplesPage() -> impl IntoView {
    view! {
        <div class="examples">
            <PageHeader
                title="Examples"
                badge="Showcase"
                description="Real-world layouts composed from Okami UI components."
            />
            <div class="examples__grid">
                {EXAMPLES
                    .iter()
                    .map(|example| {
                        view! {
                            <div class="card example">
                                <span class="badge badge--muted">{example.category}</span>
                                <h3 class="card__title">{example.title}</h3>
                                <p>{example.description}</p>
                                <ul class="example__components">
                                    {example
                                        .components
                                        .iter()
                                        .map(|name| view! { <li class="badge badge--outline">{*name}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
