//! Release notes.

#[cfg(test)]
#[path = "changelog_test.rs"]
mod changelog_test;

use leptos::prelude::*;

use crate::components::page_header::PageHeader;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeKind {
    Feature,
    Fix,
    Improvement,
}

impl ChangeKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Feature => "Feature",
            Self::Fix => "Fix",
            Self::Improvement => "Improvement",
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Feature => "change change--feature",
            Self::Fix => "change change--fix",
            Self::Improvement => "change change--improvement",
        }
    }
}

pub struct Release {
    pub version: &'static str,
    pub date: &'static str,
    pub status: &'static str,
    pub changes: &'static [(ChangeKind, &'static str)],
}

impl Release {
    /// Number of changes of `kind` in this release.
    #[must_use]
    pub fn count(&self, kind: ChangeKind) -> usize {
        self.changes.iter().filter(|(k, _)| *k == kind).count()
    }
}

/// Newest first.
pub const RELEASES: &[Release] = &[
    Release {
        version: "v1.0.0",
        date: "January 1, 2024",
        status: "Latest",
        changes: &[
            (ChangeKind::Feature, "Initial stable release of Okami UI"),
            (ChangeKind::Feature, "Core component library with 25+ components"),
            (ChangeKind::Feature, "Fully typed component APIs"),
            (ChangeKind::Improvement, "Utility-first styling integration"),
            (ChangeKind::Feature, "Professional black and white design system"),
        ],
    },
    Release {
        version: "v0.9.0",
        date: "December 15, 2023",
        status: "Beta",
        changes: &[
            (ChangeKind::Feature, "Added Command component"),
            (ChangeKind::Feature, "Added Badge component variants"),
            (ChangeKind::Fix, "Fixed responsive design issues"),
            (ChangeKind::Improvement, "Improved component performance"),
        ],
    },
    Release {
        version: "v0.8.0",
        date: "December 1, 2023",
        status: "Beta",
        changes: &[
            (ChangeKind::Feature, "Added Select component"),
            (ChangeKind::Feature, "Added Checkbox component"),
            (ChangeKind::Feature, "Added Switch component"),
            (ChangeKind::Fix, "Fixed accessibility issues"),
        ],
    },
];

#[component]
pub fn ChangelogPage() -> impl IntoView {
    view! {
        <div class="changelog">
            <PageHeader
                title="Changelog"
                badge="Release Notes"
                description="Every notable change to Okami UI, newest first."
            />
            {RELEASES
                .iter()
                .map(|release| {
                    view! {
                        <article class="card release">
                            <header class="release__header">
                                <h2>{release.version}</h2>
                                <span class="badge">{release.status}</span>
                                <time class="release__date">{release.date}</time>
                            </header>
                            <p class="muted">
                                {format!(
                                    "{} features, {} fixes, {} improvements",
                                    release.count(ChangeKind::Feature),
                                    release.count(ChangeKind::Fix),
                                    release.count(ChangeKind::Improvement),
                                )}
                            </p>
                            <ul class="release__changes">
                                {release
                                    .changes
                                    .iter()
                                    .map(|(kind, text)| {
                                        view! {
                                            <li>
                                                <span class=kind.class()>{kind.label()}</span>
                                                {*text}
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </article>
                    }
                })
                .collect_view()}
        </div>
    }
}
