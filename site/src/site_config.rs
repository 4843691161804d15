//! Compile-time site metadata: branding, navigation and the component catalog.
//!
//! Everything here is static so SSR and hydration render identical markup.

#[cfg(test)]
#[path = "site_config_test.rs"]
mod site_config_test;

/// A top-level navigation link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub href: &'static str,
}

/// Availability of a catalog component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComponentStatus {
    Ready,
    ComingSoon,
}

impl ComponentStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::ComingSoon => "Coming soon",
        }
    }
}

/// One entry in the component gallery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComponentEntry {
    pub title: &'static str,
    /// URL segment under `/components/`.
    pub slug: &'static str,
    pub status: ComponentStatus,
    pub description: &'static str,
    /// Copyable source snippet shown on the Code tab.
    pub code: &'static str,
    /// Short usage example, if the component has one.
    pub usage: Option<&'static str>,
}

impl ComponentEntry {
    #[must_use]
    pub fn href(&self) -> String {
        format!("/components/{}", self.slug)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiscordConfig {
    pub invite_url: &'static str,
    pub server_id: &'static str,
}

impl DiscordConfig {
    /// Public guild widget endpoint for presence data.
    #[must_use]
    pub fn widget_api_url(&self) -> String {
        format!("https://discord.com/api/guilds/{}/widget.json", self.server_id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub name: &'static str,
    pub logo: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub github_url: &'static str,
    pub discord: DiscordConfig,
    pub main_nav: &'static [NavItem],
    pub components: &'static [ComponentEntry],
    pub features: &'static [Feature],
    pub stats: &'static [Stat],
}

impl SiteConfig {
    /// Look up a catalog component by its URL slug.
    #[must_use]
    pub fn component(&self, slug: &str) -> Option<&'static ComponentEntry> {
        self.components.iter().find(|c| c.slug == slug)
    }

    /// Components that can be previewed today.
    pub fn ready_components(&self) -> impl Iterator<Item = &'static ComponentEntry> {
        self.components.iter().filter(|c| c.status == ComponentStatus::Ready)
    }
}

pub static SITE: SiteConfig = SiteConfig {
    name: "Okami UI",
    logo: "</>",
    version: "v1.0.0",
    description: "A modern component library with typed APIs, utility-first styling, and everything you need to build polished applications faster.",
    github_url: "https://github.com/okami-ui/okami",
    discord: DiscordConfig { invite_url: "https://discord.gg/TaHyq88cmx", server_id: "964870545864802314" },
    main_nav: &[
        NavItem { title: "Overview", href: "/" },
        NavItem { title: "Getting Started", href: "/getting-started" },
        NavItem { title: "Components", href: "/components" },
        NavItem { title: "Examples", href: "/examples" },
        NavItem { title: "Changelog", href: "/changelog" },
    ],
    components: &[
        ComponentEntry {
            title: "Button",
            slug: "button",
            status: ComponentStatus::Ready,
            description: "Clickable button component with multiple variants",
            code: "<button class=\"okami-btn okami-btn--primary\">Click me</button>",
            usage: Some("<Button variant=\"primary\" on_click=save>\"Save\"</Button>"),
        },
        ComponentEntry {
            title: "Card",
            slug: "card",
            status: ComponentStatus::Ready,
            description: "Container for content with elegant styling",
            code: "<div class=\"okami-card\">\n  <h3 class=\"okami-card__title\">Title</h3>\n  <p>Card content</p>\n</div>",
            usage: None,
        },
        ComponentEntry {
            title: "Input",
            slug: "input",
            status: ComponentStatus::Ready,
            description: "Text input field with validation support",
            code: "<input class=\"okami-input\" type=\"email\" placeholder=\"you@example.com\"/>",
            usage: Some("<Input kind=\"email\" placeholder=\"you@example.com\"/>"),
        },
        ComponentEntry {
            title: "Calendar",
            slug: "calendar",
            status: ComponentStatus::ComingSoon,
            description: "Date picker component",
            code: "",
            usage: None,
        },
        ComponentEntry {
            title: "Switch",
            slug: "switch",
            status: ComponentStatus::Ready,
            description: "Toggle switch component",
            code: "<label class=\"okami-switch\">\n  <input type=\"checkbox\"/>\n  <span class=\"okami-switch__thumb\"></span>\n</label>",
            usage: None,
        },
        ComponentEntry {
            title: "Checkbox",
            slug: "checkbox",
            status: ComponentStatus::Ready,
            description: "Checkbox input with custom styling",
            code: "<label class=\"okami-checkbox\"><input type=\"checkbox\"/> Remember me</label>",
            usage: None,
        },
        ComponentEntry {
            title: "Select",
            slug: "select",
            status: ComponentStatus::Ready,
            description: "Dropdown select component",
            code: "<select class=\"okami-select\">\n  <option>Light</option>\n  <option>Dark</option>\n</select>",
            usage: None,
        },
        ComponentEntry {
            title: "Dialog",
            slug: "dialog",
            status: ComponentStatus::ComingSoon,
            description: "Modal dialog component",
            code: "",
            usage: None,
        },
        ComponentEntry {
            title: "Badge",
            slug: "badge",
            status: ComponentStatus::Ready,
            description: "Small status indicator",
            code: "<span class=\"okami-badge\">New</span>",
            usage: Some("<Badge variant=\"outline\">\"Beta\"</Badge>"),
        },
        ComponentEntry {
            title: "Command",
            slug: "command",
            status: ComponentStatus::Ready,
            description: "Command palette component",
            code: "<div class=\"okami-command\">\n  <input class=\"okami-input\" placeholder=\"Type a command...\"/>\n</div>",
            usage: None,
        },
    ],
    features: &[
        Feature { title: "Lightning Fast", description: "Small bundles and instant rebuilds during development." },
        Feature { title: "Type Safe", description: "Typed props and events with a great editor experience." },
        Feature { title: "Modern Design", description: "A professional black and white design system." },
        Feature { title: "Developer Friendly", description: "Clean API, thorough documentation, and good tooling." },
    ],
    stats: &[
        Stat { label: "Bundle Size", value: "< 50kb" },
        Stat { label: "Components", value: "25+" },
        Stat { label: "Typed", value: "100%" },
        Stat { label: "Tree Shaking", value: "✓" },
    ],
};
