//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome (navigation, layout, footer), the route
//! guards, and documentation widgets, reading shared state from Leptos
//! context providers.

pub mod component_viewer;
pub mod discord_status;
pub mod docs_layout;
pub mod footer;
pub mod loading;
pub mod navbar;
pub mod page_header;
pub mod route_guard;
pub mod sidebar;
