//! Utility helpers shared across site UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability. Browser-only paths compile to
//! no-ops outside the `hydrate` feature.

pub mod clipboard;
pub mod theme;
pub mod markdown;
pub mod token_store;
