//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Guarding is applied in `app`, not inside pages.

pub mod account;
pub mod changelog;
pub mod components;
pub mod examples;
pub mod feedback;
pub mod getting_started;
pub mod home;
pub mod legal;
pub mod login;
pub mod not_found;
pub mod unauthorized;
