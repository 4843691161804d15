//! Networking modules for the few HTTP calls the site makes.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the requests (browser only), `types` defines their payloads
//! so the server can share the feedback schema.

pub mod api;
pub mod types;
