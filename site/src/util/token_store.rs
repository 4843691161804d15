//! Browser `localStorage` access for the access token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token lives under a single fixed key ([`gate::TOKEN_STORAGE_KEY`]) with
//! no metadata next to it. Server rendering has no storage, so every read
//! returns `None` there and the guards stay in their checking state until the
//! client takes over.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

#[cfg(feature = "hydrate")]
use gate::TOKEN_STORAGE_KEY;

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the stored token, if any.
pub fn read() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage()?.get_item(TOKEN_STORAGE_KEY).ok().flatten().filter(|t| !t.trim().is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist `token`, replacing any previous one.
pub fn write(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            if storage.set_item(TOKEN_STORAGE_KEY, token).is_err() {
                log::warn!("token store: write failed");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the stored token.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            if storage.remove_item(TOKEN_STORAGE_KEY).is_err() {
                log::warn!("token store: clear failed");
            }
        }
    }
}

