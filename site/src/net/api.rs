//! HTTP helpers for the feedback endpoint and the Discord widget.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these calls are only
//! made from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` instead of panics so a failed fetch
//! degrades the widget or form message without breaking hydration.

#![allow(clippy::unused_async)]

use super::types::{DiscordWidget, FeedbackAccepted, FeedbackRequest};

/// Submit the feedback form to `POST /api/feedback`.
///
/// # Errors
///
/// Returns the server's error message on a non-2xx response, or a transport
/// error message.
pub async fn submit_feedback(request: &FeedbackRequest) -> Result<FeedbackAccepted, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/feedback")
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let message = resp
                .json::<super::types::ApiError>()
                .await
                .map(|e| e.error)
                .unwrap_or_else(|_| format!("feedback request failed: {}", resp.status()));
            return Err(message);
        }
        resp.json::<FeedbackAccepted>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

/// Fetch the public guild widget JSON from `url`.
///
/// # Errors
///
/// Returns an error string if the request fails or the widget is disabled.
pub async fn fetch_discord_widget(url: &str) -> Result<DiscordWidget, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url).send().await.map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("widget request failed: {}", resp.status()));
        }
        resp.json::<DiscordWidget>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err("not available on server".to_owned())
    }
}
