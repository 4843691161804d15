//! Copy-to-clipboard for code snippets.

/// Write `text` to the system clipboard.
///
/// # Errors
///
/// Returns a message when there is no browser window or the browser refuses
/// the write (e.g. insecure context or denied permission).
#[allow(clippy::unused_async)]
pub async fn copy_text(text: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| format!("clipboard write failed: {e:?}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err("clipboard not available on server".to_owned())
    }
}
