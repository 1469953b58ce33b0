//! Browser clipboard writes.
//!
//! Requires a browser environment; SSR and native builds report the
//! clipboard as unavailable.

/// Start writing `text` to the system clipboard.
///
/// Returns `true` when the browser accepted the request. The write itself
/// completes asynchronously; a rejection is only logged.
pub fn write_text(text: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let clipboard = window.navigator().clipboard();
        let promise = clipboard.write_text(text);
        leptos::task::spawn_local(async move {
            if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                log::warn!("clipboard write rejected: {e:?}");
            }
        });
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        false
    }
}
