//! Thin wrappers over the browser APIs the UI drives directly. Both are
//! no-ops (with a debug log) off the web platform so the crate stays
//! compilable and testable natively.

/// Open a URL in a new tab.
pub fn open_in_new_tab(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(url, "_blank");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!(url, "open_in_new_tab called outside the browser");
    }
}

/// Hand in-memory bytes to the browser as a file download: the bytes are
/// wrapped in a Blob, exposed through a temporary object URL, and clicked
/// through a detached anchor element.
pub fn save_file(file_name: &str, bytes: &[u8]) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let array = js_sys::Uint8Array::from(bytes);
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());
        let Ok(blob) = web_sys::Blob::new_with_u8_array_sequence(&parts) else {
            return;
        };
        let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
            return;
        };
        if let Ok(anchor) = document.create_element("a") {
            let _ = anchor.set_attribute("href", &url);
            let _ = anchor.set_attribute("download", file_name);
            if let Some(anchor) = anchor.dyn_ref::<web_sys::HtmlElement>() {
                anchor.click();
            }
        }
        let _ = web_sys::Url::revoke_object_url(&url);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!(file_name, len = bytes.len(), "save_file called outside the browser");
    }
}
