//! Client Configuration
//!
//! Resolves the check-stream endpoint, with a local-storage override for
//! pointing the viewer at a non-default daemon.

/// Default smon check-stream endpoint
pub const DEFAULT_STREAM_URL: &str = "ws://localhost:8181/stream";

/// Get the stream URL from local storage or use the default
pub fn get_stream_url() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("smon_stream_url") {
                url
            } else {
                DEFAULT_STREAM_URL.to_string()
            }
        } else {
            DEFAULT_STREAM_URL.to_string()
        }
    } else {
        DEFAULT_STREAM_URL.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}
