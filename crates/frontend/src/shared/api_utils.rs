//! URL construction for calls to the backend API.
//!
//! The frontend is served by Trunk on its own port during development, so
//! requests go to the backend host on port 3000 rather than to a relative
//! path.

/// Base URL of the backend, derived from the current window location.
/// Keeps the page's protocol and hostname and swaps in the backend port.
/// Returns an empty string outside a browser context.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Prefix `path` (which should start with `/api/`) with [`api_base`].
pub fn api_url(path: &str) -> String {
    let mut url = api_base();
    url.push_str(path);
    url
}
