//! Helpers for constructing analytics-service URLs.

/// Base URL of the analytics service.
///
/// The service runs next to wherever the dashboard is served from, on
/// port 8000. Returns an empty string outside a browser context.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8000", protocol, hostname)
}

/// Full service URL for a path like `/dashboard_data?...`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
