//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::ApiConfig;

/// Get the base URL for API requests
///
/// Uses the configured `base_url` when set, otherwise the origin of the
/// current page (the portal is normally served by the backend itself).
///
/// # Returns
/// - API base URL like "https://portal.example.com"
/// - Empty string if neither is available, which leaves the request relative
pub fn api_base(config: &ApiConfig) -> String {
    let configured = config.base_url.trim().trim_end_matches('/');
    if !configured.is_empty() {
        return configured.to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url(&config.api, &config.api.submissions_path);
/// ```
pub fn api_url(config: &ApiConfig, path: &str) -> String {
    join_url(&api_base(config), path)
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') || base.is_empty() {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
