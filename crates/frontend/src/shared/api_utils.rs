//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.

/// Port of the sales API server
pub const API_PORT: u16 = 5000;

/// Path prefix of every API route
pub const API_PREFIX: &str = "/api";

/// Get the base URL for API requests
///
/// A `SALES_API_BASE` value set at build time wins. Otherwise the base is
/// built from the current window location, using port 5000 for the API server.
///
/// # Returns
/// - API base URL like "http://localhost:5000/api"
/// - Just the "/api" prefix if window is not available
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/sales?page=2", api_base());
/// ```
pub fn api_base() -> String {
    if let Some(base) = option_env!("SALES_API_BASE") {
        return normalize_base(base);
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return API_PREFIX.to_string(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_for_host(&protocol, &hostname)
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The route below the API base (should start with "/")
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/filters");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn base_for_host(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}{}", protocol, hostname, API_PORT, API_PREFIX)
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}
