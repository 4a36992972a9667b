//! API utilities for frontend-backend communication
//!
//! Resolves the backend base URL. The URL comes from the `API_BASE_URL`
//! environment variable at build time; without it the backend is assumed to
//! run on the same host as the page, port 8000.

const DEFAULT_API_PORT: u16 = 8000;

/// Get the base URL for API requests
///
/// # Returns
/// - `API_BASE_URL` without a trailing slash, when set at build time
/// - Otherwise a URL like "http://localhost:8000" built from the current window location
pub fn api_base() -> String {
    let (protocol, hostname) = match web_sys::window() {
        Some(w) => {
            let location = w.location();
            (
                location.protocol().unwrap_or_else(|_| "http:".to_string()),
                location
                    .hostname()
                    .unwrap_or_else(|_| "127.0.0.1".to_string()),
            )
        }
        None => ("http:".to_string(), "127.0.0.1".to_string()),
    };
    resolve_api_base(option_env!("API_BASE_URL"), &protocol, &hostname)
}

/// Pick the configured base URL or derive one from the page location
pub fn resolve_api_base(configured: Option<&str>, protocol: &str, hostname: &str) -> String {
    match configured.map(str::trim).filter(|s| !s.is_empty()) {
        Some(url) => url.trim_end_matches('/').to_string(),
        None => format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_base_wins() {
        assert_eq!(
            resolve_api_base(Some("https://api.example.in/"), "http:", "localhost"),
            "https://api.example.in"
        );
    }

    #[test]
    fn test_fallback_to_location() {
        assert_eq!(
            resolve_api_base(None, "https:", "ops.example.in"),
            "https://ops.example.in:8000"
        );
        assert_eq!(
            resolve_api_base(Some("  "), "http:", "localhost"),
            "http://localhost:8000"
        );
    }
}
