//! Backend Endpoint Configuration
//!
//! The backend is served from the same origin as the app; the REST base
//! and the realtime channel URL are derived from `window.location`.

/// Resolved backend endpoints, provided via context
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// REST base, e.g. `https://warkop.example/api`
    pub api_base: String,
    /// Realtime channel, e.g. `wss://warkop.example/ws`
    pub ws_url: String,
}

impl AppConfig {
    /// Derive endpoints from the browser origin, with a localhost
    /// fallback for detached contexts.
    pub fn from_window() -> Self {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_else(|| "http://localhost:8000".to_string());
        Self::from_origin(&origin)
    }

    pub fn from_origin(origin: &str) -> Self {
        let origin = origin.trim_end_matches('/');
        Self {
            api_base: format!("{}/api", origin),
            ws_url: format!("{}/ws", origin.replacen("http", "ws", 1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_origin() {
        let cfg = AppConfig::from_origin("http://localhost:8000");
        assert_eq!(cfg.api_base, "http://localhost:8000/api");
        assert_eq!(cfg.ws_url, "ws://localhost:8000/ws");
    }

    #[test]
    fn test_https_origin_upgrades_to_wss() {
        let cfg = AppConfig::from_origin("https://warkop.example/");
        assert_eq!(cfg.api_base, "https://warkop.example/api");
        assert_eq!(cfg.ws_url, "wss://warkop.example/ws");
    }
}
