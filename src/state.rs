//! Application state
//!
//! Holds configuration and the shared components

use std::sync::Arc;

use tera::Tera;

use crate::backend_client::BackendClient;
use crate::camera_service::CameraService;
use crate::error::{Error, Result};

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Recorder origin (REST API and stream endpoints)
    pub backend_url: String,
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Recorder request timeout in seconds
    pub request_timeout_sec: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: std::env::var("BACKEND_URL")
                .unwrap_or_else(|_| "http://localhost:8888".to_string()),
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            request_timeout_sec: std::env::var("REQUEST_TIMEOUT_SEC")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(10),
        }
    }
}

impl AppConfig {
    /// Reject a recorder origin that request URLs cannot be built from.
    pub fn validate(&self) -> Result<()> {
        if self.backend_url.starts_with("http://") || self.backend_url.starts_with("https://") {
            Ok(())
        } else {
            Err(Error::Config(format!(
                "BACKEND_URL must be an http(s) origin, got '{}'",
                self.backend_url
            )))
        }
    }
}

/// Application state shared across handlers
///
/// Immutable after startup; every page request reads from here and holds
/// nothing of its own between requests.
#[derive(Clone)]
pub struct AppState {
    /// Application config
    pub config: AppConfig,
    /// Recorder HTTP adapter
    pub backend: Arc<BackendClient>,
    /// Camera data access
    pub cameras: Arc<CameraService>,
    /// Page templates
    pub templates: Arc<Tera>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(backend_url: &str) -> AppConfig {
        AppConfig {
            backend_url: backend_url.to_string(),
            host: "127.0.0.1".to_string(),
            port: 8080,
            request_timeout_sec: 10,
        }
    }

    #[test]
    fn test_validate_accepts_http_origin() {
        assert!(config("http://localhost:8888").validate().is_ok());
        assert!(config("https://recorder.local").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_schemeless_origin() {
        assert!(config("localhost:8888").validate().is_err());
    }
}
