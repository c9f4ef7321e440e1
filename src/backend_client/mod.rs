//! BackendClient - Recorder HTTP Adapter
//!
//! ## Responsibilities
//!
//! - Build request URLs under the recorder's `/api/v1` base
//! - Issue GET requests with query parameters, decode typed JSON responses
//! - Recorder connectivity check for the health endpoint

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::state::AppConfig;

/// HTTP client for the recorder's REST API.
pub struct BackendClient {
    client: reqwest::Client,
    backend_url: String,
    api_base: String,
}

impl BackendClient {
    /// Create a client for the configured recorder origin.
    ///
    /// Trailing slashes on the origin are trimmed before the `/api/v1`
    /// base is composed.
    pub fn new(config: &AppConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_sec))
            .build()
            .expect("Failed to create HTTP client");

        let backend_url = config.backend_url.trim_end_matches('/').to_string();
        let api_base = format!("{}/api/v1", backend_url);

        Self {
            client,
            backend_url,
            api_base,
        }
    }

    /// GET a resource path and decode the JSON response body.
    ///
    /// Query pairs are passed through verbatim, one entry per pair, with
    /// keys and values percent-encoded. Non-success statuses map to
    /// [`Error::Api`], undecodable bodies to [`Error::Decode`].
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T> {
        let url = self.request_url(path, query);
        tracing::debug!(url = %url, "Recorder GET");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api { status, url });
        }

        let body = response.text().await?;
        let value = serde_json::from_str(&body)?;
        Ok(value)
    }

    /// Check whether the recorder answers on the camera collection endpoint.
    ///
    /// Transport errors report `false`; they never fail the caller.
    pub async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/camera", self.api_base);
        match self.client.get(&url).send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    /// Recorder origin with trailing slashes trimmed.
    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    /// API base URL (`<origin>/api/v1`).
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn request_url(&self, path: &str, query: &[(String, String)]) -> String {
        let mut url = format!("{}/{}", self.api_base, path);
        if !query.is_empty() {
            let pairs: Vec<String> = query
                .iter()
                .map(|(key, value)| {
                    format!(
                        "{}={}",
                        urlencoding::encode(key),
                        urlencoding::encode(value)
                    )
                })
                .collect();
            url.push('?');
            url.push_str(&pairs.join("&"));
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(backend_url: &str) -> AppConfig {
        AppConfig {
            backend_url: backend_url.to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
            request_timeout_sec: 5,
        }
    }

    #[test]
    fn test_api_base_trims_trailing_slashes() {
        let client = BackendClient::new(&config("http://recorder:8888///"));
        assert_eq!(client.backend_url(), "http://recorder:8888");
        assert_eq!(client.api_base(), "http://recorder:8888/api/v1");
    }

    #[test]
    fn test_request_url_without_query_has_no_separator() {
        let client = BackendClient::new(&config("http://recorder:8888"));
        let url = client.request_url("camera", &[]);
        assert_eq!(url, "http://recorder:8888/api/v1/camera");
    }

    #[test]
    fn test_request_url_one_entry_per_pair() {
        let client = BackendClient::new(&config("http://recorder:8888"));
        let query = vec![
            ("fields".to_string(), "*".to_string()),
            ("order".to_string(), "name".to_string()),
            ("limit".to_string(), "25".to_string()),
        ];
        let url = client.request_url("camera", &query);
        assert_eq!(
            url,
            "http://recorder:8888/api/v1/camera?fields=%2A&order=name&limit=25"
        );
    }

    #[test]
    fn test_request_url_percent_encodes_values() {
        let client = BackendClient::new(&config("http://recorder:8888"));
        let query = vec![(
            "fields".to_string(),
            "id,name,host".to_string(),
        )];
        let url = client.request_url("camera/3", &query);
        assert_eq!(
            url,
            "http://recorder:8888/api/v1/camera/3?fields=id%2Cname%2Chost"
        );
    }
}
