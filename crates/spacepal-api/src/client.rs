//! HTTP client for the SpacePal backend.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use spacepal_core::config::ClientConfig;
use spacepal_core::{Result, SpacePalError};

/// Client for the SpacePal REST API.
///
/// One instance implements every gateway trait; reqwest pools connections
/// internally, so the client is cheap to clone and share.
#[derive(Debug, Clone)]
pub struct SpacePalClient {
    client: Client,
    base_url: String,
}

impl SpacePalClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                SpacePalError::transport(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(self.url(path))
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.client.post(self.url(path))
    }

    pub(crate) fn put(&self, path: &str) -> RequestBuilder {
        self.client.put(self.url(path))
    }

    pub(crate) fn patch(&self, path: &str) -> RequestBuilder {
        self.client.patch(self.url(path))
    }

    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.client.delete(self.url(path))
    }

    pub(crate) fn bearer(request: RequestBuilder, token: &str) -> RequestBuilder {
        request.header("Authorization", format!("Bearer {}", token))
    }

    /// Sends the request and maps non-success statuses onto typed errors.
    ///
    /// 401 and 403 get their own variants so callers can distinguish "log
    /// in again" from "not allowed"; everything else carries the raw status
    /// and response body.
    pub(crate) async fn send(request: RequestBuilder) -> Result<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| SpacePalError::transport(format!("request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        tracing::debug!(status = status.as_u16(), %message, "backend returned an error");

        Err(match status.as_u16() {
            401 => SpacePalError::auth(message),
            403 => SpacePalError::forbidden(message),
            status => SpacePalError::api(status, message),
        })
    }

    pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        response.json::<T>().await.map_err(|e| SpacePalError::Serialization {
            format: "JSON".to_string(),
            message: format!("failed to decode response body: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let config = ClientConfig {
            api_base_url: "http://localhost:8000/api/v1/".into(),
            timeout_secs: 5,
        };
        let client = SpacePalClient::new(&config).unwrap();
        assert_eq!(
            client.url("/products/p1"),
            "http://localhost:8000/api/v1/products/p1"
        );
    }
}
