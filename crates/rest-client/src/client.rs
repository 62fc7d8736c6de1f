//! Generic REST client wrapper around reqwest.

use crate::error::RestError;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Generic REST client for making HTTP requests.
///
/// Holds a single `reqwest::Client` for the lifetime of the process.
pub struct RestClient {
    client: Client,
    base_url: String,
}

impl RestClient {
    /// Create a new REST client with the given base URL.
    ///
    /// # Arguments
    /// * `base_url` - Base URL for all requests (e.g., "https://api.sandbox.gemini.com")
    /// * `timeout` - Request timeout duration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RestError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RestError::RequestBuild(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a new REST client with default timeout.
    pub fn with_default_timeout(base_url: &str) -> Result<Self, RestError> {
        Self::new(base_url, DEFAULT_TIMEOUT)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request.
    ///
    /// # Arguments
    /// * `path` - Request path (e.g., "/v1/pricefeed")
    /// * `headers` - Optional additional headers
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        headers: Option<&[(&str, &str)]>,
    ) -> Result<T, RestError> {
        let url = self.build_url(path);
        tracing::debug!(url = %url, "GET request");

        let request = with_headers(self.client.get(&url), headers);
        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Make a POST request with no body.
    ///
    /// Gemini carries authenticated request content in headers, so nothing
    /// is written to the body.
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        headers: Option<&[(&str, &str)]>,
    ) -> Result<T, RestError> {
        let url = self.build_url(path);
        tracing::debug!(url = %url, "POST request");

        let request = with_headers(self.client.post(&url), headers);
        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Handle HTTP response and deserialize JSON body.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, RestError> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                tracing::debug!(body = %body, error = %e, "Failed to parse response");
                RestError::Parse(e.to_string())
            })
        } else {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), body = %body, "Request failed");

            Err(RestError::HttpError {
                status: status.as_u16(),
                message: body,
            })
        }
    }
}

fn with_headers(mut request: RequestBuilder, headers: Option<&[(&str, &str)]>) -> RequestBuilder {
    if let Some(hdrs) = headers {
        for (key, value) in hdrs {
            request = request.header(*key, *value);
        }
    }
    request
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        let client = RestClient::with_default_timeout("https://api.sandbox.gemini.com").unwrap();
        assert_eq!(
            client.build_url("/v1/pricefeed"),
            "https://api.sandbox.gemini.com/v1/pricefeed"
        );
    }

    #[test]
    fn test_build_url_strips_trailing_slash() {
        let client = RestClient::with_default_timeout("https://api.sandbox.gemini.com/").unwrap();
        assert_eq!(client.base_url(), "https://api.sandbox.gemini.com");
        assert_eq!(
            client.build_url("/v1/balances"),
            "https://api.sandbox.gemini.com/v1/balances"
        );
    }
}
